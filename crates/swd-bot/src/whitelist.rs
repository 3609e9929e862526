//! Subscription whitelist.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{BotError, BotResult};

/// Usernames allowed to use the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    users: HashSet<String>,
}

impl Whitelist {
    /// Create an empty whitelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a whitelist from newline-separated usernames. Entries are
    /// trimmed and blank lines skipped.
    pub fn from_lines(text: &str) -> Self {
        let users = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { users }
    }

    /// Load a whitelist file. A missing file gives an empty whitelist.
    pub fn load(path: &Path) -> BotResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let list = Self::from_lines(&text);
                tracing::info!(path = %path.display(), users = list.len(), "loaded whitelist");
                Ok(list)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "whitelist file not found, starting with an empty whitelist"
                );
                Ok(Self::new())
            }
            Err(source) => Err(BotError::Whitelist {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Whether a username is on the list.
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains(username)
    }

    /// Add a username.
    pub fn insert(&mut self, username: impl Into<String>) {
        self.users.insert(username.into());
    }

    /// Number of usernames on the list.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if nobody is on the list.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
