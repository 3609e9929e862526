//! Per-user session context.
//!
//! A `Session` carries the preferences of one user and is passed
//! explicitly into every command, so no handler reads or writes global
//! per-user state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// How roll results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Each die is listed as text.
    #[default]
    Text,
    /// Each die is shown as an image of its face.
    Picture,
}

impl Mode {
    /// Parse "text" or "picture", ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "picture" | "pictures" | "image" => Some(Self::Picture),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Picture => write!(f, "picture"),
        }
    }
}

/// Preferences of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Reply language.
    pub language: Language,
    /// Presentation mode for rolls.
    pub mode: Mode,
}

impl Session {
    /// A session with the given language and text mode.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            mode: Mode::Text,
        }
    }
}

/// Sessions keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: HashMap<u64, Session>,
    default_language: Language,
}

impl SessionStore {
    /// An empty store whose new sessions start in `default_language`.
    pub fn new(default_language: Language) -> Self {
        Self {
            sessions: HashMap::new(),
            default_language,
        }
    }

    /// The session for a user, created on first use.
    pub fn session_mut(&mut self, user_id: u64) -> &mut Session {
        let language = self.default_language;
        self.sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(language))
    }

    /// The session for a user, if one exists.
    pub fn get(&self, user_id: u64) -> Option<&Session> {
        self.sessions.get(&user_id)
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if no sessions exist yet.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
