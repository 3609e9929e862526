//! Error types for the bot layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for bot operations.
pub type BotResult<T> = Result<T, BotError>;

/// Errors that can occur while configuring the bot or handling a message.
#[derive(Debug, Error)]
pub enum BotError {
    /// The message is plain text, not a `/command`.
    #[error("not a command: {0}")]
    NotACommand(String),

    /// The `/command` is not one the bot knows.
    #[error("unknown command: /{0}")]
    UnknownCommand(String),

    /// An unsupported language code.
    #[error("invalid language: {0}")]
    InvalidLanguage(String),

    /// A configuration value could not be parsed.
    #[error("invalid config value for {key}: {value}")]
    InvalidConfig {
        /// Setting name.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The whitelist file exists but could not be read.
    #[error("failed to read whitelist {path}: {source}")]
    Whitelist {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
