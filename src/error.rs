//! Error types for ahklex

use thiserror::Error;

/// Result type alias for ahklex operations
pub type Result<T> = std::result::Result<T, LexError>;

/// Errors raised while loading input or configuration
///
/// The lexing passes themselves never fail.
#[derive(Error, Debug)]
pub enum LexError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidSetting { key: String, expected: &'static str },

    #[error("Unknown keyword list: {0}")]
    UnknownKeywordList(String),

    #[error("Unknown token type: {0}")]
    UnknownTokenType(String),

    #[error("Unknown colour: {0}")]
    UnknownColor(String),

    #[error("{0}")]
    Message(String),
}
