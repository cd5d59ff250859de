//! Error types for jshl
//!
//! Highlighting itself never fails. These errors come from the
//! surfaces around it: theme and config files, input, and the CLI.

use thiserror::Error;

/// Result type alias for jshl operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Theme is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown token kind: {0}")]
    UnknownKind(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("{0}")]
    Usage(String),
}
