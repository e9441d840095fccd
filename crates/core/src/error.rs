//! Base error types for hookwright
//!
//! This module provides the foundation error types that all crates can use.

use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A raw action entry could not be turned into an action descriptor
    #[error("Malformed action entry: {message}")]
    ActionExtraction { message: String },

    /// Hook label does not name a known hook kind
    #[error("Unknown hook kind '{0}' (expected one of: before, after, failed)")]
    UnknownHookKind(String),

    /// Settings could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Create an extraction error for a malformed action entry
    pub fn extraction(message: impl Into<String>) -> Self {
        Error::ActionExtraction {
            message: message.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
