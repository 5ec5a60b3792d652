//! Domain error types

use thiserror::Error;

use super::toast::{Field, USAGE};

/// Error when command-line arguments do not form a valid request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Expected 3 arguments, got {found}. {}", USAGE)]
    WrongArgumentCount { found: usize },

    #[error("Argument <{field}> is not valid Unicode")]
    InvalidUnicode { field: Field },

    #[error("Argument <{field}> is {len} bytes long, the limit is {max}")]
    TooLong { field: Field, len: usize, max: usize },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
