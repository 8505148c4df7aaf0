//! Error types for the lexaug library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexaugError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexaug::error::{LexaugError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexaugError::invalid_argument("probability must be within [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexaug operations.
#[derive(Error, Debug)]
pub enum LexaugError {
    /// I/O errors (reading resource files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A lexical resource (stop words, synonym database) could not be loaded
    #[error("Resource error: {0}")]
    Resource(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed resource content
    #[error("Parse error: {0}")]
    Parse(String),

    /// Embedding table errors
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexaugError.
pub type Result<T> = std::result::Result<T, LexaugError>;

impl LexaugError {
    /// Create a new resource-load error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        LexaugError::Resource(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexaugError::Analysis(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexaugError::Parse(msg.into())
    }

    /// Create a new embedding error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        LexaugError::Embedding(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexaugError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexaugError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexaugError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexaugError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexaugError::resource("stop words for 'klingon'");
        assert_eq!(error.to_string(), "Resource error: stop words for 'klingon'");

        let error = LexaugError::parse("line 3");
        assert_eq!(error.to_string(), "Parse error: line 3");

        let error = LexaugError::invalid_argument("p = 1.5");
        assert_eq!(error.to_string(), "Error: Invalid argument: p = 1.5");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexaugError::from(io_error);

        match error {
            LexaugError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
