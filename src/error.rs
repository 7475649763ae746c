//! Error types for the lexreply library.
//!
//! All errors are represented by the [`LexreplyError`] enum. Query-time code
//! paths (normalization, vectorization, retrieval) degrade gracefully and do
//! not produce errors on arbitrary input; errors come from malformed corpus
//! data, templates or configuration.
//!
//! # Examples
//!
//! ```
//! use lexreply::error::{LexreplyError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexreplyError::corpus("corpus has no records"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexreply operations.
#[derive(Error, Debug)]
pub enum LexreplyError {
    /// I/O errors (reading corpus or config files, terminal I/O)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (empty corpus, malformed records)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// A response template is malformed or references an unknown placeholder.
    #[error("Template format error: {0}")]
    TemplateFormat(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexreplyError.
pub type Result<T> = std::result::Result<T, LexreplyError>;

impl LexreplyError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LexreplyError::Corpus(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LexreplyError::Index(msg.into())
    }

    /// Create a new template format error.
    pub fn template<S: Into<String>>(msg: S) -> Self {
        LexreplyError::TemplateFormat(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexreplyError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexreplyError::Corpus(msg.into()) // Parse errors come from corpus files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexreplyError::corpus("Test corpus error");
        assert_eq!(error.to_string(), "Corpus error: Test corpus error");

        let error = LexreplyError::template("unknown placeholder 'foo'");
        assert_eq!(
            error.to_string(),
            "Template format error: unknown placeholder 'foo'"
        );

        let error = LexreplyError::config("bad pattern");
        assert_eq!(error.to_string(), "Configuration error: bad pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LexreplyError::from(io_error);

        match error {
            LexreplyError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = LexreplyError::from(json_error);
        assert!(matches!(error, LexreplyError::Json(_)));
    }
}
