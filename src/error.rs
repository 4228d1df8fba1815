//! Error types for building a lexer pipeline
//!
//! Lexical errors are not here: they are values in the token stream, see
//! [`crate::lexer::LexError`]. This module covers failures that happen before a
//! tokenizer exists.

use thiserror::Error;

/// Failures while setting up a character source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Source file could not be opened
    ///
    /// **Triggered by:** a missing file, a directory, or insufficient permissions
    #[error("Cannot open source file '{path}': {message}")]
    InvalidPath {
        /// Path as given by the caller
        path: String,
        /// Reason reported by the operating system
        message: String,
    },
}

/// Result type for sexpr-lexer operations
pub type Result<T> = std::result::Result<T, Error>;
