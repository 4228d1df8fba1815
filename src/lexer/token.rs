use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single token from the source
///
/// Every positioned variant records the line and column of the first
/// character of its lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// End of input; every pull after the first `Eof` yields `Eof` again
    Eof,
    /// Left parenthesis `(`
    LParen {
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        col: usize,
    },
    /// Right parenthesis `)`
    RParen {
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        col: usize,
    },
    /// Maximal run of identifier characters, never empty
    Identifier {
        /// Line number where the identifier starts (1-indexed)
        line: usize,
        /// Column number where the identifier starts (1-indexed)
        col: usize,
        /// Identifier text
        lexeme: String,
    },
}

impl Token {
    /// Source text of the token, or `"EOF"` for end of input
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Eof => "EOF",
            Token::LParen { .. } => "(",
            Token::RParen { .. } => ")",
            Token::Identifier { lexeme, .. } => lexeme,
        }
    }

    /// Where the token starts; `None` for `Eof`
    pub fn position(&self) -> Option<Position> {
        match self {
            Token::Eof => None,
            Token::LParen { line, col }
            | Token::RParen { line, col }
            | Token::Identifier { line, col, .. } => Some(Position::new(*line, *col)),
        }
    }

    /// Check if this is the end-of-input sentinel
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "['{}', {}]", self.lexeme(), pos),
            None => write!(f, "['{}']", self.lexeme()),
        }
    }
}

/// Lexical errors
///
/// These are values in the token stream, not stream failures: after
/// producing one the tokenizer has already resynchronized and the next
/// pull continues with the following token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexError {
    /// A run of characters that cannot start a token, ended by a delimiter
    ///
    /// **Triggered by:** a character outside the identifier and parenthesis classes
    /// **Example:** `(1abc)` reports `1abc` at line 1, column 2
    #[error("Error [line: {line}, column: {col}]: Unknown token '{lexeme}'.")]
    InvalidToken {
        /// Line number where the run starts
        line: usize,
        /// Column number where the run starts
        col: usize,
        /// The unrecognized text
        lexeme: String,
    },

    /// An identifier or invalid run longer than the configured limit
    ///
    /// Only produced when `LexOptions::max_lexeme_len` is set. The oversized
    /// text is discarded up to the next delimiter.
    #[error(
        "Error [line: {line}, column: {col}]: Token exceeds maximum length of {limit} characters."
    )]
    LexemeTooLong {
        /// Line number where the run starts
        line: usize,
        /// Column number where the run starts
        col: usize,
        /// Configured maximum length
        limit: usize,
    },
}

impl LexError {
    /// Where the offending run starts
    pub fn position(&self) -> Position {
        match self {
            LexError::InvalidToken { line, col, .. } | LexError::LexemeTooLong { line, col, .. } => {
                Position::new(*line, *col)
            }
        }
    }

    /// The offending text; empty for `LexemeTooLong`, whose text is discarded
    pub fn lexeme(&self) -> &str {
        match self {
            LexError::InvalidToken { lexeme, .. } => lexeme,
            LexError::LexemeTooLong { .. } => "",
        }
    }
}

/// Result of one tokenizer pull
pub type LexResult = std::result::Result<Token, LexError>;
