//! # sexpr-lexer - Streaming Lexer for S-expressions
//!
//! A lazy, pull-based lexer for a minimal S-expression surface syntax:
//! parenthesized lists of whitespace-delimited identifiers. Characters go in
//! one at a time, tokens come out one at a time, and every token carries the
//! line and column of its first character.
//!
//! ## Features
//!
//! - **Streaming** - memory use is bounded by the longest lexeme, not the input
//! - **Error recovery** - unknown characters become error values and lexing continues
//! - **Line-ending agnostic** - `\n`, `\r\n` and `\r` all count as one line break
//! - **Any source** - strings, readers, files, or any `Iterator<Item = char>`
//!
//! ## Quick Start
//!
//! ```rust
//! use sexpr_lexer::Token;
//!
//! let tokens: Vec<_> = sexpr_lexer::tokenize("(among us)").collect();
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Ok(Token::LParen { line: 1, col: 1 }),
//!         Ok(Token::Identifier { line: 1, col: 2, lexeme: "among".to_string() }),
//!         Ok(Token::Identifier { line: 1, col: 8, lexeme: "us".to_string() }),
//!         Ok(Token::RParen { line: 1, col: 10 }),
//!         Ok(Token::Eof),
//!     ]
//! );
//! ```
//!
//! ### Pulling Tokens by Hand
//!
//! ```rust
//! use sexpr_lexer::{Token, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("(display sussy)".chars());
//! loop {
//!     match tokenizer.next_token() {
//!         Ok(Token::Eof) => break,
//!         Ok(token) => println!("{}", token),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//!
//! // Pulling past the end keeps returning Eof
//! assert_eq!(tokenizer.next_token(), Ok(Token::Eof));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! chars → NewlineNormalizer → Tokenizer (automaton) → Token | LexError
//! ```
//!
//! - [`NewlineNormalizer`] - collapses `\r\n` and `\r` into `\n`
//! - [`Tokenizer`] - runs the automaton and tracks positions
//! - [`source`] - decodes characters from readers and files
//!
//! ## Error Handling
//!
//! Lexical errors are values in the stream. The tokenizer skips to the next
//! delimiter and carries on, so the consumer decides whether one bad token
//! is fatal:
//!
//! ```rust
//! use sexpr_lexer::{LexError, Token};
//!
//! let results: Vec<_> = sexpr_lexer::tokenize("(car 42)").collect();
//!
//! assert_eq!(
//!     results[2],
//!     Err(LexError::InvalidToken { line: 1, col: 6, lexeme: "42".to_string() })
//! );
//! assert_eq!(results[2].as_ref().unwrap_err().to_string(),
//!            "Error [line: 1, column: 6]: Unknown token '42'.");
//! assert_eq!(results[3], Ok(Token::RParen { line: 1, col: 8 }));
//! ```
//!
//! Opening a file is the only step that fails as a whole, and it fails
//! before a tokenizer exists:
//!
//! ```rust
//! use sexpr_lexer::{Error, Tokenizer};
//!
//! match Tokenizer::open("no/such/file.scm") {
//!     Err(Error::InvalidPath { path, .. }) => assert_eq!(path, "no/such/file.scm"),
//!     Ok(_) => panic!("file should not exist"),
//! }
//! ```
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the lexer crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod source;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{
    LexError, LexOptions, LexResult, NewlineNormalizer, Position, Token, Tokenizer,
};

/// Type alias for the tokenizer, under the name S-expression scanners usually go by.
pub type Scanner<I> = Tokenizer<I>;

/// Tokenizes a string lazily with default options
pub fn tokenize(source: &str) -> Tokenizer<std::str::Chars<'_>> {
    Tokenizer::new(source.chars())
}
