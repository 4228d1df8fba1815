//! Lexical analysis for S-expression source
//!
//! Two lazy stages: a [`NewlineNormalizer`] rewrites line endings, and a
//! [`Tokenizer`] runs the automaton over the normalized characters, yielding
//! one [`LexResult`] per pull.

mod automaton;
pub mod chars;
mod normalizer;
mod position;
mod token;
mod tokenizer;

pub use normalizer::NewlineNormalizer;
pub use position::Position;
pub use token::{LexError, LexResult, Token};
pub use tokenizer::{LexOptions, Tokenizer};
