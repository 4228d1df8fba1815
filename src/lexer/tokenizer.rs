use super::automaton::{Paren, Pending, State, Step, Transition};
use super::normalizer::NewlineNormalizer;
use super::position::Position;
use super::token::{LexError, LexResult, Token};
use crate::error::Result;
use crate::source::{self, ReaderChars};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::iter::{FusedIterator, Peekable};
use std::path::Path;

/// Tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexOptions {
    /// Longest identifier or invalid run kept in memory (default: unbounded)
    ///
    /// Longer runs are discarded up to the next delimiter and reported as
    /// `LexError::LexemeTooLong`. A limit of zero behaves like one.
    pub max_lexeme_len: Option<usize>,
}

/// Pull-based tokenizer for S-expression source
///
/// Owns its character source through a [`NewlineNormalizer`], so positions
/// are the same whether the input uses `\n`, `\r\n` or `\r` line endings.
/// Memory use is bounded by the longest lexeme, never by the input size.
///
/// Call [`Tokenizer::next_token`] repeatedly, or use the `Iterator`
/// implementation, which yields every result up to and including the first
/// `Eof` and then stops.
#[derive(Debug)]
pub struct Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    /// Normalized source with one character of lookahead
    chars: Peekable<NewlineNormalizer<I>>,
    /// Current automaton state
    state: State,
    /// Text of the run in progress
    lexeme: String,
    /// Characters in `lexeme`
    lexeme_len: usize,
    /// Position of the first character of the run in progress
    start: Position,
    /// Position of the next character to be consumed
    cursor: Position,
    /// Set once `Eof` has been produced
    exhausted: bool,
    options: LexOptions,
}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    /// Creates a tokenizer over a character source with default options
    pub fn new(chars: I) -> Self {
        Self::with_options(chars, LexOptions::default())
    }

    /// Creates a tokenizer over a character source
    pub fn with_options(chars: I, options: LexOptions) -> Self {
        Tokenizer {
            chars: NewlineNormalizer::new(chars).peekable(),
            state: State::Init,
            lexeme: String::new(),
            lexeme_len: 0,
            start: Position::start(),
            cursor: Position::start(),
            exhausted: false,
            options,
        }
    }

    /// Position of the next character to be consumed
    pub fn position(&self) -> Position {
        self.cursor
    }

    /// Options this tokenizer was created with
    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Pulls the next token or lexical error
    ///
    /// Lexical errors do not end the stream: the tokenizer resynchronizes at
    /// the next delimiter and the following call carries on. Once `Eof` has
    /// been returned, every further call returns `Eof` again.
    pub fn next_token(&mut self) -> LexResult {
        if self.exhausted {
            return Ok(Token::Eof);
        }

        while let Some(&c) = self.chars.peek() {
            let Transition { step, next } = self.state.on_char(c);
            self.state = next;

            match step {
                Step::Skip => self.consume(c),
                Step::Begin => {
                    self.start = self.cursor;
                    self.consume(c);
                    self.push(c);
                }
                Step::Append => {
                    self.consume(c);
                    self.push(c);
                }
                Step::Emit(paren) => {
                    let Position { line, col } = self.cursor;
                    self.consume(c);
                    let token = match paren {
                        Paren::Left => Token::LParen { line, col },
                        Paren::Right => Token::RParen { line, col },
                    };
                    tracing::trace!(line, col, "lexed {}", token.lexeme());
                    return Ok(token);
                }
                Step::Flush(pending) => return self.flush(pending),
            }
        }

        match self.state.on_end() {
            Some(pending) => {
                self.state = State::Init;
                self.flush(pending)
            }
            None => {
                tracing::trace!(line = self.cursor.line, col = self.cursor.col, "lexed EOF");
                self.exhausted = true;
                Ok(Token::Eof)
            }
        }
    }

    fn consume(&mut self, c: char) {
        self.chars.next();
        self.cursor.advance(c);
    }

    fn push(&mut self, c: char) {
        if let Some(limit) = self.options.max_lexeme_len {
            if self.lexeme_len >= limit.max(1) {
                tracing::debug!(
                    line = self.start.line,
                    col = self.start.col,
                    limit,
                    "lexeme exceeds limit, discarding until next delimiter"
                );
                self.state = State::Overflow;
                self.lexeme.clear();
                self.lexeme_len = 0;
                return;
            }
        }

        self.lexeme.push(c);
        self.lexeme_len += 1;
    }

    /// Emits the run in progress and clears the buffer
    fn flush(&mut self, pending: Pending) -> LexResult {
        let Position { line, col } = self.start;
        let lexeme = std::mem::take(&mut self.lexeme);
        self.lexeme_len = 0;

        match pending {
            Pending::Identifier => {
                tracing::trace!(line, col, lexeme = %lexeme, "lexed identifier");
                Ok(Token::Identifier { line, col, lexeme })
            }
            Pending::Invalid => {
                tracing::debug!(line, col, lexeme = %lexeme.escape_debug(), "unknown token");
                Err(LexError::InvalidToken { line, col, lexeme })
            }
            Pending::Overflow => {
                let limit = self.options.max_lexeme_len.unwrap_or_default().max(1);
                Err(LexError::LexemeTooLong { line, col, limit })
            }
        }
    }
}

impl<R> Tokenizer<ReaderChars<R>>
where
    R: Read,
{
    /// Tokenizes UTF-8 text read lazily from `reader`
    pub fn from_reader(reader: R) -> Self {
        Self::new(source::from_reader(reader))
    }
}

impl Tokenizer<ReaderChars<BufReader<File>>> {
    /// Opens `path` and tokenizes its contents lazily
    ///
    /// Fails before any tokenizing happens if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(source::open(path)?))
    }
}

impl<I> Iterator for Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    type Item = LexResult;

    fn next(&mut self) -> Option<LexResult> {
        if self.exhausted {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl<I> FusedIterator for Tokenizer<I> where I: Iterator<Item = char> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<LexResult> {
        Tokenizer::new(source.chars()).collect()
    }

    fn ident(lexeme: &str, line: usize, col: usize) -> LexResult {
        Ok(Token::Identifier {
            line,
            col,
            lexeme: lexeme.to_string(),
        })
    }

    fn invalid(lexeme: &str, line: usize, col: usize) -> LexResult {
        Err(LexError::InvalidToken {
            line,
            col,
            lexeme: lexeme.to_string(),
        })
    }

    #[test]
    fn test_simple_sexpr() {
        let tokens = lex("(among us sussy)");

        assert_eq!(
            tokens,
            vec![
                Ok(Token::LParen { line: 1, col: 1 }),
                ident("among", 1, 2),
                ident("us", 1, 8),
                ident("sussy", 1, 11),
                Ok(Token::RParen { line: 1, col: 16 }),
                Ok(Token::Eof),
            ]
        );
    }

    #[test]
    fn test_identifier_flushed_at_end_of_input() {
        assert_eq!(lex("display"), vec![ident("display", 1, 1), Ok(Token::Eof)]);
    }

    #[test]
    fn test_error_flushed_at_end_of_input() {
        assert_eq!(lex("  42"), vec![invalid("42", 1, 3), Ok(Token::Eof)]);
    }

    #[test]
    fn test_column_is_first_character() {
        let tokens = lex("  \n   set-car!");
        assert_eq!(tokens[0], ident("set-car!", 2, 4));
    }

    #[test]
    fn test_delimiters_end_identifiers() {
        assert_eq!(
            lex("a(b)c\"d;e"),
            vec![
                ident("a", 1, 1),
                Ok(Token::LParen { line: 1, col: 2 }),
                ident("b", 1, 3),
                Ok(Token::RParen { line: 1, col: 4 }),
                ident("c", 1, 5),
                invalid("\"d", 1, 6),
                invalid(";e", 1, 8),
                Ok(Token::Eof),
            ]
        );
    }

    #[test]
    fn test_unknown_character_spoils_identifier() {
        assert_eq!(
            lex("(ab#c d)"),
            vec![
                Ok(Token::LParen { line: 1, col: 1 }),
                invalid("ab#c", 1, 2),
                ident("d", 1, 7),
                Ok(Token::RParen { line: 1, col: 8 }),
                Ok(Token::Eof),
            ]
        );
    }

    #[test]
    fn test_crlf_positions() {
        assert_eq!(
            lex("a\r\nb"),
            vec![ident("a", 1, 1), ident("b", 2, 1), Ok(Token::Eof)]
        );
    }

    #[test]
    fn test_next_token_after_eof() {
        let mut tokenizer = Tokenizer::new("x".chars());
        assert_eq!(tokenizer.next_token(), ident("x", 1, 1));
        assert_eq!(tokenizer.next_token(), Ok(Token::Eof));
        assert_eq!(tokenizer.next_token(), Ok(Token::Eof));
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_position_tracks_cursor() {
        let mut tokenizer = Tokenizer::new("ab\ncd".chars());
        assert_eq!(tokenizer.position(), Position::new(1, 1));

        tokenizer.next_token().unwrap();
        // The newline after "ab" is a delimiter and is left unconsumed
        assert_eq!(tokenizer.position(), Position::new(1, 3));

        tokenizer.next_token().unwrap();
        assert_eq!(tokenizer.position(), Position::new(2, 3));
    }

    #[test]
    fn test_max_lexeme_len() {
        let options = LexOptions {
            max_lexeme_len: Some(3),
        };
        let tokens: Vec<_> =
            Tokenizer::with_options("(abc abcdef 12345 x)".chars(), options).collect();

        assert_eq!(
            tokens,
            vec![
                Ok(Token::LParen { line: 1, col: 1 }),
                ident("abc", 1, 2),
                Err(LexError::LexemeTooLong {
                    line: 1,
                    col: 6,
                    limit: 3
                }),
                Err(LexError::LexemeTooLong {
                    line: 1,
                    col: 13,
                    limit: 3
                }),
                ident("x", 1, 19),
                Ok(Token::RParen { line: 1, col: 20 }),
                Ok(Token::Eof),
            ]
        );
    }

    #[test]
    fn test_max_lexeme_len_at_end_of_input() {
        let options = LexOptions {
            max_lexeme_len: Some(0),
        };
        let tokens: Vec<_> = Tokenizer::with_options("ab".chars(), options).collect();

        assert_eq!(
            tokens,
            vec![
                Err(LexError::LexemeTooLong {
                    line: 1,
                    col: 1,
                    limit: 1
                }),
                Ok(Token::Eof),
            ]
        );
    }

    #[test]
    fn test_from_reader() {
        let tokens: Vec<_> = Tokenizer::from_reader("(λ x)".as_bytes()).collect();

        assert_eq!(
            tokens,
            vec![
                Ok(Token::LParen { line: 1, col: 1 }),
                invalid("λ", 1, 2),
                ident("x", 1, 4),
                Ok(Token::RParen { line: 1, col: 5 }),
                Ok(Token::Eof),
            ]
        );
    }
}
