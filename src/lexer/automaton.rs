//! Finite-state automaton driving the tokenizer
//!
//! The transition table is a single match over `(state, character class)`.
//! It decides what to do with the next character; the tokenizer owns the
//! lexeme buffer, the cursor and the character source, and carries the
//! step out.

use super::chars::{is_delimiter, is_initial, is_subsequent, is_whitespace};

/// Automaton state between two characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Between tokens; start state and the state after every emission
    #[default]
    Init,
    /// Inside an identifier
    Identifier,
    /// Inside a run of unrecognized characters, waiting for a delimiter
    Error,
    /// Inside a run that outgrew the configured lexeme limit; its text is discarded
    Overflow,
}

/// Single-character tokens emitted straight from `Init`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// `(`
    Left,
    /// `)`
    Right,
}

/// What a finished run is flushed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Flush as `Token::Identifier`
    Identifier,
    /// Flush as `LexError::InvalidToken`
    Invalid,
    /// Flush as `LexError::LexemeTooLong`
    Overflow,
}

/// Action for the character currently under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Consume the character and emit nothing
    Skip,
    /// Consume the character as the first one of a new run
    Begin,
    /// Consume the character and append it to the current run
    Append,
    /// Consume the character and emit it as a parenthesis token
    Emit(Paren),
    /// Leave the character in place and emit the current run
    Flush(Pending),
}

/// A step together with the state to move to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Action to perform
    pub step: Step,
    /// State after the action
    pub next: State,
}

impl Transition {
    fn new(step: Step, next: State) -> Self {
        Transition { step, next }
    }
}

impl State {
    /// Looks up the transition for the next character `c`
    pub fn on_char(self, c: char) -> Transition {
        use State::*;
        use Step::*;

        match self {
            Init => match c {
                c if is_whitespace(c) => Transition::new(Skip, Init),
                '(' => Transition::new(Emit(Paren::Left), Init),
                ')' => Transition::new(Emit(Paren::Right), Init),
                c if is_initial(c) => Transition::new(Begin, Identifier),
                _ => Transition::new(Begin, Error),
            },
            Identifier => match c {
                c if is_subsequent(c) => Transition::new(Append, Identifier),
                c if is_delimiter(c) => Transition::new(Flush(Pending::Identifier), Init),
                // A non-subsequent, non-delimiter character spoils the whole run
                _ => Transition::new(Append, Error),
            },
            Error => {
                if is_delimiter(c) {
                    Transition::new(Flush(Pending::Invalid), Init)
                } else {
                    Transition::new(Append, Error)
                }
            }
            Overflow => {
                if is_delimiter(c) {
                    Transition::new(Flush(Pending::Overflow), Init)
                } else {
                    Transition::new(Skip, Overflow)
                }
            }
        }
    }

    /// What the in-progress run is flushed as once input is exhausted
    pub fn on_end(self) -> Option<Pending> {
        match self {
            State::Init => None,
            State::Identifier => Some(Pending::Identifier),
            State::Error => Some(Pending::Invalid),
            State::Overflow => Some(Pending::Overflow),
        }
    }
}
