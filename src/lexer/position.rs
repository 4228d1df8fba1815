use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-indexed line and column in the normalized character stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed), counted in characters
    pub col: usize,
}

impl Position {
    /// Creates a position at the given line and column
    pub fn new(line: usize, col: usize) -> Self {
        Position { line, col }
    }

    /// The position of the first character of any input
    pub fn start() -> Self {
        Position { line: 1, col: 1 }
    }

    /// Moves past `c`: a newline starts the next line, anything else moves one column right
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.col)
    }
}
