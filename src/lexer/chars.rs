//! Character classes used by the tokenizer
//!
//! All classification is ASCII-only and locale independent. Anything outside
//! these classes (digits at the start of a token, control characters, any
//! non-ASCII character) opens an invalid-token run.

/// Whitespace as understood by C `isspace`: space, tab, newline, vertical
/// tab, form feed and carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Characters that end an identifier or an invalid run without being part of it
pub fn is_delimiter(c: char) -> bool {
    is_whitespace(c) || matches!(c, '(' | ')' | '"' | ';')
}

/// Non-letter characters allowed to start an identifier
pub fn is_special_initial(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '%' | '&' | '*' | '/' | ':' | '<' | '=' | '>' | '?' | '@' | '^' | '_' | '~'
    )
}

/// Characters allowed to start an identifier
pub fn is_initial(c: char) -> bool {
    c.is_ascii_alphabetic() || is_special_initial(c)
}

/// `+` or `-`
pub fn is_explicit_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Non-initial characters allowed after the first character of an identifier
pub fn is_special_subsequent(c: char) -> bool {
    is_explicit_sign(c) || matches!(c, '.' | '@')
}

/// Characters allowed after the first character of an identifier
pub fn is_subsequent(c: char) -> bool {
    is_initial(c) || c.is_ascii_digit() || is_special_subsequent(c)
}
