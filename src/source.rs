//! Character sources for the tokenizer
//!
//! The tokenizer accepts any `Iterator<Item = char>`; a `&str` only needs
//! `.chars()`. This module covers byte sources: [`ReaderChars`] decodes UTF-8
//! lazily from any [`Read`] implementation, and [`open`] builds one over a
//! file.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Bytes, Read};
use std::iter::FusedIterator;
use std::path::Path;

/// Lazily decodes UTF-8 characters from a byte reader
///
/// Malformed sequences decode to U+FFFD. An I/O error ends the sequence
/// and is logged; the characters read before it are still delivered.
#[derive(Debug)]
pub struct ReaderChars<R> {
    /// Underlying byte stream
    bytes: Bytes<R>,
    /// Byte read past an incomplete sequence, decoded on the next call
    pending: Option<u8>,
    /// Set after end of input or an I/O error
    done: bool,
}

/// Wraps a reader as a character source
///
/// Wrap unbuffered readers such as sockets in a [`BufReader`] first: bytes
/// are pulled one at a time.
pub fn from_reader<R: Read>(reader: R) -> ReaderChars<R> {
    ReaderChars {
        bytes: reader.bytes(),
        pending: None,
        done: false,
    }
}

/// Opens a file as a buffered character source
///
/// This is the only fallible step of a file pipeline: once it succeeds the
/// tokenizer can be built and never fails as a whole.
pub fn open(path: impl AsRef<Path>) -> Result<ReaderChars<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::InvalidPath {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "opened source file");
    Ok(from_reader(BufReader::new(file)))
}

/// Length of the UTF-8 sequence introduced by `lead`, or `None` if it cannot start one
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl<R: Read> ReaderChars<R> {
    fn next_byte(&mut self) -> Option<u8> {
        if let Some(b) = self.pending.take() {
            return Some(b);
        }
        if self.done {
            return None;
        }

        match self.bytes.next() {
            Some(Ok(b)) => Some(b),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "read failed, ending character stream");
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<R: Read> Iterator for ReaderChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let lead = self.next_byte()?;
        let Some(len) = sequence_len(lead) else {
            return Some(char::REPLACEMENT_CHARACTER);
        };
        if len == 1 {
            return Some(char::from(lead));
        }

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(len).skip(1) {
            match self.next_byte() {
                Some(b) if b & 0xC0 == 0x80 => *slot = b,
                // Truncated sequence: keep the byte so it starts the next character
                Some(b) => {
                    self.pending = Some(b);
                    return Some(char::REPLACEMENT_CHARACTER);
                }
                None => return Some(char::REPLACEMENT_CHARACTER),
            }
        }

        // Overlong encodings and surrogates pass the shape checks above
        let c = std::str::from_utf8(&buf[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Some(c)
    }
}

impl<R: Read> FusedIterator for ReaderChars<R> {}
