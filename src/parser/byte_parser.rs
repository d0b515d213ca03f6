//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] for parsing the textual graph format
//! with support for peeking, consuming, keyword matching, comment skipping,
//! and the token kinds the edge-list grammar needs (unsigned integers,
//! identifiers and double-quoted strings).

use crate::parser::byte_source::{ByteSource, InMemoryByteSource};
use crate::parser::parsing_error::ParsingError;
use std::fs;
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// Cursor over the bytes of a graph file.
///
/// # Features
/// - Works with any [ByteSource]
/// - Case-insensitive keyword matching (`digraph`, `DiGraph`, ...),
///   exact matching for single bytes
/// - Whitespace and comment skipping (`// line`, `# line`, `/* block */`)
/// - Double-quoted strings with `\"` escapes
///
/// # Example
/// ```
/// use kmertag::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("strict digraph {\n\tS0 -> S1;\n}");
/// assert!(parser.consume_if_word("strict"));
/// parser.skip_whitespace();
/// assert!(parser.peek_is_word("DIGRAPH"));
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Parses a copy of `input`.
    pub fn for_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Parses a copy of `input`.
    pub fn for_str(input: &str) -> Self {
        Self::for_bytes(input.as_bytes())
    }

    /// Creates a new `ByteParser` reading the whole file into memory.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn for_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let contents = fs::read(path)?;
        Ok(Self::new(InMemoryByteSource::from_vec(contents)))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Wraps a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Current byte, not consumed.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Consumes and returns the current byte.
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Skips (consumes) a comment if present.
    ///
    /// Three comment forms are recognised: `// ...` and `# ...` running to
    /// the end of the line, and `/* ... */` blocks.
    ///
    /// # Returns
    /// * `Ok(true)` - A comment was found and consumed
    /// * `Ok(false)` - No comment at current position
    /// * `Err(ParsingError)` - A block comment was opened but never closed
    pub fn skip_comment(&mut self) -> Result<bool, ParsingError> {
        if self.consume_if_sequence(b"//") || self.consume_if(b'#') {
            self.consume_until(b'\n', ConsumeMode::Inclusive);
            return Ok(true);
        }

        if self.consume_if_sequence(b"/*") {
            if !self.consume_until_sequence(b"*/", ConsumeMode::Inclusive) {
                return Err(ParsingError::unclosed_comment(self));
            }
            return Ok(true);
        }

        Ok(false)
    }

    /// Skips (consumes) all consecutive whitespace and comments.
    ///
    /// # Errors
    /// Returns an error if an unclosed block comment is encountered.
    pub fn skip_comment_and_whitespace(&mut self) -> Result<(), ParsingError> {
        self.skip_whitespace();

        while self.skip_comment()? {
            self.skip_whitespace();
        }

        Ok(())
    }

    /// Checks if the current byte is exactly `ch`.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Checks if the following bytes match the given keyword (case-insensitive).
    ///
    /// The keyword must not be directly followed by another identifier byte,
    /// so `digraphs` does not match `digraph`.
    pub fn peek_is_word(&self, word: &str) -> bool {
        let word = word.as_bytes();
        let context = self.source.peek_slice(word.len() + 1);

        if context.len() < word.len() || !context[..word.len()].eq_ignore_ascii_case(word) {
            return false;
        }

        context.get(word.len()).is_none_or(|&b| !is_identifier_byte(b))
    }

    /// Checks if the following bytes match the given byte sequence exactly.
    #[inline]
    pub fn peek_is_sequence(&self, sequence: &[u8]) -> bool {
        self.source.peek_slice(sequence.len()) == sequence
    }

    /// Consumes `ch` if it is next, reporting whether it was.
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Consumes the next bytes if they form the given keyword (case-insensitive).
    pub fn consume_if_word(&mut self, word: &str) -> bool {
        if !self.peek_is_word(word) {
            return false;
        }

        for _ in 0..word.len() {
            self.next_byte();
        }

        true
    }

    /// Consumes the next bytes if they match the given byte sequence exactly.
    pub fn consume_if_sequence(&mut self, sequence: &[u8]) -> bool {
        if !self.peek_is_sequence(sequence) {
            return false;
        }

        for _ in 0..sequence.len() {
            self.next_byte();
        }

        true
    }

    /// Advances to `target`, consuming it too in [ConsumeMode::Inclusive].
    ///
    /// Returns `false` if the input ended first.
    pub fn consume_until(&mut self, target: u8, mode: ConsumeMode) -> bool {
        while let Some(b) = self.peek() {
            if b == target {
                if mode == ConsumeMode::Inclusive {
                    self.next_byte();
                }
                return true;
            }
            self.next_byte();
        }
        false
    }

    /// Advances to the next occurrence of `sequence`.
    ///
    /// Returns `false` if the input ended first.
    pub fn consume_until_sequence(&mut self, sequence: &[u8], mode: ConsumeMode) -> bool {
        loop {
            if self.is_eof() {
                return false;
            }

            if self.peek_is_sequence(sequence) {
                if mode == ConsumeMode::Inclusive {
                    for _ in 0..sequence.len() {
                        self.next_byte();
                    }
                }
                return true;
            }

            self.next_byte();
        }
    }

    /// Parses a non-negative decimal integer.
    ///
    /// # Returns
    /// * `Some(u64)` - The parsed number; digits are consumed
    /// * `None` - If no digit is at the current position or the value
    ///   overflows; on overflow the digits read so far are consumed
    pub fn parse_unsigned(&mut self) -> Option<u64> {
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut value: u64 = 0;
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
            self.next_byte();
        }

        Some(value)
    }

    /// Parses an identifier made of ASCII alphanumerics and underscores.
    ///
    /// Returns an empty string if no identifier starts at the current position.
    pub fn parse_identifier(&mut self) -> String {
        let mut identifier = String::new();
        while let Some(b) = self.peek() {
            if !is_identifier_byte(b) {
                break;
            }
            identifier.push(b as char);
            self.next_byte();
        }
        identifier
    }

    /// Parses a double-quoted string, returning its content without quotes.
    ///
    /// Assumes the opening quote has not been consumed yet. A backslash
    /// escapes the following byte.
    ///
    /// # Errors
    /// Returns an error if the string is never closed.
    pub fn parse_quoted_string(&mut self) -> Result<String, ParsingError> {
        if !self.consume_if(b'"') {
            return Err(ParsingError::invalid_edge_label(
                self,
                "Expected opening '\"'".to_string(),
            ));
        }

        let mut content = String::new();
        loop {
            match self.next_byte() {
                Some(b'"') => return Ok(content),
                Some(b'\\') => match self.next_byte() {
                    Some(escaped) => content.push(escaped as char),
                    None => return Err(ParsingError::unclosed_string(self)),
                },
                Some(b) => content.push(b as char),
                None => return Err(ParsingError::unclosed_string(self)),
            }
        }
    }

    /// Whether all input is consumed.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Up to `k` upcoming bytes, for error messages.
    pub fn get_context(&self, k: usize) -> Vec<u8> {
        self.source.get_context(k)
    }

    /// Like [ByteParser::get_context], lossily decoded.
    pub fn get_context_as_string(&self, k: usize) -> String {
        String::from_utf8_lossy(&self.get_context(k)).into_owned()
    }
}

/// Bytes allowed in identifiers and keywords.
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether the `consume_until*` methods also consume the target.
///
/// # Examples
/// ```
/// use kmertag::parser::byte_parser::{ByteParser, ConsumeMode};
///
/// let mut parser = ByteParser::for_str("S0 -> S1 [ label = \"A (0)\" ];");
///
/// // Inclusive: consume up to and including '['
/// parser.consume_until(b'[', ConsumeMode::Inclusive);
/// assert_eq!(parser.peek(), Some(b' '));
///
/// // Exclusive: stop right at the opening quote
/// parser.consume_until(b'"', ConsumeMode::Exclusive);
/// assert_eq!(parser.peek(), Some(b'"'));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConsumeMode {
    /// Target is consumed
    Inclusive,

    /// Cursor stops on the target
    Exclusive,
}
