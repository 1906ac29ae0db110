//! Code-point indexed read head over a statement.
//!
//! All positions are counted in code points, which is what makes the
//! offsets carried by [`SyntaxError`] independent of the text encoding.

use crate::class::CharClass;
use crate::error::SyntaxError;

/// Read head over the source of a statement.
///
/// The position only moves forward while parsing and never exceeds the
/// length of the source.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: Vec<char>,
    position: usize,
}

impl Cursor {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &str) -> Self {
        Cursor {
            source: source.chars().collect(),
            position: 0,
        }
    }

    /// Current offset in code points.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the source in code points.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Moves the cursor back to the start of the source.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the code point `offset` places ahead, if any.
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.source.get(self.position + offset).copied()
    }

    /// Returns up to `len` code points starting at the cursor.
    pub fn peek(&self, len: usize) -> String {
        self.peek_at(len, 0)
    }

    /// Returns up to `len` code points starting `offset` places ahead.
    ///
    /// The result is empty when the cursor is at the end or the range lies
    /// outside the source, and truncated when it runs past the end.
    pub fn peek_at(&self, len: usize, offset: usize) -> String {
        if self.at_end() {
            return String::new();
        }
        let start = (self.position + offset).min(self.source.len());
        let end = start.saturating_add(len).min(self.source.len());
        self.source[start..end].iter().collect()
    }

    /// Does `literal` come next? Never consumes.
    pub fn expect(&self, literal: &str) -> bool {
        self.expect_at(literal, 0)
    }

    /// Does `literal` start `offset` places ahead? Never consumes.
    pub fn expect_at(&self, literal: &str, offset: usize) -> bool {
        if self.at_end() {
            return false;
        }
        let start = self.position + offset;
        let mut index = start;
        for expected in literal.chars() {
            match self.source.get(index) {
                Some(&c) if c == expected => index += 1,
                _ => return false,
            }
        }
        true
    }

    /// Does the next code point belong to `class`? Never consumes.
    pub fn expect_match(&self, class: CharClass) -> bool {
        self.expect_match_at(class, 0)
    }

    /// Does the code point `offset` places ahead belong to `class`?
    pub fn expect_match_at(&self, class: CharClass, offset: usize) -> bool {
        self.peek_char(offset).is_some_and(class)
    }

    /// Consumes and returns the next `n` code points.
    ///
    /// Fails without moving if fewer than `n` remain.
    pub fn consume(&mut self, n: usize) -> Result<String, SyntaxError> {
        let end = self.position + n;
        if end > self.source.len() {
            return Err(self.error(format!(
                "tried to consume {n} code points, only {} remain",
                self.source.len() - self.position
            )));
        }
        let chunk = self.source[self.position..end].iter().collect();
        self.position = end;
        Ok(chunk)
    }

    /// Consumes the next code point.
    pub fn consume_char(&mut self) -> Result<char, SyntaxError> {
        match self.peek_char(0) {
            Some(c) => {
                self.position += 1;
                Ok(c)
            }
            None => Err(self.error("tried to consume past the end of input")),
        }
    }

    /// Consumes `literal`, failing without moving if it does not come next.
    pub fn consume_literal<'l>(&mut self, literal: &'l str) -> Result<&'l str, SyntaxError> {
        if !self.expect(literal) {
            return Err(self.error(format!(
                "expected \"{literal}\", found {}",
                self.describe_ahead(5)
            )));
        }
        self.position += literal.chars().count();
        Ok(literal)
    }

    /// Consumes zero or more whitespace code points, returning how many.
    pub fn consume_whitespace(&mut self) -> usize {
        let start = self.position;
        while self.expect_match(crate::class::whitespace) {
            self.position += 1;
        }
        self.position - start
    }

    /// Builds a syntax error positioned at the cursor.
    pub fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.position)
    }

    /// Describes the upcoming input for error messages.
    pub fn describe_ahead(&self, len: usize) -> String {
        if self.at_end() {
            "end of input".to_string()
        } else {
            format!("'{}'", self.peek(len))
        }
    }
}
