use crate::{Col, Cursor};

/// The text of a token and the column it starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<'a> {
    pub lexeme: &'a str,
    pub col: Col,
}

impl<'a> Span<'a> {
    /// Covers everything `start` consumes on its way to `end`.
    pub fn between(start: &Cursor<'a>, end: &Cursor<'a>) -> Self {
        Self { lexeme: start.slice_until(end), col: start.col() }
    }
}
