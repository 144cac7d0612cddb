use std::{
    fmt::{Debug, Formatter},
    str::Chars,
};

mod span;
pub use span::*;

/// 1-based column of a character in the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
pub struct Col(pub usize);

#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
}

impl<'a> Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The remaining input is only interesting when explicitly asked for
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("col", &self.col())
                .field("rest", &self.chars.as_str())
                .finish()
        } else {
            f.debug_struct("Cursor").field("col", &self.col()).finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars() }
    }

    /// Byte offset of the next character.
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    pub fn col(&self) -> Col {
        Col(self.source[..self.offset()].chars().count() + 1)
    }

    pub fn is_at_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Consumes characters as long as `predicate` holds and returns the consumed slice.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.clone();
        while self.peek().is_some_and(&predicate) {
            self.chars.next();
        }
        start.slice_until(self)
    }

    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[self.offset()..end.offset()]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.chars.next()
    }
}
