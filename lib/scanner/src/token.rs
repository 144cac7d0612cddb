use std::fmt::Display;

use cursor::{Col, Span};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData,
    pub span: Span<'a>,
}

impl<'a> Token<'a> {
    pub fn new(data: TokenData, span: Span<'a>) -> Token<'a> {
        Self { data, span }
    }

    pub fn lexeme(&self) -> &'a str {
        self.span.lexeme
    }

    pub fn col(&self) -> Col {
        self.span.col
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.data {
            TokenData::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(TokenType))]
pub enum TokenData {
    // Single-character tokens.
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,

    // Literals.
    Number(f64),

    Eof,
}
