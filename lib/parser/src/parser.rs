mod ast;

pub use ast::{Node, NodeKind, Operator};

use cursor::Col;
use scanner::{ScanError, Scanner, Token, TokenData};

use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("syntax error (c. {col}): {error}, found {found}")]
pub struct SyntaxError {
    pub error: SyntaxErrorType,
    pub col: Col,
    pub found: String,
}

impl SyntaxError {
    fn new(error: SyntaxErrorType, token: &Token) -> Self {
        Self { error, col: token.col(), found: token.to_string() }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SyntaxErrorType {
    #[error("expected ')'")]
    ExpectedRightParen,
    #[error("expected number or '('")]
    ExpectedNumberOrLeftParen,
    #[error("incomplete expression")]
    IncompleteExpression,
    #[error("more than {} nested parentheses", MAX_NESTING)]
    TooDeeplyNested,
}

/// Deepest parenthesis nesting accepted by `factor`.
pub const MAX_NESTING: usize = 255;

/// Tokens are scanned on demand, so a lexical error can surface in the middle of parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error(transparent)]
    Lexical(#[from] ScanError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// Recursive-descent parser for
///
/// ```text
/// E  → T E'
/// E' → + T E' | - T E' | ε
/// T  → F T'
/// T' → * F T' | / F T' | ε
/// F  → ( E ) | number
/// ```
///
/// The primed tails are consumed by a loop that folds every new operand onto the
/// tree built so far, so `8 - 3 - 2` comes out as `(8 - 3) - 2`.
#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self> {
        Ok(Self { scanner: Scanner::new(source)?, depth: 0 })
    }

    pub fn parse(mut self) -> Result<Node> {
        let node = self.expression()?;

        if !self.scanner.is_at_end() {
            return Err(
                SyntaxError::new(SyntaxErrorType::IncompleteExpression, self.scanner.current())
                    .into(),
            );
        }

        Ok(node)
    }

    // E → T E'
    fn expression(&mut self) -> Result<Node> {
        self.binary_chain(&[Operator::Add, Operator::Subtract], Self::term)
    }

    // T → F T'
    fn term(&mut self) -> Result<Node> {
        self.binary_chain(&[Operator::Multiply, Operator::Divide], Self::factor)
    }

    // F → ( E ) | number
    fn factor(&mut self) -> Result<Node> {
        let token = *self.scanner.current();
        match token.data {
            LeftParen => {
                if self.depth == MAX_NESTING {
                    return Err(SyntaxError::new(SyntaxErrorType::TooDeeplyNested, &token).into());
                }
                self.scanner.advance()?;

                self.depth += 1;
                let node = self.expression()?;
                self.depth -= 1;

                self.consume_or_error(RightParen, SyntaxErrorType::ExpectedRightParen)?;
                Ok(node)
            }
            Number(value) => {
                self.scanner.advance()?;
                Ok(Node::number(value))
            }
            _ => Err(SyntaxError::new(SyntaxErrorType::ExpectedNumberOrLeftParen, &token).into()),
        }
    }

    /// Parses `operand (op operand)*` for one precedence level, each new pair
    /// wrapping the previous result as its left child.
    fn binary_chain(
        &mut self,
        operators: &[Operator],
        operand: fn(&mut Self) -> Result<Node>,
    ) -> Result<Node> {
        let mut node = operand(self)?;

        while let Some(operator) = self.match_operator(operators)? {
            let right = operand(self)?;
            log::debug!("Folding {} {} {}", node.type_name(), operator, right.type_name());
            node = Node::binary(operator, node, right);
        }

        Ok(node)
    }
}

// Helpers
impl<'a> Parser<'a> {
    fn match_operator(&mut self, operators: &[Operator]) -> Result<Option<Operator>> {
        match Operator::from_token(&self.scanner.current().data) {
            Some(operator) if operators.contains(&operator) => {
                self.scanner.advance()?;
                Ok(Some(operator))
            }
            _ => Ok(None),
        }
    }

    fn consume_or_error(&mut self, expected: TokenData, error: SyntaxErrorType) -> Result<Token<'a>> {
        debug_assert!(!matches!(expected, Number(_)));
        if self.scanner.current().data == expected {
            Ok(self.scanner.advance()?)
        } else {
            Err(SyntaxError::new(error, self.scanner.current()).into())
        }
    }
}
