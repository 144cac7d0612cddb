use std::fmt::{Display, Formatter};

use decorator::{DecorateError, Decorator, SymbolTable};
use parser::{Node, Parser, ParserError, SyntaxError};
use scanner::ScanError;

pub use decorator::{Symbol, SymbolKind, TempName};
pub use parser::{NodeKind, Operator};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] ScanError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Evaluation(#[from] DecorateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexicalError,
    SyntaxError,
    DivisionByZero,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lexical(_) => ErrorKind::LexicalError,
            Error::Syntax(_) => ErrorKind::SyntaxError,
            Error::Evaluation(DecorateError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }
}

impl From<ParserError> for Error {
    fn from(error: ParserError) -> Self {
        match error {
            ParserError::Lexical(e) => e.into(),
            ParserError::Syntax(e) => e.into(),
        }
    }
}

/// Outcome of one successful parse-and-decorate cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub tree: Node,
    pub symbol_table: SymbolTable,
    pub value: f64,
}

impl Translation {
    pub fn listing(&self) -> String {
        render::listing(&self.tree)
    }

    pub fn diagram(&self) -> String {
        render::diagram(&self.tree)
    }
}

/// The full console report: both tree views, the result and the symbol table.
impl Display for Translation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AST:")?;
        writeln!(f, "{}", self.listing())?;
        writeln!(f)?;
        writeln!(f, "ASCII tree:")?;
        writeln!(f, "{}", self.diagram())?;
        writeln!(f)?;
        writeln!(f, "Result: {:?}", self.value)?;
        write!(f, "{}", self.symbol_table)
    }
}

pub fn parse_and_evaluate(text: &str) -> Result<Translation, Error> {
    let mut tree = Parser::new(text)?.parse()?;

    let mut decorator = Decorator::new();
    let value = decorator.decorate(&mut tree)?;
    log::debug!("{} = {:?}", tree, value);

    Ok(Translation { tree, symbol_table: decorator.into_symbol_table(), value })
}
