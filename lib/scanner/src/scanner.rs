use cursor::{Col, Cursor, Span};

pub mod token;
pub use token::{Token, TokenData, TokenType};
use TokenData::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("lexical error (c. {col}): {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub col: Col,
}

impl ScanError {
    pub fn new(error: ScanErrorType, col: Col) -> Self {
        Self { error, col }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Lazily scans the input, holding exactly one token of lookahead.
///
/// The first token is scanned on construction, so a bad first character
/// already fails in [`Scanner::new`]. Once [`TokenData::Eof`] is reached,
/// further calls to [`Scanner::advance`] keep producing `Eof`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    current: Token<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Result<Self> {
        let mut cursor = Cursor::new(source);
        let current = scan_token(&mut cursor)?;
        Ok(Self { cursor, current })
    }

    pub fn current(&self) -> &Token<'a> {
        &self.current
    }

    /// Consumes the current token and scans the one after it.
    pub fn advance(&mut self) -> Result<Token<'a>> {
        let next = scan_token(&mut self.cursor)?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    pub fn is_at_end(&self) -> bool {
        self.current.data == Eof
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn scan_token<'a>(cursor: &mut Cursor<'a>) -> Result<Token<'a>> {
    cursor.eat_while(char::is_whitespace);

    let start = cursor.clone();
    let Some(c) = cursor.next() else {
        return Ok(Token::new(Eof, Span::between(&start, &start)));
    };

    let data = match c {
        '+' => Plus,
        '-' => Minus,
        '*' => Star,
        '/' => Slash,
        '(' => LeftParen,
        ')' => RightParen,

        c if c.is_ascii_digit() => {
            cursor.eat_while(is_number_char);
            let lexeme = start.slice_until(cursor);
            // "1.2.3"
            let value = lexeme.parse::<f64>().map_err(|_| {
                ScanError::new(ScanErrorType::MalformedNumber(lexeme.to_string()), start.col())
            })?;
            Number(value)
        }

        c => return Err(ScanError::new(ScanErrorType::UnexpectedCharacter(c), start.col())),
    };

    let token = Token::new(data, Span::between(&start, cursor));
    log::trace!("Scanned {:?} at c. {}", token.data, token.col());
    Ok(token)
}
