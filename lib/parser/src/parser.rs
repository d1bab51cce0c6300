mod expr;
use std::fmt::Display;

pub use expr::{BinaryOperator, Expr};

use cursor::{Col, Line};
use scanner::{LexError, Token, TokenKind};

use TokenKind::*;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parentheses may nest at most this deep.
pub const MAX_NESTING: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Expected {
    #[display(fmt = "Expected number or '('")]
    NumberOrLeftParen,
    #[display(fmt = "Expected ')' after expression")]
    RightParen,
    #[display(fmt = "Expected a valid number")]
    ValidNumber,
    #[display(fmt = "Expected end of expression")]
    EndOfInput,
    #[display(fmt = "Expected at most {} nested parentheses", MAX_NESTING)]
    ShallowerNesting,
}

/// What the parser ran into instead of what it expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Found {
    Token { kind: TokenKind, lexeme: String, position: usize, line: Line, col: Col },
    Eof,
}

impl From<&Token<'_>> for Found {
    fn from(token: &Token<'_>) -> Self {
        Found::Token {
            kind: token.kind,
            lexeme: token.lexeme().to_string(),
            position: token.offset(),
            line: token.line(),
            col: token.col(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct ParseError {
    pub expected: Expected,
    pub found: Found,
}

impl ParseError {
    fn new(expected: Expected, found: impl Into<Found>) -> Self {
        Self { expected, found: found.into() }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.found {
            Found::Token { lexeme, line, col, .. } => {
                write!(f, "[line {line}, col {col}] Error at '{lexeme}': {}", self.expected)
            }
            Found::Eof => write!(f, "Error at end: {}", self.expected),
        }
    }
}

/// Either stage of turning source text into an [`Expr`] can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Recursive descent parser over a scanned token sequence.
///
/// The grammar, lowest precedence first:
///
/// ```text
/// expression -> term (("+" | "-") term)*
/// term       -> factor (("*" | "/" | "%") factor)*
/// factor     -> NUMBER | "(" expression ")"
/// ```
///
/// Comparison and bitwise tokens have no production, so meeting one is an error.
/// Only `(` recurses, and never more than [`MAX_NESTING`] levels.
#[derive(Debug)]
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    current: usize,
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, current: 0, depth: 0 }
    }

    /// Parses a single expression that has to span all tokens.
    pub fn parse(mut self) -> Result<Expr> {
        let expr = self.expression()?;

        match self.advance() {
            None => Ok(expr),
            Some(token) => Err(ParseError::new(Expected::EndOfInput, token)),
        }
    }

    fn expression(&mut self) -> Result<Expr> {
        log::trace!("expression @{}", self.current);
        let mut expr = self.term()?;

        while let Some(operator) = self.consume_operator(&[Plus, Minus]) {
            let right = self.term()?;
            expr = Expr::binary(operator, expr, right);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr> {
        log::trace!("term @{}", self.current);
        let mut expr = self.factor()?;

        while let Some(operator) = self.consume_operator(&[Star, Slash, Percent]) {
            let right = self.factor()?;
            expr = Expr::binary(operator, expr, right);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr> {
        let token =
            self.advance().ok_or(ParseError::new(Expected::NumberOrLeftParen, Found::Eof))?;
        log::trace!("factor {} {:?}", token.kind, token.lexeme());

        match token.kind {
            Number => self.number(token),
            LParen => {
                if self.depth == MAX_NESTING {
                    return Err(ParseError::new(Expected::ShallowerNesting, token));
                }

                self.depth += 1;
                let expr = self.expression();
                self.depth -= 1;

                let expr = expr?;
                self.consume_or_error(RParen, Expected::RightParen)?;
                Ok(expr)
            }
            _ => Err(ParseError::new(Expected::NumberOrLeftParen, token)),
        }
    }

    fn number(&self, token: &Token<'a>) -> Result<Expr> {
        match token.lexeme().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Expr::Literal(value)),
            _ => {
                log::debug!("Invalid numeral {:?}", token.lexeme());
                Err(ParseError::new(Expected::ValidNumber, token))
            }
        }
    }

    fn consume_operator(&mut self, kinds: &[TokenKind]) -> Option<BinaryOperator> {
        let operator = self
            .peek()
            .filter(|kind| kinds.contains(kind))
            .and_then(|kind| BinaryOperator::try_from(kind).ok())?;
        self.advance();
        Some(operator)
    }

    fn consume_or_error(&mut self, kind: TokenKind, expected: Expected) -> Result<&'t Token<'a>> {
        match self.advance() {
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(ParseError::new(expected, token)),
            None => Err(ParseError::new(expected, Found::Eof)),
        }
    }
}

// Helpers
impl<'t, 'a> Parser<'t, 'a> {
    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.current).map(|t| t.kind)
    }

    /// Returns the token under the cursor and moves past it, `None` once all tokens are used up.
    fn advance(&mut self) -> Option<&'t Token<'a>> {
        let tokens = self.tokens;
        let token = tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }
}

/// Parses a token sequence produced by [`scanner::scan`].
pub fn parse(tokens: &[Token<'_>]) -> Result<Expr> {
    Parser::new(tokens).parse()
}

/// Scans and parses `source` in one go.
pub fn parse_expression(source: &str) -> std::result::Result<Expr, Error> {
    let tokens = scanner::scan(source)?;
    Ok(parse(&tokens)?)
}
