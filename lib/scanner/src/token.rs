use std::fmt::Display;

use cursor::{Col, Line, SourceRange};

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub range: SourceRange<'a>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, range: impl Into<SourceRange<'a>>) -> Token<'a> {
        Self { kind, range: range.into() }
    }

    /// The exact source text this token was scanned from.
    pub fn lexeme(&self) -> &'a str {
        self.range.lexeme()
    }

    pub fn offset(&self) -> usize {
        self.range.offset()
    }

    pub fn line(&self) -> Line {
        self.range.line()
    }

    pub fn col(&self) -> Col {
        self.range.col()
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TokenKind {
    // Literals.
    Number,

    // Operators.
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    Greater,
    Less,
    Amp,
    Pipe,
    Caret,
    Tilde,

    // Grouping.
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
}

impl TokenKind {
    /// Kind of a single-character operator or grouping token.
    pub fn from_symbol(c: char) -> Option<Self> {
        use TokenKind::*;
        Some(match c {
            '=' => Equal,
            '+' => Plus,
            '-' => Minus,
            '*' => Star,
            '/' => Slash,
            '%' => Percent,
            '>' => Greater,
            '<' => Less,
            '~' => Tilde,
            '&' => Amp,
            '|' => Pipe,
            '^' => Caret,

            '(' => LParen,
            ')' => RParen,
            '{' => LBrace,
            '}' => RBrace,
            '[' => LBracket,
            ']' => RBracket,
            _ => return None,
        })
    }
}
