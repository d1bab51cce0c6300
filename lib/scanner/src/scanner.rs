use cursor::{Col, Cursor, Line};

pub mod token;
pub use token::{Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}, col {col}] Error: Unexpected character {character:?} at position {position}")]
pub struct LexError {
    pub character: char,
    /// Zero-based char index into the source.
    pub position: usize,
    pub line: Line,
    pub col: Col,
}

/// Lazily scans tokens from a source string.
///
/// Yields at most one error, after which the stream ends.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), failed: false }
    }

    fn number(&mut self, start: Cursor<'a>) -> Token<'a> {
        // Any run of digits and dots is one numeral, even `1.2.3`.
        // Whether it is a valid number is decided by the parser.
        self.cursor.advance_while(|c| c.is_ascii_digit() || c == '.');
        Token::new(TokenKind::Number, (start, self.cursor.clone()))
    }

    fn scan_token(&mut self) -> Option<Result<Token<'a>, LexError>> {
        loop {
            let start = self.cursor.clone();
            let c = self.cursor.next()?;

            let token = match c {
                d if d.is_ascii_digit() => self.number(start),

                ' ' | '\t' | '\n' => continue,

                c => match TokenKind::from_symbol(c) {
                    Some(kind) => Token::new(kind, (start, self.cursor.clone())),
                    None => {
                        return Some(Err(LexError {
                            character: c,
                            position: start.offset(),
                            line: start.line(),
                            col: start.col(),
                        }))
                    }
                },
            };

            return Some(Ok(token));
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.scan_token()?;
        match &result {
            Ok(token) => log::trace!("Scanned {} {:?}", token.kind, token.lexeme()),
            Err(e) => {
                log::debug!("{e}");
                self.failed = true;
            }
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scans the whole source, failing on the first unrecognized character.
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::new(source).collect()
}
