use std::{fmt::Formatter, str::Chars};

mod source_range;
pub use source_range::*;

#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    chars: Chars<'a>,
    offset: usize,
    line: Line,
    col: Col,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Printing the source is usually too verbose, so by default
        // we only print the position
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("offset", &self.offset)
                .field("line", &self.line)
                .field("col", &self.col)
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor")
                .field("offset", &self.offset)
                .field("line", &self.line)
                .field("col", &self.col)
                .finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.chars.as_str()) == (other.source, other.chars.as_str())
    }
}

/// 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub struct Line(pub usize);

/// 1-based column, counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub struct Col(pub usize);

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.chars(), offset: 0, line: Line(1), col: Col(1) }
    }

    /// Number of chars consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn col(&self) -> Col {
        self.col
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        self.offset += 1;
        if c == '\n' {
            self.line.0 += 1;
            self.col = Col(1);
        } else {
            self.col.0 += 1;
        }
        Some(c)
    }
}

impl<'a> Cursor<'a> {
    pub fn slice_until<'c>(&self, end: &'c Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[(self.source.len() - self.chars.as_str().len())
            ..(self.source.len() - end.chars.as_str().len())]
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Consumes chars for as long as `pred` holds for the next one.
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_until() {
        let mut cursor = Cursor::new("ab\ncd\n\n");

        cursor.next(); // 'a'

        let start = cursor.clone();

        cursor.next(); // 'b'
        cursor.next(); // '\n'
        cursor.next(); // 'c'

        assert_eq!(start.slice_until(&cursor), "b\nc");
    }

    #[test]
    fn positions_follow_newlines() {
        let source = "ab\ncd\n\n";
        let mut cursor = Cursor::new(source);

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!((cursor.offset(), cursor.line(), cursor.col()), (0, Line(1), Col(1)));

        assert_eq!(cursor.next(), Some('a'));
        assert_eq!((cursor.offset(), cursor.line(), cursor.col()), (1, Line(1), Col(2)));

        assert_eq!(cursor.next(), Some('b'));
        assert_eq!((cursor.line(), cursor.col()), (Line(1), Col(3)));

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.offset(), cursor.line(), cursor.col()), (3, Line(2), Col(1)));

        cursor.next(); // 'c'
        cursor.next(); // 'd'

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(3), Col(1)));

        assert_eq!(cursor.next(), Some('\n'));
        assert_eq!((cursor.line(), cursor.col()), (Line(4), Col(1)));

        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!((cursor.offset(), cursor.line(), cursor.col()), (7, Line(4), Col(1)));

        cursor = Cursor::new("");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!((cursor.offset(), cursor.line(), cursor.col()), (0, Line(1), Col(1)));
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        let mut cursor = Cursor::new("é1");
        cursor.next();
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.col(), Col(2));
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn advance_while() {
        let mut cursor = Cursor::new("12.5+3");
        let start = cursor.clone();
        cursor.advance_while(|c| c.is_ascii_digit() || c == '.');
        assert_eq!(start.slice_until(&cursor), "12.5");
        assert_eq!(cursor.peek(), Some('+'));

        cursor.advance_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.offset(), 4);
    }
}
