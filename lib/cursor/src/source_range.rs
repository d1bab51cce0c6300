use crate::{Col, Cursor, Line};

#[derive(Debug, Clone, PartialEq)]
pub struct SourceRange<'a> {
    start: Cursor<'a>,
    end: Cursor<'a>,
}

impl<'a> From<(Cursor<'a>, Cursor<'a>)> for SourceRange<'a> {
    fn from((start, end): (Cursor<'a>, Cursor<'a>)) -> Self {
        Self::new(start, end)
    }
}

impl<'a> SourceRange<'a> {
    pub fn new(start: Cursor<'a>, end: Cursor<'a>) -> Self {
        assert!(start.source == end.source);
        assert!(start.offset <= end.offset);
        Self { start, end }
    }

    pub fn lexeme(&self) -> &'a str {
        self.start.slice_until(&self.end)
    }

    /// Char offset of the first char in the range.
    pub fn offset(&self) -> usize {
        self.start.offset()
    }

    /// Length of the range in chars.
    pub fn char_len(&self) -> usize {
        self.end.offset() - self.start.offset()
    }

    pub fn line(&self) -> Line {
        self.start.line()
    }

    pub fn col(&self) -> Col {
        self.start.col()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexeme_and_position() {
        let mut cursor = Cursor::new("1 +\n 23");
        cursor.advance_while(|c| c != '2');
        let start = cursor.clone();
        cursor.advance_while(|c| c.is_ascii_digit());

        let range = SourceRange::from((start, cursor));
        assert_eq!(range.lexeme(), "23");
        assert_eq!(range.offset(), 5);
        assert_eq!(range.char_len(), 2);
        assert_eq!((range.line(), range.col()), (Line(2), Col(2)));
    }
}
