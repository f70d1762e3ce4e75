/// Read position over a source buffer.
///
/// `line` and `column` are 1-based and always describe the character at
/// `pos`. Columns count characters, so multi-byte UTF-8 input still lines up
/// with what an editor shows.
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Steps past the current character. Does nothing at end of input.
    pub fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `pred` holds and returns the consumed slice.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while matches!(self.current(), Some(c) if pred(c)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn tracks_lines_and_columns() {
        let mut c = Cursor::new("ab\ncd");
        assert_eq!((c.current(), c.line(), c.column()), (Some('a'), 1, 1));
        c.advance();
        c.advance();
        assert_eq!((c.current(), c.line(), c.column()), (Some('\n'), 1, 3));
        c.advance();
        assert_eq!((c.current(), c.line(), c.column()), (Some('c'), 2, 1));
        c.advance();
        c.advance();
        assert!(c.at_end());
        assert_eq!(c.current(), None);
        c.advance();
        assert_eq!(c.position(), 5);
    }

    #[test]
    fn leading_newline_moves_to_second_line() {
        let mut c = Cursor::new("\nx");
        c.advance();
        assert_eq!((c.current(), c.line(), c.column()), (Some('x'), 2, 1));
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        let mut c = Cursor::new("éa");
        c.advance();
        assert_eq!(c.position(), 2);
        assert_eq!((c.current(), c.column()), (Some('a'), 2));
        assert_eq!(c.peek_next(), None);
    }

    #[test]
    fn eat_while_returns_consumed_text() {
        let mut c = Cursor::new("abc1_ d");
        let word = c.eat_while(|ch| ch.is_alphanumeric() || ch == '_');
        assert_eq!(word, "abc1_");
        assert_eq!(c.current(), Some(' '));
    }
}
