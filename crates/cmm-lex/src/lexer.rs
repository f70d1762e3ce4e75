use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::literal::{scan_number, scan_string};
use crate::token::{Token, TokenKind};

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// On-demand tokenizer. Each call consumes input, so a lexer can be run
/// once; scanning the same text again needs a fresh `Lexer`.
pub struct Lexer<'a> {
    cur: Cursor<'a>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            cur: Cursor::new(src),
            failed: false,
        }
    }

    fn skip_ws(&mut self) {
        self.cur.eat_while(is_whitespace);
    }

    /// Next token, `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        self.skip_ws();
        let Some(c) = self.cur.current() else {
            return Ok(None);
        };
        let (line, column) = (self.cur.line(), self.cur.column());

        let tok = match c {
            '&' | '|' => self.doubled(c, line, column)?,
            '>' | '<' | '!' | '=' => self.comparison(c, line, column),
            '"' => scan_string(&mut self.cur, line, column)?,
            c if c.is_ascii_digit() => scan_number(&mut self.cur, line, column),
            c if c.is_alphabetic() => self.word(line, column),
            c => match TokenKind::single(c) {
                Some(kind) => {
                    self.cur.advance();
                    Token::fixed(kind, line, column)
                }
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnknownSymbol(c),
                        line,
                        column,
                    ))
                }
            },
        };
        Ok(Some(tok))
    }

    // `&&` and `||`; there is no single-character form.
    fn doubled(&mut self, c: char, line: u32, column: u32) -> LexResult<Token> {
        self.cur.advance();
        if self.cur.current() != Some(c) {
            return Err(LexError::new(LexErrorKind::Expected(c), line, column));
        }
        self.cur.advance();
        let kind = if c == '&' {
            TokenKind::AndAnd
        } else {
            TokenKind::OrOr
        };
        Ok(Token::fixed(kind, line, column))
    }

    // `>`, `<`, `!`, `=` with an optional trailing `=`.
    fn comparison(&mut self, c: char, line: u32, column: u32) -> Token {
        self.cur.advance();
        let with_eq = self.cur.current() == Some('=');
        if with_eq {
            self.cur.advance();
        }
        let kind = match (c, with_eq) {
            ('>', false) => TokenKind::Gt,
            ('>', true) => TokenKind::Ge,
            ('<', false) => TokenKind::Lt,
            ('<', true) => TokenKind::Le,
            ('!', false) => TokenKind::Bang,
            ('!', true) => TokenKind::BangEq,
            ('=', false) => TokenKind::Eq,
            _ => TokenKind::EqEq,
        };
        Token::fixed(kind, line, column)
    }

    fn word(&mut self, line: u32, column: u32) -> Token {
        let word = self.cur.eat_while(|ch| ch.is_alphanumeric() || ch == '_');
        match TokenKind::keyword(word) {
            Some(kind) => Token::fixed(kind, line, column),
            None => Token::with_text(TokenKind::Ident, word.to_string(), line, column),
        }
    }
}

/// Yields tokens until the input ends or the first error, which is yielded
/// once; the iterator is fused after that.
impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(tok) => tok.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Splits `src` into tokens. The first lexical error aborts the whole pass.
pub fn tokenize(src: &str) -> LexResult<Vec<Token>> {
    Lexer::new(src).collect()
}
