//! String and numeric literal scanning.
//!
//! Literals keep their raw spelling in the token. String escapes are decoded
//! here only to reject malformed literals early; [`unescape`] is public so a
//! later stage can decode the payload for real.

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};

/// A backslash escape that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidEscape(pub String);

/// Scans a string literal. The cursor sits on the opening quote; `line` and
/// `column` are its position and are used for every error raised here.
pub(crate) fn scan_string(cur: &mut Cursor<'_>, line: u32, column: u32) -> LexResult<Token> {
    let unclosed = || LexError::new(LexErrorKind::QuotesNotClosed, line, column);

    cur.advance();
    let mut raw = String::new();
    loop {
        let Some(c) = cur.current() else {
            return Err(unclosed());
        };
        cur.advance();
        match c {
            '"' => break,
            '\\' => {
                let Some(esc) = cur.current() else {
                    return Err(unclosed());
                };
                cur.advance();
                raw.push('\\');
                raw.push(esc);
            }
            _ => raw.push(c),
        }
    }

    if let Err(e) = unescape(&raw) {
        return Err(LexError::new(
            LexErrorKind::InvalidEscapeSequence(e.0),
            line,
            column,
        ));
    }
    Ok(Token::with_text(TokenKind::Str, raw, line, column))
}

/// Scans digits with at most one `.`. A second `.` ends the literal and is
/// left in place, so `3.14.5` scans as `3.14` followed by a stray `.`.
pub(crate) fn scan_number(cur: &mut Cursor<'_>, line: u32, column: u32) -> Token {
    let mut text = String::new();
    let mut dot = false;
    while let Some(c) = cur.current() {
        if c.is_ascii_digit() {
            text.push(c);
        } else if c == '.' && !dot {
            dot = true;
            text.push(c);
        } else {
            break;
        }
        cur.advance();
    }
    let kind = if dot { TokenKind::Float } else { TokenKind::Int };
    Token::with_text(kind, text, line, column)
}

/// Decodes backslash escapes in the raw text of a string literal.
pub fn unescape(raw: &str) -> Result<String, InvalidEscape> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(esc) = chars.next() else {
            return Err(InvalidEscape("\\ at end of string".into()));
        };
        match esc {
            '\\' | '\'' | '"' => out.push(esc),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0B}'),
            // line continuation
            '\n' => {}
            '0'..='7' => out.push(octal_escape(esc, &mut chars)),
            'x' => out.push(hex_escape(&mut chars, 2, "\\xXX")?),
            'u' => out.push(hex_escape(&mut chars, 4, "\\uXXXX")?),
            'U' => out.push(hex_escape(&mut chars, 8, "\\UXXXXXXXX")?),
            other => {
                return Err(InvalidEscape(format!(
                    "invalid escape sequence '\\{other}'"
                )))
            }
        }
    }
    Ok(out)
}

fn octal_escape(first: char, chars: &mut Peekable<Chars<'_>>) -> char {
    let mut code = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(d) => {
                code = code * 8 + d;
                chars.next();
            }
            None => break,
        }
    }
    // three octal digits top out at 0o777
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn hex_escape(
    chars: &mut Peekable<Chars<'_>>,
    digits: usize,
    shape: &str,
) -> Result<char, InvalidEscape> {
    let mut code: u32 = 0;
    for _ in 0..digits {
        let Some(d) = chars.peek().and_then(|c| c.to_digit(16)) else {
            return Err(InvalidEscape(format!("truncated {shape} escape")));
        };
        code = code * 16 + d;
        chars.next();
    }
    char::from_u32(code).ok_or_else(|| InvalidEscape("illegal Unicode character".into()))
}
