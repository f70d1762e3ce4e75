//! Lexical error taxonomy.
//!
//! Every error is fatal to the pass that raised it. Running out of input is
//! not an error and never shows up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// `&` or `|` was not doubled.
    #[error("'{0}' expected")]
    Expected(char),
    #[error("{0}")]
    InvalidEscapeSequence(String),
    /// Raised by the symbol table pass only.
    #[error("no matching left brace")]
    NoMatchingLeftBrace,
    #[error("quotes not closed")]
    QuotesNotClosed,
    #[error("unknown symbol: {0}")]
    UnknownSymbol(char),
}

/// A lexical error with the 1-based position of the token, opening quote or
/// brace responsible for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({line}:{column})")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}

pub type LexResult<T> = Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let cases = [
            (LexErrorKind::Expected('&'), "'&' expected (1:2)"),
            (LexErrorKind::NoMatchingLeftBrace, "no matching left brace (1:2)"),
            (LexErrorKind::QuotesNotClosed, "quotes not closed (1:2)"),
            (LexErrorKind::UnknownSymbol('#'), "unknown symbol: # (1:2)"),
            (
                LexErrorKind::InvalidEscapeSequence("invalid escape sequence '\\q'".into()),
                "invalid escape sequence '\\q' (1:2)",
            ),
        ];
        for (kind, expected) in cases {
            assert_eq!(LexError::new(kind, 1, 2).to_string(), expected);
        }
    }
}
