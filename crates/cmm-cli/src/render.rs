//! Pretty and JSON renderings of token streams and symbol tables.

use anyhow::Result;
use clap::ValueEnum;
use cmm_lex::{LexError, Resolved, Token, TokenKind, TokenValue};
use std::fmt::Write;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Pretty,
    Json,
}

/// The driver's presentation of a fatal lexical error.
pub fn lexer_error(err: &LexError) -> String {
    format!("LEXER ERROR:\n\t{}", err)
}

fn token_line(out: &mut String, tok: &Token) {
    let _ = write!(out, "{}:{}\t{}", tok.line, tok.column, tok.kind);
    match &tok.value {
        Some(TokenValue::Text(s)) if tok.kind == TokenKind::Str => {
            let _ = write!(out, "\t\"{}\"", s);
        }
        Some(TokenValue::Text(s)) => {
            let _ = write!(out, "\t{}", s);
        }
        Some(TokenValue::Symbol(id)) => {
            let _ = write!(out, "\t{}", id);
        }
        None => {}
    }
    out.push('\n');
}

pub fn tokens(tokens: &[Token], format: Format) -> Result<String> {
    match format {
        Format::Pretty => {
            let mut out = String::new();
            for tok in tokens {
                token_line(&mut out, tok);
            }
            Ok(out)
        }
        Format::Json => Ok(serde_json::to_string_pretty(tokens)? + "\n"),
    }
}

pub fn resolved(resolved: &Resolved, format: Format) -> Result<String> {
    match format {
        Format::Pretty => {
            let mut out = String::new();
            let _ = writeln!(out, "symbols: {}", resolved.symbols.len());
            for (id, sym) in resolved.symbols.iter() {
                let _ = writeln!(out, "{}\t{}\t(scope {})", id, sym.identifier, sym.scope);
            }
            let _ = writeln!(out, "tokens: {}", resolved.tokens.len());
            for tok in &resolved.tokens {
                token_line(&mut out, tok);
            }
            Ok(out)
        }
        Format::Json => Ok(serde_json::to_string_pretty(resolved)? + "\n"),
    }
}
