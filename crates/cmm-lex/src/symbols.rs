//! Scope-aware symbol table construction.
//!
//! A second pass over a finished token sequence. Scopes are derived from
//! braces alone: the nesting depth plus the ordinal of the block among all
//! blocks opened at that depth.

use serde::Serialize;
use std::fmt;

use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{SymbolId, Token, TokenKind, TokenValue};

/// Identity of a lexical block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScopeId {
    /// Brace nesting depth; the file itself is level 0.
    pub level: usize,
    /// Ordinal of this block among all blocks opened at `level`.
    pub block: usize,
}

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId { level: 0, block: 0 };

    pub fn new(level: usize, block: usize) -> Self {
        Self { level, block }
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level, self.block)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub identifier: String,
    pub scope: ScopeId,
}

/// Insertion-ordered symbols, unique per `(identifier, scope)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols.iter().enumerate().map(|(i, s)| (SymbolId(i), s))
    }

    pub fn lookup(&self, identifier: &str, scope: ScopeId) -> Option<SymbolId> {
        self.symbols
            .iter()
            .position(|s| s.scope == scope && s.identifier == identifier)
            .map(SymbolId)
    }

    /// Index of `(identifier, scope)`, appending a new entry if needed.
    pub fn intern(&mut self, identifier: &str, scope: ScopeId) -> SymbolId {
        if let Some(id) = self.lookup(identifier, scope) {
            return id;
        }
        self.symbols.push(Symbol {
            identifier: identifier.to_string(),
            scope,
        });
        SymbolId(self.symbols.len() - 1)
    }
}

/// Output of [`resolve`]: a copy of the input tokens whose identifiers carry
/// symbol indices, and the table they index into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub symbols: SymbolTable,
    pub tokens: Vec<Token>,
}

/// Brace-driven scope tracking.
struct ScopeTracker {
    level: usize,
    // one counter per level reached so far
    blocks: Vec<usize>,
}

impl ScopeTracker {
    fn new() -> Self {
        Self {
            level: 0,
            blocks: vec![0],
        }
    }

    fn current(&self) -> ScopeId {
        ScopeId::new(self.level, self.blocks[self.level])
    }

    fn open(&mut self) {
        self.level += 1;
        if self.level >= self.blocks.len() {
            self.blocks.push(0);
        } else {
            self.blocks[self.level] += 1;
        }
    }

    /// Returns false when there is no open block to close.
    fn close(&mut self) -> bool {
        if self.level == 0 {
            return false;
        }
        self.level -= 1;
        true
    }
}

/// Builds the symbol table for `tokens` and rewrites identifier payloads into
/// symbol indices. The input is left untouched.
///
/// Fails with `NoMatchingLeftBrace` on a `}` that closes nothing. Blocks
/// still open at the end are not reported.
pub fn resolve(tokens: &[Token]) -> LexResult<Resolved> {
    let mut symbols = SymbolTable::new();
    let mut scopes = ScopeTracker::new();
    let mut out = Vec::with_capacity(tokens.len());

    for tok in tokens {
        match tok.kind {
            TokenKind::LBrace => scopes.open(),
            TokenKind::RBrace => {
                if !scopes.close() {
                    return Err(LexError::new(
                        LexErrorKind::NoMatchingLeftBrace,
                        tok.line,
                        tok.column,
                    ));
                }
            }
            TokenKind::Ident => {
                if let Some(name) = tok.text() {
                    let id = symbols.intern(name, scopes.current());
                    out.push(Token {
                        value: Some(TokenValue::Symbol(id)),
                        ..tok.clone()
                    });
                    continue;
                }
            }
            _ => {}
        }
        out.push(tok.clone());
    }

    Ok(Resolved {
        symbols,
        tokens: out,
    })
}
