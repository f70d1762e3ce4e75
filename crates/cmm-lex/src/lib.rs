#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Lexer for the C-- toy language, plus the scope-aware symbol table pass
//! that runs over its output.
//!
//! ```rust
//! use cmm_lex::{symbols, tokenize, TokenKind};
//!
//! let tokens = tokenize("int a; { a = 1; }").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::KwInt);
//!
//! let resolved = symbols::resolve(&tokens).unwrap();
//! assert_eq!(resolved.symbols.len(), 2);
//! ```

pub mod cursor;
mod error;
mod lexer;
pub mod literal;
pub mod symbols;
mod token;

pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::{tokenize, Lexer};
pub use literal::{unescape, InvalidEscape};
pub use symbols::{resolve, Resolved, ScopeId, Symbol, SymbolTable};
pub use token::{SymbolId, Token, TokenKind, TokenValue};
