use serde::{Serialize, Serializer};
use std::fmt;

/// Every lexical category of C--. The set is closed: keywords, operators,
/// punctuation, literals and identifiers never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // type keywords
    KwInt,
    KwDouble,
    KwBool,
    KwString,
    // control keywords
    KwWhile,
    KwFor,
    KwIf,
    KwElse,
    KwSwitch,
    KwCase,
    KwBreak,
    KwDefault,
    // i/o keywords
    KwScan,
    KwPrint,
    // conversion keywords
    KwAtoi,
    KwAtob,
    KwAtof,
    KwToString,
    // boolean literals
    KwTrue,
    KwFalse,
    // arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    // punctuation
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    // assignment
    Eq,
    // relational
    Lt,
    Gt,
    // logical
    AndAnd,
    OrOr,
    Bang,
    // two-char comparisons
    EqEq,
    Le,
    Ge,
    BangEq,
    // payload-carrying kinds
    Ident,
    Int,
    Float,
    Str,
}

impl TokenKind {
    /// Reserved words. Anything else shaped like a word is an identifier.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "int" => TokenKind::KwInt,
            "double" => TokenKind::KwDouble,
            "bool" => TokenKind::KwBool,
            "string" => TokenKind::KwString,
            "while" => TokenKind::KwWhile,
            "for" => TokenKind::KwFor,
            "if" => TokenKind::KwIf,
            "else" => TokenKind::KwElse,
            "switch" => TokenKind::KwSwitch,
            "case" => TokenKind::KwCase,
            "break" => TokenKind::KwBreak,
            "default" => TokenKind::KwDefault,
            "scan" => TokenKind::KwScan,
            "print" => TokenKind::KwPrint,
            "atoi" => TokenKind::KwAtoi,
            "atob" => TokenKind::KwAtob,
            "atof" => TokenKind::KwAtof,
            "to_string" => TokenKind::KwToString,
            "true" => TokenKind::KwTrue,
            "false" => TokenKind::KwFalse,
            _ => return None,
        };
        Some(kind)
    }

    /// Single-character operators and punctuation that never combine with a
    /// following character.
    pub fn single(c: char) -> Option<TokenKind> {
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            _ => return None,
        };
        Some(kind)
    }

    /// True for the kinds that carry a payload.
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Int | TokenKind::Float | TokenKind::Str
        )
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwInt
                | TokenKind::KwDouble
                | TokenKind::KwBool
                | TokenKind::KwString
                | TokenKind::KwWhile
                | TokenKind::KwFor
                | TokenKind::KwIf
                | TokenKind::KwElse
                | TokenKind::KwSwitch
                | TokenKind::KwCase
                | TokenKind::KwBreak
                | TokenKind::KwDefault
                | TokenKind::KwScan
                | TokenKind::KwPrint
                | TokenKind::KwAtoi
                | TokenKind::KwAtob
                | TokenKind::KwAtof
                | TokenKind::KwToString
                | TokenKind::KwTrue
                | TokenKind::KwFalse
        )
    }

    /// Name printed by the driver and used in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::KwInt => "INT",
            TokenKind::KwDouble => "DOUBLE",
            TokenKind::KwBool => "BOOL",
            TokenKind::KwString => "STRING",
            TokenKind::KwWhile => "WHILE",
            TokenKind::KwFor => "FOR",
            TokenKind::KwIf => "IF",
            TokenKind::KwElse => "ELSE",
            TokenKind::KwSwitch => "SWITCH",
            TokenKind::KwCase => "CASE",
            TokenKind::KwBreak => "BREAK",
            TokenKind::KwDefault => "DEFAULT",
            TokenKind::KwScan => "SCAN",
            TokenKind::KwPrint => "PRINT",
            TokenKind::KwAtoi => "ATOI",
            TokenKind::KwAtob => "ATOB",
            TokenKind::KwAtof => "ATOF",
            TokenKind::KwToString => "TO_STRING",
            TokenKind::KwTrue => "TRUE",
            TokenKind::KwFalse => "FALSE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULT",
            TokenKind::Slash => "DIV",
            TokenKind::Percent => "MOD",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LBRACKET",
            TokenKind::RParen => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Eq => "EQUAL",
            TokenKind::Lt => "LESS",
            TokenKind::Gt => "MORE",
            TokenKind::AndAnd => "AND",
            TokenKind::OrOr => "OR",
            TokenKind::Bang => "NOT",
            TokenKind::EqEq => "EQUAL_EQUAL",
            TokenKind::Le => "LESS_OR_EQUAL",
            TokenKind::Ge => "MORE_OR_EQUAL",
            TokenKind::BangEq => "NOT_EQUAL",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Int => "NUM_INT",
            TokenKind::Float => "NUM_DOUBLE",
            TokenKind::Str => "STRING_LITERAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Index into a [`SymbolTable`](crate::symbols::SymbolTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SymbolId(pub usize);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Token payload. The lexer only produces `Text`; `Symbol` appears once the
/// symbol table pass has resolved an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Symbol(SymbolId),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            TokenValue::Symbol(_) => None,
        }
    }

    pub fn as_symbol(&self) -> Option<SymbolId> {
        match self {
            TokenValue::Symbol(id) => Some(*id),
            TokenValue::Text(_) => None,
        }
    }
}

/// A classified token. `line` and `column` are 1-based and point at the
/// token's first character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Token with a fixed spelling (keyword, operator, punctuation).
    pub fn fixed(kind: TokenKind, line: u32, column: u32) -> Self {
        Self {
            kind,
            value: None,
            line,
            column,
        }
    }

    pub fn with_text(kind: TokenKind, text: String, line: u32, column: u32) -> Self {
        Self {
            kind,
            value: Some(TokenValue::Text(text)),
            line,
            column,
        }
    }

    /// Raw payload text, if the token still carries one.
    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().and_then(TokenValue::as_text)
    }

    pub fn symbol(&self) -> Option<SymbolId> {
        self.value.as_ref().and_then(TokenValue::as_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_covers_all_reserved_words() {
        let words = [
            "int", "double", "bool", "string", "while", "for", "if", "else", "switch", "case",
            "break", "default", "scan", "print", "atoi", "atob", "atof", "to_string", "true",
            "false",
        ];
        for w in words {
            let kind = TokenKind::keyword(w).unwrap_or_else(|| panic!("{w} is a keyword"));
            assert!(kind.is_keyword());
            assert!(!kind.has_payload());
        }
        assert_eq!(TokenKind::keyword("integer"), None);
        assert_eq!(TokenKind::keyword("Int"), None);
    }

    #[test]
    fn kinds_serialize_by_name() {
        let tok = Token::with_text(TokenKind::Int, "42".into(), 3, 7);
        let json = serde_json::to_value(&tok).unwrap();
        assert_eq!(json["kind"], "NUM_INT");
        assert_eq!(json["value"], "42");
        assert_eq!(json["line"], 3);
        assert_eq!(json["column"], 7);

        let resolved = Token {
            value: Some(TokenValue::Symbol(SymbolId(2))),
            ..Token::fixed(TokenKind::Ident, 1, 1)
        };
        assert_eq!(serde_json::to_value(&resolved).unwrap()["value"], 2);
    }
}
