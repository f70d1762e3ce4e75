use cmm_lex::{resolve, tokenize, ScopeId, SymbolId, TokenKind, TokenValue};

fn ident_refs(src: &str) -> Vec<usize> {
    let tokens = tokenize(src).unwrap();
    let resolved = resolve(&tokens).unwrap();
    resolved
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Ident)
        .map(|t| t.symbol().expect("identifier resolved").0)
        .collect()
}

#[test]
fn shadowing_in_nested_block() {
    let tokens = tokenize("{ int a; { int a; } int a; }").unwrap();
    let resolved = resolve(&tokens).unwrap();

    let refs: Vec<_> = resolved.tokens.iter().filter_map(|t| t.symbol()).collect();
    // outer a lives in (1, 0) both before and after the inner block
    assert_eq!(refs, vec![SymbolId(0), SymbolId(1), SymbolId(0)]);

    assert_eq!(resolved.symbols.len(), 2);
    let outer = resolved.symbols.get(SymbolId(0)).unwrap();
    let inner = resolved.symbols.get(SymbolId(1)).unwrap();
    assert_eq!((outer.identifier.as_str(), outer.scope), ("a", ScopeId::new(1, 0)));
    assert_eq!((inner.identifier.as_str(), inner.scope), ("a", ScopeId::new(2, 0)));
}

#[test]
fn sibling_blocks_are_distinct_scopes() {
    assert_eq!(ident_refs("{ a } { a } a"), vec![0, 1, 2]);
}

#[test]
fn block_counter_is_per_level() {
    let tokens = tokenize("{ { x } } { { x } }").unwrap();
    let resolved = resolve(&tokens).unwrap();
    let scopes: Vec<_> = resolved.symbols.iter().map(|(_, s)| s.scope).collect();
    assert_eq!(scopes, vec![ScopeId::new(2, 0), ScopeId::new(2, 1)]);
}

#[test]
fn same_scope_reuses_entry() {
    assert_eq!(ident_refs("a = b; b = a + a;"), vec![0, 1, 1, 0, 0]);
}

#[test]
fn input_tokens_are_not_mutated() {
    let tokens = tokenize("int a; a = 1;").unwrap();
    let before = tokens.clone();
    let resolved = resolve(&tokens).unwrap();
    assert_eq!(tokens, before);
    assert_eq!(tokens[1].text(), Some("a"));
    assert_eq!(resolved.tokens[1].value, Some(TokenValue::Symbol(SymbolId(0))));
    // everything that is not an identifier is copied as is
    assert_eq!(resolved.tokens[0], tokens[0]);
    assert_eq!(resolved.tokens[5], tokens[5]);
}

#[test]
fn unclosed_blocks_are_accepted() {
    assert_eq!(ident_refs("{ { a"), vec![0]);
}

#[test]
fn stray_brace_after_balanced_blocks() {
    let tokens = tokenize("{ a }\n}").unwrap();
    let err = resolve(&tokens).unwrap_err();
    assert_eq!((err.line, err.column), (2, 1));
    assert_eq!(err.to_string(), "no matching left brace (2:1)");
}

#[test]
fn empty_input_has_empty_table() {
    let resolved = resolve(&[]).unwrap();
    assert!(resolved.symbols.is_empty());
    assert!(resolved.tokens.is_empty());
}
