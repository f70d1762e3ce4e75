use cmm_lex::{resolve, tokenize, LexErrorKind};

#[test]
fn unterminated_string_points_at_opening_quote() {
    let err = tokenize("int a;\n  \"abc").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::QuotesNotClosed);
    assert_eq!((err.line, err.column), (2, 3));
    assert_eq!(err.to_string(), "quotes not closed (2:3)");
}

#[test]
fn backslash_before_end_is_unterminated() {
    let err = tokenize(r#""abc\"#).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::QuotesNotClosed);
}

#[test]
fn unknown_symbol() {
    let err = tokenize("a = b # c;").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownSymbol('#'));
    assert_eq!((err.line, err.column), (1, 7));
    assert_eq!(err.to_string(), "unknown symbol: # (1:7)");
}

#[test]
fn carriage_return_is_not_whitespace() {
    let err = tokenize("a;\r\n").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownSymbol('\r'));
}

/// The first error wins even when later input is also malformed.
#[test]
fn first_error_aborts_pass() {
    let err = tokenize("a @ \"unclosed").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownSymbol('@'));
}

#[test]
fn stray_right_brace_only_fails_symbol_pass() {
    let tokens = tokenize("}").expect("tokenizing a lone brace succeeds");
    let err = resolve(&tokens).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::NoMatchingLeftBrace);
    assert_eq!((err.line, err.column), (1, 1));
}
