// Integration tests for the hal lexer

use hal::parser::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
}

#[test]
fn test_punctuation_sequence() {
    use TokenKind::*;
    assert_eq!(
        kinds("=+(){},;"),
        [Assign, Plus, LParen, RParen, LBrace, RBrace, Comma, Semicolon, Eof]
    );
}

#[test]
fn test_operator_sequence() {
    use TokenKind::*;
    assert_eq!(
        kinds("!=*!= =+(){},; <= >= += -= *= /= < > == let"),
        [
            NEq, Multiply, NEq, Assign, Plus, LParen, RParen, LBrace, RBrace, Comma, Semicolon,
            LEq, GEq, PlusEq, MinusEq, MultEq, DivEq, Lt, Gt, Eq, Let, Eof
        ]
    );
}

#[test]
fn test_compound_literals_are_two_characters() {
    let tokens = Lexer::new("<= != /=").tokenize();
    let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
    assert_eq!(literals, ["<=", "!=", "/=", ""]);
}

#[test]
fn test_double_equals_then_assign() {
    use TokenKind::*;
    // Maximal munch pairs from the left: "===" is EQ then ASSIGN
    assert_eq!(kinds("==="), [Eq, Assign, Eof]);
    assert_eq!(kinds("=!"), [Assign, Exclaim, Eof]);
}

#[test]
fn test_identifier_followed_by_digit_splits() {
    let tokens = Lexer::new("foo1").tokenize();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "1");
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_keywords_in_source() {
    use TokenKind::*;
    assert_eq!(
        kinds("let fun return letter fn"),
        [Let, Function, Return, Ident, Ident, Eof]
    );
}

#[test]
fn test_next_token_past_eof() {
    let mut lexer = Lexer::new("let");
    assert_eq!(lexer.next_token().kind, TokenKind::Let);
    for _ in 0..100 {
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Eof);
        assert!(tok.literal.is_empty());
    }
}

#[test]
fn test_illegal_input_is_data() {
    let tokens = Lexer::new("let x = 5 $ 3;").tokenize();
    let illegal: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| t.literal.as_str())
        .collect();
    assert_eq!(illegal, ["$"]);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_token_equality_ignores_position() {
    let first = Lexer::new("let").next_token();
    let indented = Lexer::new("  let").next_token();
    assert_ne!(first.location, indented.location);
    assert_eq!(first, indented);
}
