// Integration tests for the hal parser

use hal::parser::{Lexer, Parser, ParserOptions, Statement};

fn parse(source: &str) -> (Vec<Statement>, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program.statements, parser.errors().to_vec())
}

#[test]
fn test_let_statements() {
    let source = "let x = 5;\nlet y = 10;\nlet foobar = 12345;\n";
    let (statements, errors) = parse(source);

    assert!(errors.is_empty(), "Unexpected diagnostics: {:?}", errors);
    assert_eq!(statements.len(), 3);

    for (stmt, expected) in statements.iter().zip(["x", "y", "foobar"]) {
        assert_eq!(stmt.token_literal(), "let");
        match stmt {
            Statement::Let(let_stmt) => {
                assert_eq!(let_stmt.name.value, expected);
                assert_eq!(let_stmt.name.token_literal(), expected);
                assert!(let_stmt.value.is_none());
            }
            other => panic!("Expected let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_return_statements() {
    let (statements, errors) = parse("return 5;\nreturn 10;\nreturn 993322;\n");

    assert!(errors.is_empty(), "Unexpected diagnostics: {:?}", errors);
    assert_eq!(statements.len(), 3);
    for stmt in &statements {
        assert!(matches!(stmt, Statement::Return(_)));
        assert_eq!(stmt.token_literal(), "return");
    }
}

#[test]
fn test_let_missing_identifier_records_nothing() {
    let (statements, errors) = parse("let = 5;");
    assert!(statements.is_empty());
    assert_eq!(errors.len(), 0);
}

#[test]
fn test_let_missing_identifier_strict() {
    let mut parser = Parser::with_options(Lexer::new("let = 5;"), ParserOptions::strict());
    let program = parser.parse_program();
    assert!(program.statements.is_empty());
    assert_eq!(
        parser.errors(),
        ["expected next token to be IDENT, got ASSIGN instead"]
    );
}

#[test]
fn test_strict_errors_keep_source_order() {
    let source = "let = 1;\nlet x 2;\nlet ok = 3;\nlet y = 4";
    let mut parser = Parser::with_options(Lexer::new(source), ParserOptions::strict());
    let program = parser.parse_program();

    assert_eq!(program.statements.len(), 1);
    assert_eq!(
        parser.errors(),
        [
            "expected next token to be IDENT, got ASSIGN instead",
            "expected next token to be ASSIGN, got INT instead",
            "expected next token to be SEMICOLON, got EOF instead",
        ]
    );
}

#[test]
fn test_mixed_program_keeps_order() {
    let source = "let a = 1;\nfoo();\nreturn a;\nlet b = a + 2;";
    let (statements, _) = parse(source);

    let rendered: Vec<String> = statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, ["let a = ;", "return ;", "let b = ;"]);
}

#[test]
fn test_value_tokens_are_skipped_to_semicolon() {
    // The `let` inside the value is consumed, not parsed as a statement
    let (statements, _) = parse("let a = let b = 2; let c = 3;");
    assert_eq!(statements.len(), 2);
    assert!(matches!(&statements[1], Statement::Let(s) if s.name.value == "c"));
}

#[test]
fn test_program_display() {
    let program = Parser::from_source("let x = 5;\nreturn x;").parse_program();
    assert_eq!(program.to_string(), "let x = ;\nreturn ;\n");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_programs_differing_in_whitespace_are_equal() {
    let tight = Parser::from_source("let x = 5;").parse_program();
    let loose = Parser::from_source("let  x =\n 5 ;").parse_program();
    assert_eq!(tight, loose);

    let other = Parser::from_source("let y = 5;").parse_program();
    assert_ne!(tight, other);
}
