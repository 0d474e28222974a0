//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public `tokenize` entry point with whole programs
//! and run the `rwlex` binary against files on disk.

use std::{fs, path::PathBuf, process::Command};

use rwlex::{
    lexer::{
        lexer::tokenize,
        state::State,
        tokens::{Token, TokenKind},
    },
    render_error, MK_TOKEN,
};

fn token(kind: TokenKind, lexeme: &str) -> Token {
    MK_TOKEN!(kind, lexeme.to_string())
}

fn write_source(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("rwlex_tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_read_statement() {
    let tokens = tokenize("read x\n".to_string(), Some("a.rw".to_string())).unwrap();

    assert_eq!(
        tokens,
        vec![token(TokenKind::Keyword, "read"), token(TokenKind::Identifier, "x")]
    );
    assert_eq!(tokens[0].value.as_deref(), Some("read"));
}

#[test]
fn test_spaced_assignment() {
    let tokens = tokenize("x := 10\n".to_string(), None).unwrap();

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Identifier, "x"),
            token(TokenKind::Assign, ":="),
            token(TokenKind::Number, "10"),
        ]
    );
    assert_eq!(tokens[1].value, None);
}

#[test]
fn test_unspaced_assignment_is_rejected() {
    let error = tokenize("x:=10\n".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.character(), ':');
    assert_eq!(error.state(), State::InIdentifierOrKeyword);
    assert_eq!((error.get_position().row, error.get_position().col), (1, 2));
}

#[test]
fn test_unspaced_operator_is_rejected() {
    let error = tokenize("a+b\n".to_string(), None).unwrap_err();

    assert_eq!(error.character(), '+');
    assert_eq!((error.get_position().row, error.get_position().col), (1, 2));
}

#[test]
fn test_second_decimal_point_is_rejected() {
    let error = tokenize("1.2.3\n".to_string(), None).unwrap_err();

    assert_eq!(error.character(), '.');
    assert_eq!((error.get_position().row, error.get_position().col), (1, 4));
}

#[test]
fn test_write_expression() {
    let tokens = tokenize("write (a + b)\n".to_string(), None).unwrap();

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Keyword, "write"),
            token(TokenKind::LParen, "("),
            token(TokenKind::Identifier, "a"),
            token(TokenKind::Plus, "+"),
            token(TokenKind::Identifier, "b"),
            token(TokenKind::RParen, ")"),
        ]
    );
}

#[test]
fn test_rendered_diagnostic() {
    let source = "read x\ny := x * 2 @\n";
    let error = tokenize(source.to_string(), Some("prog.rw".to_string())).unwrap_err();
    let rendered = render_error(&error, source);

    assert!(rendered.contains("-> prog.rw:2:12"));
    assert!(rendered.contains("2 | y := x * 2 @"));
}

#[test]
fn test_binary_prints_symbol_table() {
    let path = write_source("ok.rw", "read a\nb := a * 2\nwrite b\n");

    let output = Command::new(env!("CARGO_BIN_EXE_rwlex"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 10);
    assert!(lines[0].contains("SYMBOL TABLE"));
    assert_eq!(lines[1], r#"{ lexeme: "read", token: Keyword, value: "read" }"#);
    assert_eq!(lines[4], r#"{ lexeme: ":=", token: Assign }"#);
    assert_eq!(lines[9], r#"{ lexeme: "b", token: Identifier, value: "b" }"#);
}

#[test]
fn test_binary_reports_lexical_error() {
    let path = write_source("bad.rw", "x:=10\n");

    let output = Command::new(env!("CARGO_BIN_EXE_rwlex"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: UnexpectedCharacter"));
    assert!(stderr.contains("bad.rw:1:2"));
}

#[test]
fn test_binary_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_rwlex"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: rwlex <filename>"));
}

#[test]
fn test_binary_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_rwlex"))
        .arg("/nonexistent/rwlex/input.rw")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to read"));
}
