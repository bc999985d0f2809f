// Integration tests for the mini language parser

use minic::parser::ast::{AstNode, BinOp, SourceLocation};
use minic::parser::lexer::{LexError, Lexer, TokenKind, MAX_TOKEN_LEN};
use minic::parser::parse::{Parser, SyntaxError};
use minic::printer;

fn parse(source: &str) -> minic::parser::ast::Program {
    let mut parser = Parser::new(source).expect("Parser creation failed");
    parser.parse_program().expect("Parsing failed")
}

fn parse_err(source: &str) -> SyntaxError {
    let mut parser = Parser::new(source).expect("Parser creation failed");
    parser
        .parse_program()
        .expect_err("Parsing should have failed")
}

#[test]
fn test_declaration_carries_name_and_nothing_else() {
    let program = parse("int value;");

    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        AstNode::Declaration { name, .. } => assert_eq!(name, "value"),
        node => panic!("Expected declaration, got {:?}", node),
    }
}

#[test]
fn test_assignment_has_single_value_child() {
    let program = parse("total = total + 10;");

    match &program.statements[0] {
        AstNode::Assignment { target, value, .. } => {
            assert_eq!(target, "total");
            match value.as_ref() {
                AstNode::BinaryOp { op, left, right, .. } => {
                    assert_eq!(*op, BinOp::Add);
                    assert!(matches!(left.as_ref(), AstNode::Identifier(n, _) if n == "total"));
                    assert!(matches!(right.as_ref(), AstNode::Literal(t, _) if t == "10"));
                }
                node => panic!("Expected binary op, got {:?}", node),
            }
        }
        node => panic!("Expected assignment, got {:?}", node),
    }
}

#[test]
fn test_expression_chains_fold_left() {
    // a + b - c must group as (a + b) - c
    let program = parse("x = a + b - c;");

    let value = match &program.statements[0] {
        AstNode::Assignment { value, .. } => value.as_ref(),
        node => panic!("Expected assignment, got {:?}", node),
    };

    match value {
        AstNode::BinaryOp {
            op: BinOp::Sub,
            left,
            right,
            ..
        } => {
            match left.as_ref() {
                AstNode::BinaryOp {
                    op: BinOp::Add,
                    left,
                    right,
                    ..
                } => {
                    assert!(matches!(left.as_ref(), AstNode::Identifier(n, _) if n == "a"));
                    assert!(matches!(right.as_ref(), AstNode::Identifier(n, _) if n == "b"));
                }
                node => panic!("Expected inner '+', got {:?}", node),
            }
            assert!(matches!(right.as_ref(), AstNode::Identifier(n, _) if n == "c"));
        }
        node => panic!("Expected outer '-', got {:?}", node),
    }
}

#[test]
fn test_conditional_keeps_all_three_children() {
    let program = parse("if (a == 5) { a = a + 1; }");

    match &program.statements[0] {
        AstNode::Conditional { lhs, rhs, body, .. } => {
            assert!(matches!(lhs.as_ref(), AstNode::Identifier(n, _) if n == "a"));
            assert!(matches!(rhs.as_ref(), AstNode::Literal(t, _) if t == "5"));
            match body.as_ref() {
                AstNode::Assignment { target, value, .. } => {
                    assert_eq!(target, "a");
                    assert!(matches!(
                        value.as_ref(),
                        AstNode::BinaryOp { op: BinOp::Add, .. }
                    ));
                }
                node => panic!("Expected assignment body, got {:?}", node),
            }
        }
        node => panic!("Expected conditional, got {:?}", node),
    }
}

#[test]
fn test_conditional_operands_may_be_expressions() {
    let program = parse("if (a + 1 == b - 2) { c = 3; }");

    match &program.statements[0] {
        AstNode::Conditional { lhs, rhs, .. } => {
            assert!(matches!(
                lhs.as_ref(),
                AstNode::BinaryOp { op: BinOp::Add, .. }
            ));
            assert!(matches!(
                rhs.as_ref(),
                AstNode::BinaryOp { op: BinOp::Sub, .. }
            ));
        }
        node => panic!("Expected conditional, got {:?}", node),
    }
}

#[test]
fn test_full_program() {
    let source = r#"
        int a;
        int b;
        a = 1;
        b = a + 41;
        if (b == 42) {
            a = b - 1;
        }
    "#;

    let program = parse(source);
    assert_eq!(program.statements.len(), 5);
}

// === Error cases ===

#[test]
fn test_number_where_identifier_required() {
    let err = parse_err("int 5;");

    assert_eq!(
        err,
        SyntaxError::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Number,
            position: SourceLocation::new(1, 5),
        }
    );
}

#[test]
fn test_unterminated_declaration() {
    let err = parse_err("int a");

    assert_eq!(
        err,
        SyntaxError::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Eof,
            position: SourceLocation::new(1, 6),
        }
    );
}

#[test]
fn test_missing_operand() {
    let err = parse_err("a = ;");

    assert!(matches!(
        err,
        SyntaxError::ExpectedOperand {
            found: TokenKind::Semicolon,
            ..
        }
    ));
}

#[test]
fn test_dangling_operator() {
    let err = parse_err("a = b + ;");

    assert!(matches!(
        err,
        SyntaxError::ExpectedOperand {
            found: TokenKind::Semicolon,
            ..
        }
    ));
}

#[test]
fn test_statement_cannot_start_with_operator() {
    let err = parse_err("+ a;");

    assert!(matches!(
        err,
        SyntaxError::UnexpectedStatementStart {
            found: TokenKind::Plus,
            ..
        }
    ));
}

#[test]
fn test_conditional_body_admits_one_assignment() {
    let err = parse_err("if (a == 1) { a = 2; b = 3; }");

    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken {
            expected: TokenKind::RBrace,
            found: TokenKind::Identifier,
            ..
        }
    ));
}

#[test]
fn test_conditional_requires_equality() {
    let err = parse_err("if (a = 1) { a = 2; }");

    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken {
            expected: TokenKind::Equal,
            found: TokenKind::Assign,
            ..
        }
    ));
}

#[test]
fn test_unrecognized_character_reported_with_position() {
    let err = Parser::new("int a;\na = #1;").expect_err("lexing should fail");

    assert_eq!(
        err,
        SyntaxError::Lex(LexError::UnrecognizedCharacter {
            character: '#',
            position: SourceLocation::new(2, 5),
        })
    );
}

#[test]
fn test_overlong_identifier_rejected() {
    let source = format!("int {};", "a".repeat(MAX_TOKEN_LEN + 1));
    let err = Parser::new(&source).expect_err("lexing should fail");

    assert!(matches!(
        err,
        SyntaxError::Lex(LexError::TokenTooLong { .. })
    ));
}

#[test]
fn test_error_message_names_kinds_and_position() {
    let err = parse_err("int 5;");

    assert_eq!(
        err.to_string(),
        "expected identifier, found number at line 1, column 5"
    );
}

// === Lexer stream behavior ===

#[test]
fn test_eof_is_idempotent_after_end_of_input() {
    let mut lexer = Lexer::new("int a;");

    let mut kinds = Vec::new();
    for _ in 0..6 {
        kinds.push(lexer.next_token().expect("lexing failed").kind);
    }

    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Eof,
            TokenKind::Eof,
            TokenKind::Eof,
        ]
    );
}

// === Printer round-trip ===

#[test]
fn test_printer_shows_one_child_per_statement() {
    let source = "int a; int b; a = 1; b = 2; if (a == b) { a = 0; }";
    let program = parse(source);
    let rendered = printer::render(&program);

    let first_level = rendered
        .lines()
        .filter(|line| line.starts_with("  ") && !line.starts_with("    "))
        .count();
    assert_eq!(first_level, program.statements.len());
    assert!(rendered.starts_with("Program\n"));
}
