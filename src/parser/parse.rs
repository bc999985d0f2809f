//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, single-token-lookahead helpers, and the
//! main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing statements (declaration, assignment, conditional)
//! - `expressions`: Parsing additive expression chains and factors
//!
//! Parser methods are split across multiple files using `impl Parser`
//! blocks, allowing each module to extend the Parser with related
//! functionality while maintaining access to the shared parser state.
//!
//! # Errors
//!
//! Parsing is fail-fast: the first malformed token aborts the parse with a
//! [`SyntaxError`] naming the expected and actual token kinds and the source
//! position. There is no recovery and no partial AST.

use crate::parser::ast::{Program, SourceLocation};
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found} at line {}, column {}", .position.line, .position.column)]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        position: SourceLocation,
    },
    #[error("expected a number or identifier, found {found} at line {}, column {}", .position.line, .position.column)]
    ExpectedOperand {
        found: TokenKind,
        position: SourceLocation,
    },
    #[error("{found} cannot start a statement at line {}, column {}", .position.line, .position.column)]
    UnexpectedStatementStart {
        found: TokenKind,
        position: SourceLocation,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Recursive descent parser for the mini language
#[derive(Debug)]
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the entire program: a sequence of statements up to end of input.
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let statement = self.parse_statement()?;
            program.statements.push(statement);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.tokens[self.position].kind
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Consume the current token if its kind matches, returning it so
    /// callers can capture the lexeme. Fails without consuming otherwise.
    pub(crate) fn expect(&mut self, expected: TokenKind) -> Result<Token, SyntaxError> {
        if self.check(expected) {
            Ok(self.advance().clone())
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected,
                found: self.peek_kind(),
                position: self.current_location(),
            })
        }
    }
}
