//! Statement parsing implementation
//!
//! This module handles parsing of the three statement forms:
//!
//! - Variable declarations: `int x;`
//! - Assignments: `x = a + 1;`
//! - Conditionals: `if (a == b) { x = 1; }`
//!
//! # Grammar
//!
//! ```text
//! statement   ::= declaration | assignment | conditional
//! declaration ::= "int" identifier ";"
//! assignment  ::= identifier "=" expression ";"
//! conditional ::= "if" "(" expression "==" expression ")" "{" assignment "}"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::AstNode;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a statement, dispatching on the current token kind.
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, SyntaxError> {
        match self.peek_kind() {
            TokenKind::Int => self.parse_declaration(),
            TokenKind::If => self.parse_conditional(),
            TokenKind::Identifier => self.parse_assignment(),
            found => Err(SyntaxError::UnexpectedStatementStart {
                found,
                position: self.current_location(),
            }),
        }
    }

    /// Parse a variable declaration: `int name;`
    ///
    /// There is no initializer syntax; the node carries just the name.
    pub(crate) fn parse_declaration(&mut self) -> Result<AstNode, SyntaxError> {
        self.expect(TokenKind::Int)?;
        let name = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(AstNode::Declaration {
            name: name.text,
            location: name.location,
        })
    }

    /// Parse an assignment: `target = expression;`
    pub(crate) fn parse_assignment(&mut self) -> Result<AstNode, SyntaxError> {
        let target = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Assign)?;
        let value = Box::new(self.parse_expression()?);
        self.expect(TokenKind::Semicolon)?;

        Ok(AstNode::Assignment {
            target: target.text,
            value,
            location: target.location,
        })
    }

    /// Parse a conditional: `if ( expression == expression ) { assignment }`
    ///
    /// The body admits exactly one assignment. Both equality operands and
    /// the body become children of the node.
    pub(crate) fn parse_conditional(&mut self) -> Result<AstNode, SyntaxError> {
        let keyword = self.expect(TokenKind::If)?;

        self.expect(TokenKind::LParen)?;
        let lhs = Box::new(self.parse_expression()?);
        self.expect(TokenKind::Equal)?;
        let rhs = Box::new(self.parse_expression()?);
        self.expect(TokenKind::RParen)?;

        self.expect(TokenKind::LBrace)?;
        let body = Box::new(self.parse_assignment()?);
        self.expect(TokenKind::RBrace)?;

        Ok(AstNode::Conditional {
            lhs,
            rhs,
            body,
            location: keyword.location,
        })
    }
}
