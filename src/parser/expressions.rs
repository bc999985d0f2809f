//! Expression parsing implementation
//!
//! Expressions are flat additive chains over two factor forms:
//!
//! ```text
//! expression ::= factor { ("+" | "-") factor }
//! factor     ::= number | identifier
//! ```
//!
//! There is a single precedence tier. Chains fold left-associatively, so
//! `a + b - c` parses as `(a + b) - c`: the accumulated expression becomes
//! the left child of each new operator node, matching left-to-right
//! evaluation order.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{AstNode, BinOp};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse an additive expression chain.
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_factor()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_kind(TokenKind::Plus) {
                BinOp::Add
            } else if self.match_kind(TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_factor()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse a factor: a numeric literal or an identifier leaf.
    pub(crate) fn parse_factor(&mut self) -> Result<AstNode, SyntaxError> {
        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                Ok(AstNode::Literal(token.text.clone(), token.location))
            }
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(AstNode::Identifier(token.text.clone(), token.location))
            }
            found => Err(SyntaxError::ExpectedOperand {
                found,
                position: self.current_location(),
            }),
        }
    }
}
