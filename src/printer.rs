//! Indented AST rendering for manual inspection
//!
//! Walks the tree depth-first in pre-order (node, then children in order)
//! and indents each level by two spaces. Debug aid only; nothing in the
//! parsing pipeline depends on this output.

use crate::parser::ast::{AstNode, Program};

/// Render a whole program as an indented tree.
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("Program\n");

    for statement in &program.statements {
        write_node(&mut out, statement, 1);
    }

    out
}

/// Render a single subtree rooted at `node`.
pub fn render_node(node: &AstNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &AstNode, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }

    match node {
        AstNode::Declaration { name, .. } => {
            out.push_str("Declaration ");
            out.push_str(name);
            out.push('\n');
        }
        AstNode::Assignment { target, value, .. } => {
            out.push_str("Assignment ");
            out.push_str(target);
            out.push('\n');
            write_node(out, value, depth + 1);
        }
        AstNode::Conditional { lhs, rhs, body, .. } => {
            out.push_str("Conditional\n");
            write_node(out, lhs, depth + 1);
            write_node(out, rhs, depth + 1);
            write_node(out, body, depth + 1);
        }
        AstNode::BinaryOp {
            op, left, right, ..
        } => {
            out.push_str("BinaryOp ");
            out.push_str(op.symbol());
            out.push('\n');
            write_node(out, left, depth + 1);
            write_node(out, right, depth + 1);
        }
        AstNode::Literal(text, _) => {
            out.push_str("Literal ");
            out.push_str(text);
            out.push('\n');
        }
        AstNode::Identifier(name, _) => {
            out.push_str("Identifier ");
            out.push_str(name);
            out.push('\n');
        }
    }
}
