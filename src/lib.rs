//! # Introduction
//!
//! minic turns source text of a miniature imperative language into an
//! Abstract Syntax Tree for later compiler phases to consume.  The language
//! has integer declarations, assignments, `+`/`-` expression chains over
//! numbers and identifiers, and a single-assignment conditional guarded by
//! an equality test.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — scans characters into located tokens.
//! 2. [`parser::parse`] — recursive descent over the token buffer with one
//!    token of lookahead; builds the [`parser::ast::Program`] tree or fails
//!    fast with a structured error.
//! 3. [`printer`] — indented tree rendering for manual inspection; not part
//!    of the parsing pipeline.
//!
//! ## Supported language
//!
//! Statements: `int x;`, `x = a + 1;`, `if (a == b) { x = 1; }`.
//! Expressions: left-associative `+`/`-` chains; a single precedence tier.
//! Semantic analysis, code generation, loops, and function definitions are
//! out of scope.

pub mod parser;
pub mod printer;
