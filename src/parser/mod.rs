//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a recursive-descent parser with
//! precedence-tiered expression rules and handles:
//!
//! - Statement parsing (variable declarations, assignments, bare expressions)
//! - Expression parsing (binary/prefix operators, grouping, literals)
//! - Single-shot error reporting with expected/found descriptions
//!
//! Expression precedence is encoded structurally: each tier parses operands
//! one tier below itself, so `*`/`/` bind tighter than `+`/`-`, prefix `-`
//! binds tighter than any binary operator, and parentheses override all of it.

pub mod expr;
pub mod parser;
pub mod stmt;
