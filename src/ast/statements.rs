use std::fmt::Display;

use crate::Position;

use super::{expressions::Expr, types::TypeName};

/// Variable Declaration Statement
/// Represents a typed variable declaration, with an optional initializer.
///
/// The initializer is present exactly when an `=` followed the identifier
/// in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub type_name: TypeName,
    pub identifier: String,
    pub assigned_value: Option<Expr>,
    pub position: Position,
}

/// Assignment Statement
/// Represents an assignment to an already-declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub assignee: String,
    pub value: Expr,
    pub position: Position,
}

/// Expression Statement
/// Represents a bare expression at statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub position: Position,
}

/// The closed set of statement node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Position of the leading token of the statement.
    pub fn position(&self) -> Position {
        match self {
            Stmt::VarDecl(stmt) => stmt.position,
            Stmt::Assignment(stmt) => stmt.position,
            Stmt::Expression(stmt) => stmt.position,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDecl(stmt) => match &stmt.assigned_value {
                Some(value) => {
                    write!(f, "{} {} = {}", stmt.type_name, stmt.identifier, value)
                }
                None => write!(f, "{} {}", stmt.type_name, stmt.identifier),
            },
            Stmt::Assignment(stmt) => write!(f, "{} = {}", stmt.assignee, stmt.value),
            Stmt::Expression(stmt) => write!(f, "{}", stmt.expression),
        }
    }
}

/// Program
/// The root of the AST: an ordered sequence of top-level statements.
///
/// Owns the whole tree; dropping the program drops every node. Empty only
/// when the token stream held nothing but the EOF marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub position: Position,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
