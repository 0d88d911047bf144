use std::fmt::Display;

use crate::Position;

/// Binary operator tags, drawn from the fixed precedence table in the
/// parser. `Multiply`/`Divide` bind tighter than `Add`/`Subtract`; all of
/// them associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Subtract => write!(f, "-"),
            BinaryOp::Multiply => write!(f, "*"),
            BinaryOp::Divide => write!(f, "/"),
        }
    }
}

/// Prefix operator tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "-"),
        }
    }
}

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub position: Position,
}

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub name: String,
    pub position: Position,
}

/// Prefix Expression
/// Represents a prefix operation on an expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub position: Position,
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub position: Position,
}

/// Group Expression
/// Represents an explicitly parenthesized expression in the AST.
///
/// Transparent to evaluation order (its content already reflects the
/// parsed precedence) but kept as a node so the tree renders back with
/// its parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpr {
    pub inner: Box<Expr>,
    pub position: Position,
}

/// The closed set of expression node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(IntegerExpr),
    Symbol(SymbolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Group(GroupExpr),
}

impl Expr {
    /// Position of the leading token of the expression.
    pub fn position(&self) -> Position {
        match self {
            Expr::Integer(expr) => expr.position,
            Expr::Symbol(expr) => expr.position,
            Expr::Prefix(expr) => expr.position,
            Expr::Binary(expr) => expr.position,
            Expr::Group(expr) => expr.position,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Integer(expr) => write!(f, "{}", expr.value),
            Expr::Symbol(expr) => write!(f, "{}", expr.name),
            Expr::Prefix(expr) => write!(f, "{}{}", expr.operator, expr.operand),
            Expr::Binary(expr) => {
                write!(f, "{} {} {}", expr.left, expr.operator, expr.right)
            }
            Expr::Group(expr) => write!(f, "({})", expr.inner),
        }
    }
}
