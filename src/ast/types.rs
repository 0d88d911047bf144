use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Type keywords a variable declaration can start with.
///
/// Closed set: adding a keyword means adding a variant here and a token
/// kind for it, both checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
}

impl TypeName {
    /// Maps a type-keyword token kind to its tag. Returns None for any
    /// token kind that does not start a declaration.
    pub fn from_token_kind(kind: TokenKind) -> Option<TypeName> {
        match kind {
            TokenKind::IntType => Some(TypeName::Int),
            _ => None,
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeName::Int => write!(f, "int"),
        }
    }
}
