use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The single failure kind of the front end.
///
/// Carries the position of the offending input and a kind describing what
/// was expected against what was actually found. Produced once per parse:
/// the first grammar violation stops the parse, nothing is recovered.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    position: Position,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: Position) -> Self {
        SyntaxError { kind, position }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            SyntaxErrorKind::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            SyntaxErrorKind::UnexpectedToken { .. } => "UnexpectedToken",
            SyntaxErrorKind::ExpectedExpression { .. } => "ExpectedExpression",
            SyntaxErrorKind::MalformedInteger { .. } => "MalformedInteger",
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    #[error("unrecognised character: {ch:?}")]
    UnrecognisedCharacter { ch: char },
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: String, found: String },
    #[error("expected expression, found `{found}`")]
    ExpectedExpression { found: String },
    #[error("error parsing integer literal: {lexeme:?}")]
    MalformedInteger { lexeme: String },
}
