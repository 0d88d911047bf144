use crate::{
    ast::{
        statements::{AssignmentStmt, ExpressionStmt, Stmt, VarDeclStmt},
        types::TypeName,
    },
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses one top-level statement, dispatching on the leading token.
///
/// A type keyword starts a variable declaration and an identifier directly
/// followed by `=` starts an assignment; anything else is a bare
/// expression statement. The grammar has no statement terminator: the next
/// statement begins at the next unconsumed token.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    if TypeName::from_token_kind(parser.current_token_kind()).is_some() {
        return parse_var_decl_stmt(parser);
    }

    if parser.check(TokenKind::Identifier) && parser.next_token_kind() == TokenKind::Assignment {
        return parse_assignment_stmt(parser);
    }

    let expression = parse_expr(parser)?;

    Ok(Stmt::Expression(ExpressionStmt {
        position: expression.position(),
        expression,
    }))
}

/// Parses `int name` with an optional `= expr` initializer.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let start_token = parser.advance().clone();
    let type_name = TypeName::from_token_kind(start_token.kind)
        .ok_or_else(|| {
            SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken {
                    expected: String::from("type keyword"),
                    found: start_token.lexeme.clone(),
                },
                start_token.position,
            )
        })?;

    let error = SyntaxError::new(
        SyntaxErrorKind::UnexpectedToken {
            expected: String::from("identifier in variable declaration"),
            found: parser.current_token().lexeme.clone(),
        },
        parser.get_position(),
    );
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.lexeme;

    let assigned_value = if parser.check(TokenKind::Assignment) {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        type_name,
        identifier,
        assigned_value,
        position: start_token.position,
    }))
}

/// Parses `name = expr`. Only entered when the lookahead saw the `=`.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        assignee: name_token.lexeme,
        value,
        position: name_token.position,
    }))
}
