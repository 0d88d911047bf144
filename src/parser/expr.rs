use crate::{
    ast::expressions::{
        BinaryExpr, BinaryOp, Expr, GroupExpr, IntegerExpr, PrefixExpr, SymbolExpr, UnaryOp,
    },
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses one full expression, starting at the loosest-binding tier.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parse_additive_expr(parser)
}

/// Additive tier: left-folds `+` and `-` over multiplicative operands,
/// so `a - b + c` parses as `(a - b) + c`.
fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut left = parse_multiplicative_expr(parser)?;

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Dash => BinaryOp::Subtract,
            _ => break,
        };

        parser.advance();
        let right = parse_multiplicative_expr(parser)?;

        left = Expr::Binary(BinaryExpr {
            position: left.position(),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

/// Multiplicative tier: left-folds `*` and `/` over unary operands.
fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let mut left = parse_unary_expr(parser)?;

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Star => BinaryOp::Multiply,
            TokenKind::Slash => BinaryOp::Divide,
            _ => break,
        };

        parser.advance();
        let right = parse_unary_expr(parser)?;

        left = Expr::Binary(BinaryExpr {
            position: left.position(),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

/// Unary tier: a prefix `-` recurses back into this tier, so `--x` nests
/// two prefix nodes. Anything else falls through to the primary tier.
fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    if parser.check(TokenKind::Dash) {
        let operator_token = parser.advance().clone();
        let operand = parse_unary_expr(parser)?;

        return Ok(Expr::Prefix(PrefixExpr {
            operator: UnaryOp::Negate,
            operand: Box::new(operand),
            position: operator_token.position,
        }));
    }

    parse_primary_expr(parser)
}

/// Primary tier: literals, identifiers and parenthesized groups.
fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let token = parser.current_token();
            let result = token.lexeme.parse();

            // The lexer only emits digit runs here, but a run can still
            // overflow the literal width.
            match result {
                Ok(value) => {
                    let token = parser.advance();
                    Ok(Expr::Integer(IntegerExpr {
                        value,
                        position: token.position,
                    }))
                }
                Err(_) => Err(SyntaxError::new(
                    SyntaxErrorKind::MalformedInteger {
                        lexeme: token.lexeme.clone(),
                    },
                    token.position,
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                name: token.lexeme.clone(),
                position: token.position,
            }))
        }
        TokenKind::OpenParen => {
            let open_token = parser.advance().clone();
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Expr::Group(GroupExpr {
                inner: Box::new(inner),
                position: open_token.position,
            }))
        }
        _ => {
            let token = parser.current_token();
            Err(SyntaxError::new(
                SyntaxErrorKind::ExpectedExpression {
                    found: token.lexeme.clone(),
                },
                token.position,
            ))
        }
    }
}
