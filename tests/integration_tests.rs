//! Integration tests for the full front-end pipeline.
//!
//! These tests drive source text through tokenization and parsing and check
//! the shape and rendering of the resulting tree, including the round-trip
//! property: rendering a program and parsing the rendering again yields a
//! structurally equal tree.

use frontend::ast::statements::Stmt;
use frontend::errors::errors::SyntaxErrorKind;
use frontend::lexer::lexer::tokenize;
use frontend::parser::parser::parse;

#[test]
fn test_parse_demo_declaration() {
    let source = "int test = ( - 34 + 76 ) * 34";
    let tokens = tokenize(source).unwrap();
    let program = parse(tokens).unwrap();

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "int test = (-34 + 76) * 34");
}

#[test]
fn test_statement_count_matches_source() {
    let source = "int a = 1\nint b\nb = a * 2\na + b";
    let tokens = tokenize(source).unwrap();
    let program = parse(tokens).unwrap();

    assert_eq!(program.statements.len(), 4);
}

#[test]
fn test_rendering_keeps_explicit_parens_only() {
    let grouped = parse(tokenize("(a + b) * c").unwrap()).unwrap();
    assert_eq!(grouped.to_string(), "(a + b) * c");

    let ungrouped = parse(tokenize("a + b * c").unwrap()).unwrap();
    assert_eq!(ungrouped.to_string(), "a + b * c");
}

#[test]
fn test_render_reparse_round_trip() {
    let sources = [
        "int test = ( - 34 + 76 ) * 34",
        "a - b - c",
        "(a + b) * c",
        "a + b * c",
        "int x\nx = --4 / (2 - 1)",
    ];

    for source in sources {
        let program = parse(tokenize(source).unwrap()).unwrap();
        let rendered = program.to_string();
        let reparsed = parse(tokenize(&rendered).unwrap()).unwrap();

        assert_eq!(
            reparsed.to_string(),
            rendered,
            "round trip diverged for {:?}",
            source
        );
        assert_eq!(
            reparsed.statements.len(),
            program.statements.len(),
            "statement count diverged for {:?}",
            source
        );
    }
}

#[test]
fn test_statements_are_separated_by_token_boundaries() {
    // No terminator token exists: the second statement begins at the
    // next unconsumed token even on the same line.
    let source = "int a = 1 int b = 2";
    let program = parse(tokenize(source).unwrap()).unwrap();

    assert_eq!(program.statements.len(), 2);
    assert!(matches!(program.statements[0], Stmt::VarDecl(_)));
    assert!(matches!(program.statements[1], Stmt::VarDecl(_)));
}

#[test]
fn test_unterminated_group_reports_expected_and_found() {
    let source = "int test = (34 + 76";
    let error = parse(tokenize(source).unwrap()).unwrap_err();

    let SyntaxErrorKind::UnexpectedToken { expected, found } = error.kind() else {
        panic!("expected an UnexpectedToken error, got {:?}", error.kind());
    };
    assert_eq!(expected, "`)`");
    assert_eq!(found, "EOF");
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 20);
}

#[test]
fn test_first_error_wins() {
    // Both statements are malformed; only the first is reported.
    let source = "int = 1\nint = 2";
    let error = parse(tokenize(source).unwrap()).unwrap_err();

    assert_eq!(error.get_position().line, 1);
}

#[test]
fn test_lexer_error_stops_pipeline() {
    let result = tokenize("int a = $1");

    assert!(result.is_err());
}
