use super::*;

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

fn cmp(name: &str, operator: BinaryOperator, right: Expression) -> Expression {
    Expression::binary(operator, ident(name), right)
}

fn parse_ok(input: &str) -> Expression {
    parse(input)
        .unwrap_or_else(|e| panic!("Failed to parse {input:?}: {e}"))
        .unwrap_or_else(|| panic!("Expected an expression for {input:?}"))
}

#[test]
fn test_empty_filter() {
    assert_eq!(parse("").unwrap(), None);
    assert_eq!(parse("   \n\t").unwrap(), None);
}

#[test]
fn test_simple_eq() {
    assert_eq!(
        parse_ok("name eq 'John'"),
        cmp("name", BinaryOperator::Eq, Expression::string("John"))
    );
}

#[test]
fn test_all_comparison_operators() {
    let cases = [
        ("age eq 1", BinaryOperator::Eq),
        ("age ne 1", BinaryOperator::Ne),
        ("age gt 1", BinaryOperator::Gt),
        ("age ge 1", BinaryOperator::Ge),
        ("age lt 1", BinaryOperator::Lt),
        ("age le 1", BinaryOperator::Le),
    ];

    for (input, operator) in cases {
        assert_eq!(
            parse_ok(input),
            cmp("age", operator, Expression::integer("1")),
            "Operator mismatch for {input}"
        );
    }
}

#[test]
fn test_null_literal() {
    assert_eq!(
        parse_ok("email eq null"),
        cmp("email", BinaryOperator::Eq, Expression::NullLiteral)
    );
    assert_eq!(
        parse_ok("email NE NULL"),
        cmp("email", BinaryOperator::Ne, Expression::NullLiteral)
    );
}

#[test]
fn test_not_binds_tighter_than_and() {
    let expected = Expression::binary(
        BinaryOperator::And,
        Expression::not(cmp("name", BinaryOperator::Eq, Expression::string("John"))),
        cmp("age", BinaryOperator::Gt, Expression::integer("18")),
    );
    assert_eq!(parse_ok("not name eq 'John' and age gt 18"), expected);
}

#[test]
fn test_and_binds_tighter_than_or() {
    let expected = Expression::binary(
        BinaryOperator::Or,
        cmp("a", BinaryOperator::Eq, Expression::integer("1")),
        Expression::binary(
            BinaryOperator::And,
            cmp("b", BinaryOperator::Eq, Expression::integer("2")),
            cmp("c", BinaryOperator::Eq, Expression::integer("3")),
        ),
    );
    assert_eq!(parse_ok("a eq 1 or b eq 2 and c eq 3"), expected);
}

#[test]
fn test_chains_are_left_associative() {
    let expected = Expression::binary(
        BinaryOperator::And,
        Expression::binary(
            BinaryOperator::And,
            cmp("a", BinaryOperator::Eq, Expression::integer("1")),
            cmp("b", BinaryOperator::Eq, Expression::integer("2")),
        ),
        cmp("c", BinaryOperator::Eq, Expression::integer("3")),
    );
    assert_eq!(parse_ok("a eq 1 and b eq 2 and c eq 3"), expected);
}

#[test]
fn test_long_chain_parses_and_drops() {
    let input = vec!["n eq 1"; 50_000].join(" or ");
    let tree = parse_ok(&input);

    // 50_000 comparisons of three nodes plus 49_999 `or` nodes
    assert_eq!(tree.node_count(), 199_999);
    drop(tree);
}

#[test]
fn test_parentheses_override_precedence() {
    let expected = Expression::binary(
        BinaryOperator::And,
        Expression::binary(
            BinaryOperator::Or,
            cmp("a", BinaryOperator::Eq, Expression::integer("1")),
            cmp("b", BinaryOperator::Eq, Expression::integer("2")),
        ),
        cmp("c", BinaryOperator::Eq, Expression::integer("3")),
    );
    assert_eq!(parse_ok("(a eq 1 or b eq 2) and c eq 3"), expected);
}

#[test]
fn test_not_with_group() {
    let expected = Expression::not(Expression::binary(
        BinaryOperator::Or,
        cmp("age", BinaryOperator::Lt, Expression::integer("18")),
        cmp("age", BinaryOperator::Gt, Expression::integer("65")),
    ));
    assert_eq!(parse_ok("not(age lt 18 or age gt 65)"), expected);
}

#[test]
fn test_column_to_column() {
    assert_eq!(
        parse_ok("age gt otherAge"),
        cmp("age", BinaryOperator::Gt, ident("otherAge"))
    );
}

#[test]
fn test_string_escape() {
    assert_eq!(
        parse_ok("surname eq 'O''Brien'"),
        cmp("surname", BinaryOperator::Eq, Expression::string("O'Brien"))
    );
    assert_eq!(
        parse_ok("surname eq ''"),
        cmp("surname", BinaryOperator::Eq, Expression::string(""))
    );
}

#[test]
fn test_keywords_need_word_boundary() {
    // `order` starts with `or`, `notes` with `not`, `nullable` with `null`
    assert_eq!(
        parse_ok("order eq notes"),
        cmp("order", BinaryOperator::Eq, ident("notes"))
    );
    assert_eq!(
        parse_ok("nullable ne null"),
        cmp("nullable", BinaryOperator::Ne, Expression::NullLiteral)
    );
}

#[test]
fn test_dotted_identifier() {
    assert_eq!(
        parse_ok("users.age ge 21"),
        cmp("users.age", BinaryOperator::Ge, Expression::integer("21"))
    );
}

#[test]
fn test_bare_operand() {
    assert_eq!(parse_ok("name"), ident("name"));
    assert_eq!(parse_ok("(42)"), Expression::integer("42"));
}

#[test]
fn test_syntax_error_position() {
    let err = parse("name eq").unwrap_err();
    match err {
        ParseError::Syntax { line, column, .. } => {
            assert_eq!(line, 1);
            assert_eq!(column, 8);
        }
        other => panic!("Expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_unterminated_string() {
    assert!(parse("name eq 'John").is_err());
}

#[test]
fn test_keyword_is_not_an_identifier() {
    assert!(parse("and eq 1").is_err());
    assert!(parse("name eq eq").is_err());
}

#[test]
fn test_trailing_garbage() {
    assert!(parse("name eq 'John' 42").is_err());
    assert!(parse("age gt 18abc").is_err());
}

#[test]
fn test_format_error_points_at_column() {
    let err = parse("age gt").unwrap_err();
    let formatted = err.format_error();
    let lines: Vec<&str> = formatted.lines().collect();

    assert_eq!(lines[1], "age gt");
    assert_eq!(lines[2], "      ^");
}

#[test]
fn test_display_round_trip() {
    let input = "not (name eq 'O''Brien' or age lt 21) and email ne null";
    let expr = parse_ok(input);
    let reparsed = parse_ok(&expr.to_string());
    assert_eq!(expr, reparsed);
}
