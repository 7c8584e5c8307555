use filter_compiler::{FilterCompiler, SqlFilter, SqlFilterCompiler, compile, where_clause};
use filter_syntax::{Expression, parse};
use query_builder::{
    ast::expr::Expr,
    dialect::{Dialect, MySql, Postgres, Sqlite},
    render::render_sql,
    value::Value,
};
use std::sync::Arc;

fn parse_filter(input: &str) -> Expression {
    parse(input)
        .expect("valid filter")
        .expect("non-empty filter")
}

fn render(input: &str) -> (String, Vec<Value>) {
    let compiled = compile(&parse_filter(input)).expect("expressible filter");
    render_sql(&compiled, &Sqlite)
}

#[test]
fn empty_filter_has_no_predicate() {
    for input in ["", "   ", "\n\t"] {
        let tree = parse(input).unwrap();
        assert!(tree.is_none());
        assert_eq!(where_clause(tree.as_ref()), None);
    }
}

#[test]
fn renders_reference_filters() {
    let cases: &[(&str, &str, Vec<Value>)] = &[
        ("name eq 'John'", "`name` = ?", vec![Value::from("John")]),
        ("not name eq 'John'", "`name` <> ?", vec![Value::from("John")]),
        (
            "age gt 18 and age lt 65",
            "`age` > ? AND `age` < ?",
            vec![Value::Int(18), Value::Int(65)],
        ),
        (
            "name eq 'John' or age lt 21",
            "(`name` = ? OR `age` < ?)",
            vec![Value::from("John"), Value::Int(21)],
        ),
        ("email eq null", "`email` IS NULL", vec![]),
        ("email ne null", "`email` IS NOT NULL", vec![]),
        ("age gt otherAge", "`age` > `otherAge`", vec![]),
        (
            "age le 18 or age gt 65",
            "(`age` <= ? OR `age` > ?)",
            vec![Value::Int(18), Value::Int(65)],
        ),
    ];

    for (input, sql, params) in cases {
        let (rendered, bound) = render(input);
        assert_eq!(&rendered, sql, "filter: {input}");
        assert_eq!(&bound, params, "filter: {input}");
    }
}

#[test]
fn precedence_survives_rendering() {
    let (sql, params) = render("a eq 1 or b eq 2 and not c eq 3");
    assert_eq!(sql, "(`a` = ? OR (`b` = ? AND `c` <> ?))");
    assert_eq!(params, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    let (sql, _) = render("(a eq 1 or b eq 2) and c eq 3");
    assert_eq!(sql, "(`a` = ? OR `b` = ?) AND `c` = ?");

    let (sql, _) = render("not (a eq 1 and b eq 2)");
    assert_eq!(sql, "NOT (`a` = ? AND `b` = ?)");

    let (sql, _) = render("(a eq 1 and b eq 2) or (c eq 3 and d eq 4)");
    assert_eq!(sql, "((`a` = ? AND `b` = ?) OR (`c` = ? AND `d` = ?))");
}

#[test]
fn string_values_are_never_interpolated() {
    let payloads = [
        "DELETE * FROM users;",
        "drop table users",
        "x' OR '1'='1",
        "1; UPDATE users SET age = 0",
    ];

    for payload in payloads {
        let input = format!("name eq '{}'", payload.replace('\'', "''"));
        let compiled = compile(&parse_filter(&input)).unwrap();

        for dialect in [&Sqlite as &dyn Dialect, &MySql, &Postgres] {
            let (sql, params) = render_sql(&compiled, dialect);
            assert!(!sql.contains(payload), "{payload} leaked into {sql}");
            assert_eq!(params, vec![Value::from(payload)]);
        }
    }
}

#[test]
fn compiling_twice_is_structurally_equal() {
    let tree = parse_filter("not (name eq 'John' or age ge 30) and email ne null");
    assert_eq!(compile(&tree), compile(&tree));
    assert_eq!(
        SqlFilterCompiler::compile(&tree),
        SqlFilter::from_expression(&tree)
    );
}

#[test]
fn integer_literals_pick_the_narrowest_kind() {
    let (_, params) = render("age eq 18");
    assert_eq!(params, vec![Value::Int(18)]);

    let (_, params) = render("id eq 18446744073709551615");
    assert_eq!(params, vec![Value::UInt(u64::MAX)]);

    let (_, params) = render("id eq 18446744073709551616");
    assert_eq!(params, vec![Value::Float(18446744073709551616.0)]);
}

#[test]
fn long_chains_compile_on_the_default_stack() {
    const TERMS: usize = 50_000;

    let cases = [
        ("and", "`n` = ? AND `n` = ?"),
        ("or", "(`n` = ? OR `n` = ?"),
    ];

    for (keyword, expected_sql) in cases {
        let input = vec!["n eq 1"; TERMS].join(&format!(" {keyword} "));
        let tree = parse_filter(&input);
        let compiled = compile(&tree).expect("expressible chain");

        let children = match &compiled {
            Expr::And(children) | Expr::Or(children) => children,
            other => panic!("expected a flat {keyword} chain, got {other:?}"),
        };
        assert_eq!(children.len(), TERMS);

        let (sql, params) = render_sql(&compiled, &Sqlite);
        assert!(sql.starts_with(expected_sql), "{keyword}: {}", &sql[..40]);
        assert_eq!(params.len(), TERMS);
    }
}

#[test]
fn shared_tree_compiles_from_many_threads() {
    let tree = Arc::new(parse_filter(
        "(name eq 'John' or surname ne 'Doe') and not age lt 18 and email ne null",
    ));
    let expected = compile(&tree);

    let results = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tree = Arc::clone(&tree);
                s.spawn(move || compile(&tree))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert!(results.iter().all(|r| *r == expected));
}
