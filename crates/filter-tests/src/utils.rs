use crate::sqlite_pool;
use filter_compiler::SqlFilter;
use query_builder::{
    ast::common::OrderDir, build::select::SelectBuilder, dialect::Sqlite as SqliteDialect, ident,
    render::render_sql, table_ref, value::Value,
};
use sqlx::{
    Pool, Row, Sqlite,
    query::Query,
    sqlite::{SqliteArguments, SqliteRow},
};
use tracing::info;

/// DDL for the `users` table shared by every scenario.
pub const USERS_TABLE_DDL: &str = r#"CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    age INTEGER NOT NULL,
    email TEXT
);"#;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: &'static str,
    pub surname: &'static str,
    pub age: i64,
    pub email: Option<&'static str>,
}

pub fn default_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John",
            surname: "Doe",
            age: 20,
            email: Some("test@test.com"),
        },
        User {
            id: 2,
            name: "Jane",
            surname: "Doe",
            age: 10,
            email: None,
        },
        User {
            id: 3,
            name: "Alice",
            surname: "Smith",
            age: 66,
            email: None,
        },
        User {
            id: 4,
            name: "Bob",
            surname: "Smith",
            age: 30,
            email: None,
        },
    ]
}

/// Creates the `users` table and inserts `users`.
pub async fn seed_users(users: &[User]) -> Pool<Sqlite> {
    let pool = sqlite_pool().await;
    sqlx::query(USERS_TABLE_DDL)
        .execute(&pool)
        .await
        .expect("create users table");

    for user in users {
        sqlx::query("INSERT INTO users (id, name, surname, age, email) VALUES (?, ?, ?, ?, ?)")
            .bind(user.id)
            .bind(user.name)
            .bind(user.surname)
            .bind(user.age)
            .bind(user.email)
            .execute(&pool)
            .await
            .expect("insert user");
    }

    pool
}

pub fn bind_values<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [Value],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for p in params {
        query = match p {
            Value::Int(i) => query.bind(*i),
            // SQLite integers are signed 64-bit; text keeps every digit and
            // numeric column affinity still applies to it
            Value::UInt(u) => query.bind(u.to_string()),
            Value::Float(f) => query.bind(*f),
            Value::String(s) => query.bind(s.as_str()),
            Value::Null => query.bind(None::<i64>),
        };
    }
    query
}

/// Parses and compiles `filter`, then returns the ids of the matching users
/// in ascending order.
pub async fn select_ids(pool: &Pool<Sqlite>, filter: &str) -> Vec<i64> {
    let tree = filter_syntax::parse(filter).expect("parse filter");
    let sql_filter = tree
        .as_ref()
        .map(SqlFilter::from_expression)
        .unwrap_or_default();

    let select = sql_filter
        .apply(
            SelectBuilder::new()
                .select(vec![ident!("id")])
                .from(table_ref!("users"), None),
        )
        .order_by(ident!("id"), Some(OrderDir::Asc))
        .build();

    let (sql, params) = render_sql(&select, &SqliteDialect);
    info!("Executing: {sql} with {} parameter(s)", params.len());

    let rows: Vec<SqliteRow> = bind_values(sqlx::query(&sql), &params)
        .fetch_all(pool)
        .await
        .expect("run filtered select");

    rows.iter().map(|row| row.get::<i64, _>("id")).collect()
}

pub async fn get_row_count(pool: &Pool<Sqlite>) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("count users");
    count
}

pub async fn assert_row_count(pool: &Pool<Sqlite>, expected: usize) {
    let count = get_row_count(pool).await;
    assert_eq!(
        count, expected as i64,
        "expected {expected} rows in users, found {count}"
    );
}
