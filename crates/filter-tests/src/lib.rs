#![allow(dead_code)]

use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};

pub mod utils;

/// Every connection to `sqlite::memory:` opens its own database, so the pool
/// is pinned to a single connection.
async fn sqlite_pool() -> Pool<Sqlite> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite")
}
