//! Database module: models, dynamic query assembly, and the record gateway.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and the mutable field set
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `query.rs`: filter/sort/paginate query builder for the listing endpoint
//! - `store.rs`: single-statement CRUD operations over the pool

pub mod models;
pub mod query;
pub mod schema;
pub mod store;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use models::{CreditRecord, CreditRecordInput};
pub use query::ListParams;
pub use schema::SQLITE_INIT;
pub use store::{CreditStore, SqlitePool};

/// Open the pool for the configured database URL, creating the file on
/// first run.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
