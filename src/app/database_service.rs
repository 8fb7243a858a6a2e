//! The storage handle shared by every data-access call.
//!
//! One `DatabaseService` is created at startup, handed to the HTTP layer behind an `Arc`,
//! and closed on shutdown. The schema is expected to exist already; this module only
//! connects to it and checks that it looks complete.

use crate::storage::DatabaseError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

/// Tables the data-access layer reads from or writes to.
pub const EXPECTED_TABLES: &[&str] = &[
    "products",
    "categories",
    "products_categories",
    "manufacturers",
    "customers",
    "orders",
    "order_details",
    "reviews",
    "shipping_methods",
];

pub struct DatabaseService {
    pool: SqlitePool,
}

impl DatabaseService {
    /// Connects to an existing SQLite database.
    ///
    /// `database_url` may be a `sqlite:` URL or a plain file path. Foreign keys are switched on
    /// for every pooled connection so cascading deletes declared by the schema take effect.
    pub async fn connect(database_url: &str) -> Result<Self, DatabaseError> {
        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)?
        } else {
            SqliteConnectOptions::new().filename(database_url)
        };
        let options = options.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        tracing::info!(database = %database_url, "connected to database");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Returns the entries of `EXPECTED_TABLES` that are not present in the database.
    pub async fn missing_tables(&self) -> Result<Vec<&'static str>, DatabaseError> {
        let present: Vec<String> =
            sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table'")
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .filter_map(|r| r.try_get::<String, _>("name").ok())
                .collect();

        Ok(EXPECTED_TABLES
            .iter()
            .copied()
            .filter(|t| !present.iter().any(|p| p == t))
            .collect())
    }

    /// Names of triggers on `products` that write to `products_categories`.
    ///
    /// Such a trigger adds its own join row on every insert, so a product created with a
    /// category would end up with two.
    pub async fn join_row_triggers(&self) -> Result<Vec<String>, DatabaseError> {
        let names = sqlx::query_scalar(
            "SELECT name FROM sqlite_master
             WHERE type = 'trigger' AND tbl_name = 'products'
               AND sql LIKE '%products_categories%'
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    /// Closes every pooled connection. Further queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database connections closed");
    }
}
