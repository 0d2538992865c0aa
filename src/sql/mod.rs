//! SQLite database operations for superheroes.
//!
//! This module provides functions for interacting with the SQLite database,
//! organized by table.  Every operation takes an open transaction; callers commit
//! on success and drop the transaction (rolling it back) on error.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::errors::DataStoreError;

/// Hero operations.
pub mod hero;

/// Hero power operations, including the joined views used by the API.
pub mod hero_power;

/// Power operations.
pub mod power;

/// Migrations embedded at compile time from the `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection string used when neither a flag nor `DATABASE_URL` names a database.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://superheroes.db";

/// Opens a pool against `database_url` and brings the schema up to date.
///
/// The database file is created when missing and foreign key enforcement is switched
/// on for every connection, so deleting a hero or power cascades to its hero powers.
/// In-memory databases are pinned to a single long-lived connection because the
/// database disappears with the last connection.
pub async fn open_pool(database_url: &str) -> Result<SqlitePool, DataStoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new();
    if is_in_memory(database_url) {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    migrate(&pool).await?;
    Ok(pool)
}

/// Applies any pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DataStoreError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
/// Test utilities for SQLite database operations.
pub mod tests {
    use sqlx::SqlitePool;

    /// Creates a fresh, fully migrated in-memory database for one test.
    pub async fn setup_test_db() -> SqlitePool {
        super::open_pool("sqlite::memory:")
            .await
            .expect("Failed to open test database")
    }

    #[tokio::test]
    async fn migrations_create_tables() {
        let pool = setup_test_db().await;
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["hero_powers", "heroes", "powers"]);
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let pool = setup_test_db().await;
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let pool = setup_test_db().await;
        super::migrate(&pool).await.unwrap();
    }

    #[test]
    fn in_memory_detection() {
        assert!(super::is_in_memory("sqlite::memory:"));
        assert!(super::is_in_memory("sqlite://file:test?mode=memory&cache=shared"));
        assert!(!super::is_in_memory("sqlite://superheroes.db"));
    }
}
