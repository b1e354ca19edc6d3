//! Opening the `SQLite` pool.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a pool on `database_url` (e.g. `sqlite:todohub.db` or
/// `sqlite::memory:`) and make sure the `todos` table exists.
///
/// The database file is created when missing.
///
/// # Errors
///
/// Returns [`StorageError`] when the URL is unusable, the connection fails,
/// or the table bootstrap fails.
pub async fn open(database_url: &str) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    MIGRATOR.run(&pool).await?;
    Ok(pool)
}
