use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

/// Create a SQLite connection pool
///
/// Creates the database file (and its parent directory) on first run.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Creating database connection pool...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if let Some(parent) = options.clone().get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
