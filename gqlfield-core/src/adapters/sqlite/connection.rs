//! SQLite connection handling.
//!
//! # Connection Forms
//! - `sqlite:///abs/path.db`, `sqlite://./relative.db`, `sqlite:path.db`
//! - a bare path ending in `.db`, `.sqlite` or `.sqlite3`
//! - `sqlite::memory:` or `:memory:`
//!
//! File databases are opened read-only and never created.

use super::{ConnectionConfig, SqliteAdapter};
use crate::Result;
use crate::error::GqlFieldError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

impl SqliteAdapter {
    /// Opens a SQLite database.
    ///
    /// # Errors
    /// Returns a configuration error for malformed connection strings and a
    /// connection error if the file is missing or cannot be opened.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let config = parse_sqlite_connection_config(connection_string)?;
        let pool = create_sqlite_connection(connection_string, &config).await?;

        tracing::info!("Opened SQLite database {}", config);
        Ok(Self {
            pool,
            config,
            connection_string: connection_string.to_string(),
        })
    }

    /// Checks if the connection is to an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        is_memory_connection_string(&self.connection_string)
    }
}

/// Parses a SQLite connection string into a connection configuration.
///
/// # Errors
/// Returns error if the connection string is not a SQLite form
pub fn parse_sqlite_connection_config(connection_string: &str) -> Result<ConnectionConfig> {
    validate_sqlite_connection_string(connection_string)?;

    let mut config = ConnectionConfig::new("localhost".to_string())
        .with_database(extract_database_name(connection_string));
    config.read_only = !is_memory_connection_string(connection_string);

    Ok(config)
}

/// Validates SQLite connection string format.
///
/// # Errors
/// Returns error if the connection string is not a recognized SQLite form
pub fn validate_sqlite_connection_string(connection_string: &str) -> Result<()> {
    if connection_string == ":memory:"
        || connection_string.ends_with(".db")
        || connection_string.ends_with(".sqlite")
        || connection_string.ends_with(".sqlite3")
    {
        return Ok(());
    }

    if let Some(rest) = connection_string.strip_prefix("sqlite:")
        && !rest.is_empty()
        && rest != "//"
    {
        return Ok(());
    }

    Err(GqlFieldError::configuration(
        "Invalid SQLite connection string format: expected sqlite:// URL, file path, or :memory:",
    ))
}

fn is_memory_connection_string(connection_string: &str) -> bool {
    connection_string.contains(":memory:") || connection_string.contains("mode=memory")
}

fn extract_database_name(connection_string: &str) -> String {
    if is_memory_connection_string(connection_string) {
        return ":memory:".to_string();
    }

    let path = connection_string
        .strip_prefix("sqlite://")
        .or_else(|| connection_string.strip_prefix("sqlite:"))
        .unwrap_or(connection_string);
    let path = path.split('?').next().unwrap_or(path);

    path.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("main")
        .to_string()
}

async fn create_sqlite_connection(
    connection_string: &str,
    config: &ConnectionConfig,
) -> Result<SqlitePool> {
    let parsed = if connection_string == ":memory:" {
        SqliteConnectOptions::from_str("sqlite::memory:")
    } else if connection_string.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(connection_string)
    } else {
        Ok(SqliteConnectOptions::new().filename(connection_string))
    };

    let options = parsed
        .map_err(|e| {
            GqlFieldError::configuration(format!("Invalid SQLite connection string: {}", e))
        })?
        .read_only(config.read_only)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(config.connect_timeout)
        .connect_with(options)
        .await
        .map_err(GqlFieldError::connection_failed)
}
