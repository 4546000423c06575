//! PostgreSQL connection setup.

use super::{ConnectionConfig, PostgresAdapter};
use crate::Result;
use crate::error::{GqlFieldError, redact_database_url};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;
use std::str::FromStr;
use tokio::sync::Mutex;
use url::Url;

const POSTGRES_DEFAULT_PORT: u16 = 5432;

impl PostgresAdapter {
    /// Connects to PostgreSQL and returns a ready adapter.
    ///
    /// # Errors
    /// Returns a configuration error for malformed URLs and a connection
    /// error if the server cannot be reached.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let config = parse_postgres_connection_config(connection_string)?;
        let connection = open_postgres_connection(connection_string, &config).await?;

        tracing::info!("Connected to PostgreSQL at {}", config);
        Ok(Self {
            connection: Mutex::new(Some(connection)),
            config,
        })
    }
}

/// Parses a PostgreSQL connection URL into a connection configuration.
///
/// # Errors
/// Returns error if the URL is invalid or fails validation
pub fn parse_postgres_connection_config(connection_string: &str) -> Result<ConnectionConfig> {
    let url = validate_postgres_connection_string(connection_string)?;
    let config = ConnectionConfig::from_url(&url, POSTGRES_DEFAULT_PORT);
    config.validate()?;
    Ok(config)
}

/// Validates the PostgreSQL connection URL format.
///
/// # Errors
/// Returns error if the URL cannot be parsed or has the wrong scheme
pub fn validate_postgres_connection_string(connection_string: &str) -> Result<Url> {
    let url = Url::parse(connection_string).map_err(|e| {
        GqlFieldError::configuration(format!(
            "Invalid PostgreSQL connection string format: {}",
            e
        ))
    })?;

    if url.scheme() != "postgres" && url.scheme() != "postgresql" {
        return Err(GqlFieldError::configuration(
            "Connection string must use postgres:// or postgresql:// scheme",
        ));
    }

    Ok(url)
}

/// Opens the single connection, failing on the first error.
///
/// There is no retry loop: a refused or unreachable server surfaces the
/// driver's own error, and a server that never answers is cut off after
/// `connect_timeout`.
async fn open_postgres_connection(
    connection_string: &str,
    config: &ConnectionConfig,
) -> Result<PgConnection> {
    let options = PgConnectOptions::from_str(connection_string).map_err(|e| {
        GqlFieldError::configuration(format!("Invalid PostgreSQL connection options: {}", e))
    })?;

    tracing::debug!(
        "Opening PostgreSQL connection to {}",
        redact_database_url(connection_string)
    );

    tokio::time::timeout(config.connect_timeout, options.connect())
        .await
        .map_err(|_| {
            GqlFieldError::connection_failed(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!(
                    "no response within {}s",
                    config.connect_timeout.as_secs()
                ),
            ))
        })?
        .map_err(GqlFieldError::connection_failed)
}
