//! MySQL connection setup.

use super::{ConnectionConfig, MySqlAdapter};
use crate::Result;
use crate::error::{GqlFieldError, redact_database_url};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::ConnectOptions;
use std::str::FromStr;
use tokio::sync::Mutex;
use url::Url;

const MYSQL_DEFAULT_PORT: u16 = 3306;

impl MySqlAdapter {
    /// Connects to MySQL and returns a ready adapter.
    ///
    /// The connection is opened eagerly so that an unreachable server or bad
    /// credentials surface here, before any query runs.
    ///
    /// # Errors
    /// Returns a configuration error for malformed URLs and a connection
    /// error if the server cannot be reached.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let config = parse_mysql_connection_config(connection_string)?;
        let connection = open_mysql_connection(connection_string, &config).await?;

        tracing::info!("Connected to MySQL at {}", config);
        Ok(Self {
            connection: Mutex::new(Some(connection)),
            config,
        })
    }
}

/// Parses a MySQL connection URL into a connection configuration.
///
/// # Errors
/// Returns error if the URL is invalid or fails validation
pub fn parse_mysql_connection_config(connection_string: &str) -> Result<ConnectionConfig> {
    let url = validate_mysql_connection_string(connection_string)?;

    let config = ConnectionConfig::from_url(&url, MYSQL_DEFAULT_PORT);
    if let Some(database) = &config.database
        && database.len() > 64
    {
        return Err(GqlFieldError::configuration(
            "Database name too long: maximum 64 characters",
        ));
    }

    config.validate()?;
    Ok(config)
}

/// Validates the MySQL connection URL format.
///
/// # Errors
/// Returns error if the URL cannot be parsed, has the wrong scheme, or names
/// no host
pub fn validate_mysql_connection_string(connection_string: &str) -> Result<Url> {
    let url = Url::parse(connection_string).map_err(|e| {
        GqlFieldError::configuration(format!("Invalid MySQL connection string format: {}", e))
    })?;

    if url.scheme() != "mysql" {
        return Err(GqlFieldError::configuration(
            "Connection string must use mysql:// scheme",
        ));
    }

    if url.host_str().is_none() {
        return Err(GqlFieldError::configuration(
            "Connection string must specify a host",
        ));
    }

    Ok(url)
}

/// Opens the single connection, failing on the first error.
///
/// There is no retry loop: a refused or unreachable server surfaces the
/// driver's own error, and a server that never answers is cut off after
/// `connect_timeout`.
async fn open_mysql_connection(
    connection_string: &str,
    config: &ConnectionConfig,
) -> Result<MySqlConnection> {
    let options = MySqlConnectOptions::from_str(connection_string).map_err(|e| {
        GqlFieldError::configuration(format!("Invalid MySQL connection options: {}", e))
    })?;

    tracing::debug!(
        "Opening MySQL connection to {}",
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
