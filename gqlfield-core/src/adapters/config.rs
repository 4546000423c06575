//! Database connection configuration.
//!
//! This struct intentionally does NOT store passwords. It is derived from the
//! connection string for logging and for scoping catalog queries; the
//! connection string itself is handed straight to the driver.

use std::fmt;
use std::time::Duration;
use url::Url;

/// Configuration for a single metadata-reading connection.
///
/// # Example
/// ```rust
/// use gqlfield_core::adapters::ConnectionConfig;
///
/// let config = ConnectionConfig::new("localhost".to_string())
///     .with_port(3306)
///     .with_database("app".to_string());
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.to_string(), "ConnectionConfig(localhost:3306/app)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Database host address
    pub host: String,
    /// Optional port number
    pub port: Option<u16>,
    /// Optional database (MySQL schema) name
    pub database: Option<String>,
    /// Optional username (password handled by the driver only)
    pub username: Option<String>,
    /// How long to wait for the connection to open
    pub connect_timeout: Duration,
    /// Whether to open the connection read-only where the backend allows it
    pub read_only: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: None,
            database: None,
            username: None,
            connect_timeout: Duration::from_secs(30),
            read_only: true,
        }
    }
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConnectionConfig({}{}{})",
            self.host,
            self.port.map_or_else(String::new, |p| format!(":{}", p)),
            self.database
                .as_ref()
                .map_or_else(String::new, |db| format!("/{}", db))
        )
    }
}

impl ConnectionConfig {
    /// Creates a configuration for `host` with default timeouts.
    pub fn new(host: String) -> Self {
        Self {
            host,
            ..Self::default()
        }
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the database name.
    pub fn with_database(mut self, database: String) -> Self {
        self.database = Some(database);
        self
    }

    /// Sets the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Builds a configuration from a hierarchical connection URL.
    ///
    /// Recognizes the `connect_timeout` query parameter (seconds, 1..=300);
    /// out-of-range or malformed values are ignored.
    pub fn from_url(url: &Url, default_port: u16) -> Self {
        let mut config = Self::new(url.host_str().unwrap_or("localhost").to_string())
            .with_port(url.port().unwrap_or(default_port));

        let database = url.path().trim_start_matches('/');
        if !database.is_empty() {
            config = config.with_database(database.to_string());
        }

        if !url.username().is_empty() {
            config = config.with_username(url.username().to_string());
        }

        for (key, value) in url.query_pairs() {
            if key == "connect_timeout"
                && let Ok(secs) = value.parse::<u64>()
                && (1..=300).contains(&secs)
            {
                config.connect_timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Validates connection configuration parameters.
    ///
    /// # Errors
    /// Returns error if configuration values are invalid
    pub fn validate(&self) -> crate::Result<()> {
        if self.host.is_empty() {
            return Err(crate::error::GqlFieldError::configuration(
                "host cannot be empty",
            ));
        }

        if self.port == Some(0) {
            return Err(crate::error::GqlFieldError::configuration(
                "port must be greater than 0",
            ));
        }

        if self.connect_timeout.is_zero() {
            return Err(crate::error::GqlFieldError::configuration(
                "connect_timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}
