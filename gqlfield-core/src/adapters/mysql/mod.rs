//! MySQL adapter reading `information_schema.columns`.
//!
//! # Module Structure
//! - `connection`: connection string validation and connection setup
//! - `columns`: the column catalog query

pub mod columns;
pub mod connection;


use super::{ConnectionConfig, DatabaseAdapter};
use crate::Result;
use crate::models::{ColumnInfo, DatabaseType};
use async_trait::async_trait;
use sqlx::Connection;
use sqlx::MySqlConnection;
use tokio::sync::Mutex;

pub use connection::{parse_mysql_connection_config, validate_mysql_connection_string};

/// MySQL database adapter
pub struct MySqlAdapter {
    /// The one connection used for the catalog query; `None` once closed
    pub(crate) connection: Mutex<Option<MySqlConnection>>,
    /// Connection configuration parsed from the URL
    pub config: ConnectionConfig,
}

impl std::fmt::Debug for MySqlAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DatabaseAdapter for MySqlAdapter {
    async fn read_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        columns::read_columns(self, table).await
    }

    async fn close(&self) {
        if let Some(connection) = self.connection.lock().await.take()
            && let Err(e) = connection.close().await
        {
            tracing::debug!("Error while closing MySQL connection: {}", e);
        }
    }

    fn database_type(&self) -> DatabaseType {
        DatabaseType::MySQL
    }

    fn connection_config(&self) -> ConnectionConfig {
        self.config.clone()
    }
}
