//! PostgreSQL adapter reading `information_schema.columns`.
//!
//! PostgreSQL has no `column_type` with length suffixes; the adapter reports
//! `data_type` (`integer`, `character varying`, `timestamp without time
//! zone`, ...) and the prefix rules apply to those names as-is. That has
//! consequences MySQL never hits: `interval` starts with `int` and becomes
//! `Int`, while `bigint`, `text` and `boolean` match nothing.
//! Comments come from `col_description`.

pub mod columns;
pub mod connection;

use super::{ConnectionConfig, DatabaseAdapter};
use crate::Result;
use crate::models::{ColumnInfo, DatabaseType};
use async_trait::async_trait;
use sqlx::Connection;
use sqlx::PgConnection;
use tokio::sync::Mutex;

pub use connection::{parse_postgres_connection_config, validate_postgres_connection_string};

/// PostgreSQL database adapter
pub struct PostgresAdapter {
    /// The one connection used for the catalog query; `None` once closed
    pub(crate) connection: Mutex<Option<PgConnection>>,
    /// Connection configuration parsed from the URL
    pub config: ConnectionConfig,
}

impl std::fmt::Debug for PostgresAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DatabaseAdapter for PostgresAdapter {
    async fn read_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        columns::read_columns(self, table).await
    }

    async fn close(&self) {
        if let Some(connection) = self.connection.lock().await.take()
            && let Err(e) = connection.close().await
        {
            tracing::debug!("Error while closing PostgreSQL connection: {}", e);
        }
    }

    fn database_type(&self) -> DatabaseType {
        DatabaseType::PostgreSQL
    }

    fn connection_config(&self) -> ConnectionConfig {
        self.config.clone()
    }
}
