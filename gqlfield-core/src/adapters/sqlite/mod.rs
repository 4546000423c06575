//! SQLite adapter reading `pragma_table_info`.
//!
//! SQLite has no column comments, so every column's comment is empty, and
//! types are whatever the `CREATE TABLE` statement declared (`INTEGER`,
//! `VARCHAR(20)`, or nothing at all).

pub mod columns;
pub mod connection;


use super::{ConnectionConfig, DatabaseAdapter};
use crate::Result;
use crate::models::{ColumnInfo, DatabaseType};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub use connection::{parse_sqlite_connection_config, validate_sqlite_connection_string};

/// SQLite database adapter
pub struct SqliteAdapter {
    /// Connection pool (single connection)
    pub pool: SqlitePool,
    /// Connection configuration
    pub config: ConnectionConfig,
    /// Original connection string, kept to tell in-memory databases apart
    pub connection_string: String,
}

impl std::fmt::Debug for SqliteAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteAdapter")
            .field("config", &self.config)
            .field("is_in_memory", &self.is_in_memory())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DatabaseAdapter for SqliteAdapter {
    async fn read_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        columns::read_columns(self, table).await
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    fn database_type(&self) -> DatabaseType {
        DatabaseType::SQLite
    }

    fn connection_config(&self) -> ConnectionConfig {
        self.config.clone()
    }
}
