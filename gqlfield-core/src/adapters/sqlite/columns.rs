//! Column catalog query for SQLite.

use super::SqliteAdapter;
use crate::Result;
use crate::error::GqlFieldError;
use crate::models::ColumnInfo;
use sqlx::Row;

const COLUMNS_QUERY: &str = "SELECT name, type FROM pragma_table_info(?) ORDER BY cid";

/// Reads a table's columns in declaration order. Comments are always empty.
pub(crate) async fn read_columns(adapter: &SqliteAdapter, table: &str) -> Result<Vec<ColumnInfo>> {
    let rows = sqlx::query(COLUMNS_QUERY)
        .bind(table)
        .fetch_all(&adapter.pool)
        .await
        .map_err(|e| {
            GqlFieldError::query_failed(format!("Failed to read columns for table '{}'", table), e)
        })?;

    tracing::debug!("Read {} columns for table '{}'", rows.len(), table);

    rows.iter()
        .map(|row| {
            let name: String = row.try_get("name").map_err(|e| {
                GqlFieldError::query_failed(format!("Failed to parse column name in '{}'", table), e)
            })?;
            let storage_type: Option<String> = row.try_get("type").map_err(|e| {
                GqlFieldError::query_failed(format!("Failed to parse type of column '{}'", name), e)
            })?;

            Ok(ColumnInfo {
                name,
                storage_type: storage_type.unwrap_or_default(),
                comment: String::new(),
            })
        })
        .collect()
}
