//! Column catalog query for MySQL.

use super::MySqlAdapter;
use crate::Result;
use crate::error::GqlFieldError;
use crate::models::ColumnInfo;
use sqlx::Row;
use sqlx::mysql::MySqlRow;

// information_schema columns come back as VARBINARY on MySQL 8.0+; the casts
// keep them decodable as strings.
const COLUMNS_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR) AS column_name,
        CAST(COLUMN_TYPE AS CHAR) AS column_type,
        CAST(COLUMN_COMMENT AS CHAR) AS column_comment
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

const SCOPED_COLUMNS_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR) AS column_name,
        CAST(COLUMN_TYPE AS CHAR) AS column_type,
        CAST(COLUMN_COMMENT AS CHAR) AS column_comment
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_NAME = ?
    AND TABLE_SCHEMA = ?
    ORDER BY ORDINAL_POSITION
"#;

/// Reads a table's columns, scoped to the connected database when the URL
/// names one.
pub(crate) async fn read_columns(adapter: &MySqlAdapter, table: &str) -> Result<Vec<ColumnInfo>> {
    let query = match adapter.config.database.as_deref() {
        Some(database) => sqlx::query(SCOPED_COLUMNS_QUERY).bind(table).bind(database),
        None => sqlx::query(COLUMNS_QUERY).bind(table),
    };

    let mut guard = adapter.connection.lock().await;
    let connection = guard
        .as_mut()
        .ok_or_else(|| GqlFieldError::configuration("MySQL connection already closed"))?;

    let rows = query.fetch_all(&mut *connection).await.map_err(|e| {
        GqlFieldError::query_failed(format!("Failed to read columns for table '{}'", table), e)
    })?;

    tracing::debug!("Read {} columns for table '{}'", rows.len(), table);

    rows.iter().map(|row| column_from_row(row, table)).collect()
}

fn column_from_row(row: &MySqlRow, table: &str) -> Result<ColumnInfo> {
    let name: String = row.try_get("column_name").map_err(|e| {
        GqlFieldError::query_failed(format!("Failed to parse column name in '{}'", table), e)
    })?;
    let storage_type: String = row.try_get("column_type").map_err(|e| {
        GqlFieldError::query_failed(format!("Failed to parse type of column '{}'", name), e)
    })?;
    let comment: Option<String> = row.try_get("column_comment").map_err(|e| {
        GqlFieldError::query_failed(format!("Failed to parse comment of column '{}'", name), e)
    })?;

    Ok(ColumnInfo {
        name,
        storage_type,
        comment: comment.unwrap_or_default(),
    })
}
