//! Column catalog query for PostgreSQL.

use super::PostgresAdapter;
use crate::Result;
use crate::error::GqlFieldError;
use crate::models::ColumnInfo;
use sqlx::Row;

// Restricted to schemas on the search path so same-named tables in other
// schemas do not leak in.
const COLUMNS_QUERY: &str = r#"
    SELECT
        c.column_name::text AS column_name,
        c.data_type::text AS column_type,
        COALESCE(col_description(pgc.oid, c.ordinal_position::int), '') AS column_comment
    FROM information_schema.columns c
    JOIN pg_namespace pgn ON pgn.nspname = c.table_schema
    JOIN pg_class pgc ON pgc.relname = c.table_name AND pgc.relnamespace = pgn.oid
    WHERE c.table_name = $1
    AND c.table_schema = ANY(current_schemas(false))
    ORDER BY c.ordinal_position
"#;

/// Reads a table's columns in ordinal order.
pub(crate) async fn read_columns(
    adapter: &PostgresAdapter,
    table: &str,
) -> Result<Vec<ColumnInfo>> {
    let mut guard = adapter.connection.lock().await;
    let connection = guard
        .as_mut()
        .ok_or_else(|| GqlFieldError::configuration("PostgreSQL connection already closed"))?;

    let rows = sqlx::query(COLUMNS_QUERY)
        .bind(table)
        .fetch_all(&mut *connection)
        .await
        .map_err(|e| {
            GqlFieldError::query_failed(format!("Failed to read columns for table '{}'", table), e)
        })?;

    tracing::debug!("Read {} columns for table '{}'", rows.len(), table);

    rows.iter()
        .map(|row| {
            let name: String = row.try_get("column_name").map_err(|e| {
                GqlFieldError::query_failed(format!("Failed to parse column name in '{}'", table), e)
            })?;
            let storage_type: String = row.try_get("column_type").map_err(|e| {
                GqlFieldError::query_failed(format!("Failed to parse type of column '{}'", name), e)
            })?;
            let comment: String = row.try_get("column_comment").map_err(|e| {
                GqlFieldError::query_failed(
                    format!("Failed to parse comment of column '{}'", name),
                    e,
                )
            })?;

            Ok(ColumnInfo {
                name,
                storage_type,
                comment,
            })
        })
        .collect()
}
