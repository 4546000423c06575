//! SQLite column reading and end-to-end generation tests.
//!
//! SQLite runs in-process, so these need no containers.

#![cfg(feature = "sqlite")]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use gqlfield_core::{
    DatabaseAdapter, EmitOptions, GqlFieldError, Result, adapters::create_adapter,
    adapters::sqlite::SqliteAdapter, models::DatabaseType, render_object_type,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

async fn create_memory_adapter() -> Result<SqliteAdapter> {
    SqliteAdapter::new("sqlite::memory:").await
}

async fn create_user_accounts(adapter: &SqliteAdapter) {
    sqlx::query(
        "CREATE TABLE user_accounts (
            id INTEGER PRIMARY KEY,
            user_name VARCHAR(50) NOT NULL,
            age INT,
            score FLOAT,
            balance DECIMAL(10, 2),
            created_at DATETIME
        )",
    )
    .execute(&adapter.pool)
    .await
    .expect("Failed to create user_accounts");
}

#[tokio::test]
async fn test_sqlite_connection() -> Result<()> {
    let adapter = create_memory_adapter().await?;
    assert_eq!(adapter.database_type(), DatabaseType::SQLite);
    assert!(adapter.is_in_memory());
    Ok(())
}

#[tokio::test]
async fn test_read_columns_after_close_fails() -> Result<()> {
    let adapter = create_memory_adapter().await?;
    adapter.close().await;

    let result = adapter.read_columns("user_accounts").await;
    assert!(matches!(result, Err(GqlFieldError::Query { .. })));
    Ok(())
}

#[tokio::test]
async fn test_read_columns_in_declaration_order() -> Result<()> {
    let adapter = create_memory_adapter().await?;
    create_user_accounts(&adapter).await;

    let columns = adapter.read_columns("user_accounts").await?;
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(
        names,
        ["id", "user_name", "age", "score", "balance", "created_at"]
    );
    assert_eq!(columns[1].storage_type, "VARCHAR(50)");
    assert!(columns.iter().all(|c| c.comment.is_empty()));
    Ok(())
}

#[tokio::test]
async fn test_read_columns_missing_table_is_empty() -> Result<()> {
    let adapter = create_memory_adapter().await?;

    let columns = adapter.read_columns("does_not_exist").await?;
    assert!(columns.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_generate_from_sqlite_table() -> Result<()> {
    let adapter = create_memory_adapter().await?;
    create_user_accounts(&adapter).await;

    let columns = adapter.read_columns("user_accounts").await?;
    let code = render_object_type("user_accounts", &columns, EmitOptions::default())?;

    let expected = "var UserAccountType = graphql.NewObject(graphql.ObjectConfig{
\tName: \"UserAccount\",
\tFields: graphql.Fields{
\t\t\"id\": &graphql.Field{Type: graphql.ID, Description: \"\"},
\t\t\"userName\": &graphql.Field{Type: graphql.String, Description: \"\"},
\t\t\"age\": &graphql.Field{Type: graphql.Int, Description: \"\"},
\t\t\"score\": &graphql.Field{Type: graphql.Float, Description: \"\"},
\t\t\"balance\": &graphql.Field{Type: graphql., Description: \"\"},
\t\t\"createdAt\": &graphql.Field{Type: graphql.DateTime, Description: \"\"},
\t},
})
";
    assert_eq!(code, expected);
    Ok(())
}

#[tokio::test]
async fn test_open_file_database_read_only() -> Result<()> {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.db");

    // Seed the file with a writable connection first.
    let seed = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true),
        )
        .await
        .expect("Failed to create database file");
    sqlx::query("CREATE TABLE tags (id INTEGER, label CHAR(16))")
        .execute(&seed)
        .await
        .expect("Failed to create tags");
    seed.close().await;

    let adapter = create_adapter(path.to_str().unwrap()).await?;
    assert_eq!(adapter.database_type(), DatabaseType::SQLite);
    assert!(adapter.connection_config().read_only);

    let columns = adapter.read_columns("tags").await?;
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[1].name, "label");

    adapter.close().await;
    Ok(())
}

#[tokio::test]
async fn test_missing_database_file_is_connection_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.db");

    let result = create_adapter(path.to_str().unwrap()).await;
    assert!(matches!(
        result,
        Err(gqlfield_core::GqlFieldError::Connection { .. })
    ));
}
