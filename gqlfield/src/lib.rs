//! gqlfield command-line front end.
//!
//! Parses arguments, merges the optional settings file, then reads the
//! table's columns and renders the object type through `gqlfield-core`.

pub mod cli;
pub mod settings;

pub use cli::Cli;
pub use settings::{ResolvedOptions, Settings, load_settings, resolve};

use gqlfield_core::adapters::redact_database_url;
use gqlfield_core::{DatabaseAdapter, create_adapter, render_object_type};
use tracing::{debug, info, warn};

/// Reads the columns of the configured table and renders its object type.
///
/// The connection is closed before rendering; nothing is written to the
/// database.
///
/// # Errors
/// Returns an error if the connection cannot be opened, the catalog query
/// fails, or no type name can be derived from the table name.
pub async fn generate(options: &ResolvedOptions) -> gqlfield_core::Result<String> {
    info!(
        "Reading columns of '{}' from {}",
        options.table,
        redact_database_url(&options.database)
    );

    let adapter = create_adapter(&options.database).await?;
    debug!(
        "Using {} adapter for {}",
        adapter.database_type(),
        adapter.connection_config()
    );
    let columns = adapter.read_columns(&options.table).await;
    adapter.close().await;
    let columns = columns?;

    debug!("Read {} columns from '{}'", columns.len(), options.table);
    if columns.is_empty() {
        warn!("Table '{}' has no columns; it may not exist", options.table);
    }

    render_object_type(&options.table, &columns, options.emit)
}

/// Runs one invocation end to end and returns the generated code.
///
/// # Errors
/// Returns an error for settings, connection, query, or rendering failures.
pub async fn run(cli: &Cli) -> anyhow::Result<String> {
    let settings = load_settings(cli.config.as_deref())?;
    let options = resolve(cli, settings)?;
    Ok(generate(&options).await?)
}
