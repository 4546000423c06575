//! Core library for gqlfield.
//!
//! Reads one table's column metadata from a database catalog and renders a
//! `graphql-go` object type declaration for it:
//!
//! - [`adapters`]: per-backend catalog readers behind [`DatabaseAdapter`]
//! - [`mapping`]: storage type to GraphQL scalar classification
//! - [`naming`] and [`codegen`]: identifier transforms and the template
//!
//! # Example
//! ```rust
//! use gqlfield_core::{ColumnInfo, EmitOptions, render_object_type};
//!
//! let columns = vec![
//!     ColumnInfo::new("id", "int(11)", "PK"),
//!     ColumnInfo::new("user_name", "varchar(50)", "name"),
//! ];
//! let code = render_object_type("user_accounts", &columns, EmitOptions::default()).unwrap();
//! assert!(code.contains("Name: \"UserAccount\""));
//! ```

pub mod adapters;
pub mod codegen;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod models;
pub mod naming;

pub use adapters::{ConnectionConfig, DatabaseAdapter, create_adapter};
pub use codegen::{EmitOptions, render_object_type};
pub use error::{GqlFieldError, Result};
pub use logging::init_logging;
pub use mapping::map_column_type;
pub use models::{ColumnInfo, DatabaseType, FieldType};
