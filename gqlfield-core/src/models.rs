//! Data types shared by the metadata reader and the code emitter.

use std::fmt;

/// Metadata for a single table column, as reported by the database catalog.
///
/// Adapters return these in ordinal position order and nothing downstream
/// reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name as declared (usually snake_case)
    pub name: String,
    /// Raw storage type, e.g. `varchar(255)` or `int(11)`
    pub storage_type: String,
    /// Column comment; empty when the column has none
    pub comment: String,
}

impl ColumnInfo {
    /// Creates a column description from its three catalog fields.
    pub fn new(
        name: impl Into<String>,
        storage_type: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            storage_type: storage_type.into(),
            comment: comment.into(),
        }
    }
}

/// GraphQL scalar a column is exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `graphql.ID`
    Id,
    /// `graphql.String`
    String,
    /// `graphql.Int`
    Int,
    /// `graphql.Float`
    Float,
    /// `graphql.DateTime`
    DateTime,
    /// No recognized mapping; rendered as an empty annotation
    Unrecognized,
}

impl FieldType {
    /// Label appended to `graphql.` in generated code.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::DateTime => "DateTime",
            Self::Unrecognized => "",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Database engines gqlfield can read column metadata from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseType {
    /// MySQL / MariaDB (`information_schema.columns`)
    MySQL,
    /// PostgreSQL (`information_schema.columns` + `col_description`)
    PostgreSQL,
    /// SQLite (`pragma_table_info`)
    SQLite,
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MySQL => write!(f, "MySQL"),
            Self::PostgreSQL => write!(f, "PostgreSQL"),
            Self::SQLite => write!(f, "SQLite"),
        }
    }
}
