//! GraphQL object type declaration rendering.
//!
//! Output targets the `graphql-go` API: one `graphql.NewObject` declaration
//! per table with a `graphql.Field` entry per column, in catalog order.

use crate::mapping::map_column_type;
use crate::models::ColumnInfo;
use crate::naming::{derive_type_name, snake_to_camel};
use crate::{GqlFieldError, Result};
use askama::Template;

/// Knobs for the code emitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Escape column comments so they always form a valid Go string literal.
    ///
    /// Off by default: comments are copied verbatim, and a comment containing
    /// `"` produces code that does not compile.
    pub escape_descriptions: bool,
}

impl EmitOptions {
    /// Sets whether column comments are escaped.
    pub const fn with_escape_descriptions(mut self, escape: bool) -> Self {
        self.escape_descriptions = escape;
        self
    }
}

struct FieldLine {
    name: String,
    label: &'static str,
    description: String,
}

#[derive(Template)]
#[template(path = "object_type.txt")]
struct ObjectTypeTemplate<'a> {
    name: &'a str,
    fields: &'a [FieldLine],
}

/// Renders the object type declaration for `table`.
///
/// Every column produces exactly one field line, including columns whose
/// storage type is not recognized (those get an empty `graphql.` type). An
/// empty column list renders an empty `Fields` block.
///
/// # Errors
/// Returns an error if no type name can be derived from `table` or the
/// template fails to render.
///
/// # Example
/// ```rust
/// use gqlfield_core::codegen::{EmitOptions, render_object_type};
/// use gqlfield_core::models::ColumnInfo;
///
/// let columns = vec![ColumnInfo::new("user_name", "varchar(50)", "name")];
/// let code = render_object_type("users", &columns, EmitOptions::default()).unwrap();
/// assert!(code.starts_with("var UserType = graphql.NewObject("));
/// assert!(code.contains("\"userName\": &graphql.Field{Type: graphql.String"));
/// ```
pub fn render_object_type(
    table: &str,
    columns: &[ColumnInfo],
    options: EmitOptions,
) -> Result<String> {
    let name = derive_type_name(table)?;

    let fields: Vec<FieldLine> = columns
        .iter()
        .map(|column| FieldLine {
            name: snake_to_camel(&column.name),
            label: map_column_type(&column.name, &column.storage_type).label(),
            description: if options.escape_descriptions {
                escape_go_string(&column.comment)
            } else {
                column.comment.clone()
            },
        })
        .collect();

    tracing::debug!(
        "Rendering {}Type with {} fields from table '{}'",
        name,
        fields.len(),
        table
    );

    let mut rendered = ObjectTypeTemplate {
        name: &name,
        fields: &fields,
    }
    .render()
    .map_err(|e| GqlFieldError::Render {
        context: format!("object type for table '{}'", table),
        source: e,
    })?;

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    Ok(rendered)
}

/// Escapes text for use inside a Go interpreted string literal.
pub fn escape_go_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
