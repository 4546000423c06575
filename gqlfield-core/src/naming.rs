//! Identifier transforms used by the code emitter.

use crate::{GqlFieldError, Result};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Matches an underscore followed by the letter it capitalizes.
#[allow(clippy::expect_used)]
fn snake_segment() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("_([a-z])").expect("Invalid snake segment pattern"))
}

/// Converts `snake_case` to `camelCase`.
///
/// Only an underscore followed by a lowercase ASCII letter is folded, so
/// `a_1` and `a_B` pass through unchanged, as do leading capitals.
///
/// # Example
/// ```rust
/// use gqlfield_core::naming::snake_to_camel;
///
/// assert_eq!(snake_to_camel("user_accounts"), "userAccounts");
/// assert_eq!(snake_to_camel("created_at"), "createdAt");
/// ```
pub fn snake_to_camel(input: &str) -> String {
    snake_segment()
        .replace_all(input, |caps: &Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// Derives the GraphQL object type name from a table name.
///
/// The table name is camel-cased, its final character dropped (turning a
/// plural `user_accounts` into `UserAccount`), and the first character
/// upper-cased. The drop is unconditional: `user_info` becomes `UserInf`.
///
/// # Errors
/// Returns a configuration error when nothing is left after the drop, i.e.
/// for empty and single-character table names.
pub fn derive_type_name(table: &str) -> Result<String> {
    let camel = snake_to_camel(table);

    let mut chars = camel.chars();
    chars.next_back();
    let trimmed = chars.as_str();

    let mut rest = trimmed.chars();
    let Some(first) = rest.next() else {
        return Err(GqlFieldError::configuration(format!(
            "Cannot derive a type name from table name '{}'",
            table
        )));
    };

    Ok(first.to_uppercase().chain(rest).collect())
}
