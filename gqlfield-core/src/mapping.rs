//! Column storage type to GraphQL scalar classification.
//!
//! The rules are prefix based, so length and display-width suffixes such as
//! `(255)` or `(11) unsigned` never change the result.

use crate::models::FieldType;

/// Ordered prefix table; the first matching entry wins.
const PREFIX_RULES: &[(&str, FieldType)] = &[
    ("varchar", FieldType::String),
    ("char", FieldType::String),
    ("int", FieldType::Int),
    ("tinyint", FieldType::Int),
    ("float", FieldType::Float),
    ("time", FieldType::DateTime),
    ("date", FieldType::DateTime),
];

/// Classifies a column into a GraphQL field type.
///
/// A column literally named `id` is always an `ID`, whatever its storage
/// type. Otherwise the storage type is matched by prefix, ignoring ASCII
/// case and leading whitespace.
///
/// # Example
/// ```rust
/// use gqlfield_core::mapping::map_column_type;
/// use gqlfield_core::models::FieldType;
///
/// assert_eq!(map_column_type("id", "varchar(36)"), FieldType::Id);
/// assert_eq!(map_column_type("name", "varchar(255)"), FieldType::String);
/// assert_eq!(map_column_type("price", "decimal(10,2)"), FieldType::Unrecognized);
/// ```
pub fn map_column_type(column_name: &str, storage_type: &str) -> FieldType {
    if column_name == "id" {
        return FieldType::Id;
    }

    let normalized = storage_type.trim_start().to_ascii_lowercase();

    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| normalized.starts_with(*prefix))
        .map_or(FieldType::Unrecognized, |&(_, field_type)| field_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_id_column_overrides_storage_type() {
        assert_eq!(map_column_type("id", "int(11)"), FieldType::Id);
        assert_eq!(map_column_type("id", "varchar(36)"), FieldType::Id);
        assert_eq!(map_column_type("id", "blob"), FieldType::Id);
        assert_eq!(map_column_type("id", ""), FieldType::Id);
    }

    #[test]
    fn test_id_match_is_exact() {
        assert_eq!(map_column_type("ID", "int"), FieldType::Int);
        assert_eq!(map_column_type("user_id", "int(11)"), FieldType::Int);
        assert_eq!(map_column_type("uuid", "char(36)"), FieldType::String);
    }

    #[test]
    fn test_string_types() {
        assert_eq!(map_column_type("name", "varchar(255)"), FieldType::String);
        assert_eq!(map_column_type("code", "char(2)"), FieldType::String);
        // PostgreSQL reports `character varying`
        assert_eq!(
            map_column_type("title", "character varying"),
            FieldType::String
        );
    }

    #[test]
    fn test_integer_types() {
        assert_eq!(map_column_type("age", "int(11)"), FieldType::Int);
        assert_eq!(map_column_type("flag", "tinyint(1)"), FieldType::Int);
        assert_eq!(map_column_type("count", "int(10) unsigned"), FieldType::Int);
        assert_eq!(map_column_type("n", "integer"), FieldType::Int);
    }

    #[test]
    fn test_float_and_datetime_types() {
        assert_eq!(map_column_type("score", "float"), FieldType::Float);
        assert_eq!(map_column_type("created_at", "timestamp"), FieldType::DateTime);
        assert_eq!(map_column_type("starts", "time"), FieldType::DateTime);
        assert_eq!(map_column_type("born_on", "date"), FieldType::DateTime);
        assert_eq!(map_column_type("updated_at", "datetime"), FieldType::DateTime);
    }

    #[test]
    fn test_unrecognized_types() {
        assert_eq!(map_column_type("body", "text"), FieldType::Unrecognized);
        assert_eq!(map_column_type("total", "decimal(10,2)"), FieldType::Unrecognized);
        assert_eq!(map_column_type("big", "bigint(20)"), FieldType::Unrecognized);
        assert_eq!(map_column_type("small", "smallint(6)"), FieldType::Unrecognized);
        assert_eq!(map_column_type("ratio", "double"), FieldType::Unrecognized);
        assert_eq!(map_column_type("empty", ""), FieldType::Unrecognized);
    }

    #[test]
    fn test_postgres_data_type_names() {
        assert_eq!(map_column_type("n", "integer"), FieldType::Int);
        assert_eq!(map_column_type("s", "character varying"), FieldType::String);
        assert_eq!(
            map_column_type("at", "timestamp without time zone"),
            FieldType::DateTime
        );
        // prefix match, not a type-aware one
        assert_eq!(map_column_type("ttl", "interval"), FieldType::Int);
        assert_eq!(map_column_type("on", "boolean"), FieldType::Unrecognized);
    }

    #[test]
    fn test_case_insensitive_storage_type() {
        assert_eq!(map_column_type("n", "INTEGER"), FieldType::Int);
        assert_eq!(map_column_type("s", "VARCHAR(20)"), FieldType::String);
        assert_eq!(map_column_type("d", " DATETIME"), FieldType::DateTime);
    }

    proptest! {
        #[test]
        fn prop_length_suffix_does_not_change_mapping(
            len in 1u32..100_000,
            prefix in prop::sample::select(vec![
                "varchar", "char", "int", "tinyint", "float", "time", "date",
            ]),
        ) {
            let bare = map_column_type("col", prefix);
            let sized = map_column_type("col", &format!("{}({})", prefix, len));
            prop_assert_eq!(bare, sized);
            prop_assert_ne!(sized, FieldType::Unrecognized);
        }

        #[test]
        fn prop_id_always_maps_to_id(storage_type in ".*") {
            prop_assert_eq!(map_column_type("id", &storage_type), FieldType::Id);
        }
    }
}
