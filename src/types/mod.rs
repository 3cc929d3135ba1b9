//! Column type mapping.
//!
//! Maps a database column's declared type to the type expression used in the
//! generated annotations. The MySQL and PostgreSQL families have separate
//! tables: they share no type names and quote enum literals differently.
//!
//! | Target   | Meaning                                 |
//! |----------|-----------------------------------------|
//! | `bool`   | boolean columns                         |
//! | `int`    | integer columns                         |
//! | `float`  | decimal and floating point columns      |
//! | `string` | text, binary, temporal and misc columns |
//! | literals | `"a"\|"b"` unions for MySQL enum/set    |
//!
//! Nullable columns get [`NULLABLE_SUFFIX`] appended.

pub mod enum_def;
pub mod mysql;
pub mod postgres;

pub use enum_def::{parse_enum_definition, render_literal_union};
pub use mysql::map_mysql_type;
pub use postgres::map_postgres_type;

/// Suffix appended to the mapped type of a nullable column.
pub const NULLABLE_SUFFIX: &str = "|null";

/// Errors raised while mapping a column type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("Unknown type: {type_name}")]
    UnknownType { type_name: String },

    #[error("Can't parse enum definition: {definition}")]
    EnumParse { definition: String },
}

impl TypeError {
    pub(crate) fn unknown(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    pub(crate) fn enum_parse(definition: impl Into<String>) -> Self {
        Self::EnumParse {
            definition: definition.into(),
        }
    }
}

pub type TypeResult<T> = Result<T, TypeError>;

/// Append the nullable marker when needed.
pub(crate) fn with_nullability(mut mapped: String, nullable: bool) -> String {
    if nullable {
        mapped.push_str(NULLABLE_SUFFIX);
    }
    mapped
}
