//! PostgreSQL type mapping.
//!
//! Works on `information_schema.columns.data_type`, which spells types out in
//! their SQL-standard form (`character varying`, `timestamp with time zone`).
//! User-defined types report `USER-DEFINED` and are not mapped.

use super::{with_nullability, TypeError, TypeResult};

/// Annotation type used for Postgres array columns.
pub const ARRAY_TYPE: &str = "list<scalar>";

/// Map a PostgreSQL declared type to its annotation type.
///
/// # Examples
/// ```
/// use rowtype::types::map_postgres_type;
///
/// assert_eq!(map_postgres_type("integer", false).unwrap(), "int");
/// assert_eq!(map_postgres_type("ARRAY", true).unwrap(), "list<scalar>|null");
/// ```
pub fn map_postgres_type(data_type: &str, nullable: bool) -> TypeResult<String> {
    let mapped = match data_type.to_lowercase().as_str() {
        "boolean" => "bool",
        "integer" | "bigint" | "smallint" => "int",
        "numeric" | "real" | "double precision" | "decimal" => "float",
        "character varying"
        | "varchar"
        | "character"
        | "char"
        | "text"
        | "date"
        | "time"
        | "timestamp"
        | "timestamp without time zone"
        | "timestamp with time zone"
        | "bytea"
        | "uuid"
        | "json"
        | "jsonb"
        | "xml"
        | "point"
        | "line"
        | "lseg"
        | "box"
        | "path"
        | "polygon"
        | "circle"
        | "bit"
        | "bit varying"
        | "interval"
        | "money"
        | "macaddr"
        | "inet"
        | "cidr"
        | "tsquery"
        | "tsvector" => "string",
        "array" => ARRAY_TYPE,
        _ => return Err(TypeError::unknown(data_type)),
    };

    Ok(with_nullability(mapped.to_string(), nullable))
}
