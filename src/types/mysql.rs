//! MySQL / MariaDB type mapping.
//!
//! Works on `information_schema.COLUMNS.DATA_TYPE`. Enum and set columns need
//! the full `COLUMN_TYPE` to recover their option literals.

use super::enum_def::{parse_enum_definition, render_literal_union};
use super::{with_nullability, TypeError, TypeResult};

/// Map a MySQL declared type to its annotation type.
///
/// `column_type` is the raw type definition (`COLUMN_TYPE`); it is only read
/// for `enum` and `set` columns.
///
/// # Examples
/// ```
/// use rowtype::types::map_mysql_type;
///
/// assert_eq!(map_mysql_type("BIGINT", None, false).unwrap(), "int");
/// assert_eq!(map_mysql_type("varchar", None, true).unwrap(), "string|null");
/// assert_eq!(
///     map_mysql_type("enum", Some("enum('on','off')"), false).unwrap(),
///     r#""on"|"off""#
/// );
/// ```
pub fn map_mysql_type(
    data_type: &str,
    column_type: Option<&str>,
    nullable: bool,
) -> TypeResult<String> {
    let mapped = match data_type.to_lowercase().as_str() {
        "boolean" | "bit" => "bool".to_string(),
        "tinyint" | "smallint" | "mediumint" | "int" | "bigint" | "year" => "int".to_string(),
        "decimal" | "float" | "double" | "real" | "numeric" => "float".to_string(),
        "char" | "varchar" | "binary" | "varbinary" | "text" | "tinytext" | "mediumtext"
        | "longtext" | "blob" | "tinyblob" | "mediumblob" | "longblob" | "date" | "datetime"
        | "timestamp" | "time" => "string".to_string(),
        "set" | "enum" => {
            let definition = column_type.ok_or_else(|| TypeError::enum_parse(data_type))?;
            render_literal_union(&parse_enum_definition(definition)?)?
        }
        _ => return Err(TypeError::unknown(data_type)),
    };

    Ok(with_nullability(mapped, nullable))
}
