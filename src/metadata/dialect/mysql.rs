//! MySQL / MariaDB metadata source.
//!
//! MySQL has no schema level below the database, so only the database name
//! narrows the query.

use super::SchemaDialect;
use crate::metadata::connection::ColumnQuery;
use crate::metadata::types::Column;
use crate::types::{map_mysql_type, TypeResult};

/// MySQL metadata dialect.
#[derive(Debug, Clone, Copy)]
pub struct MySql;

impl SchemaDialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn columns_query(&self, database: Option<&str>, _schema: Option<&str>) -> ColumnQuery {
        let (condition, params) = match database {
            Some(name) => ("c.TABLE_SCHEMA = ?", vec![name.to_string()]),
            None => ("c.TABLE_SCHEMA = DATABASE()", Vec::new()),
        };

        let sql = format!(
            "SELECT c.TABLE_NAME, c.COLUMN_NAME, c.ORDINAL_POSITION, c.DATA_TYPE, \
             c.IS_NULLABLE, c.COLUMN_TYPE \
             FROM information_schema.COLUMNS c \
             WHERE {condition} \
             ORDER BY c.TABLE_NAME, c.ORDINAL_POSITION"
        );

        ColumnQuery { sql, params }
    }

    fn map_type(&self, column: &Column) -> TypeResult<String> {
        map_mysql_type(
            &column.data_type,
            column.column_type.as_deref(),
            column.is_nullable,
        )
    }
}
