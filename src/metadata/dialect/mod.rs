//! Source database dialects.
//!
//! Each dialect implements [`SchemaDialect`] to handle its metadata query and
//! its type vocabulary:
//!
//! - MySQL: `information_schema.COLUMNS`, `?` placeholders, `DATABASE()`
//!   default, enum/set literals from `COLUMN_TYPE`
//! - PostgreSQL: `information_schema.columns`, `$n` placeholders,
//!   `current_database()` / `current_schema()` defaults
//!
//! # Usage
//!
//! ```
//! use rowtype::metadata::{SchemaDialect, SourceDialect};
//!
//! let query = SourceDialect::Postgres.columns_query(None, Some("public"));
//! assert_eq!(query.params, vec!["public".to_string()]);
//! ```

mod mysql;
mod postgres;

pub use mysql::MySql;
pub use postgres::Postgres;

use super::connection::ColumnQuery;
use super::types::Column;
use crate::types::TypeResult;

/// Dialect trait: how a source database is queried and how its types map.
pub trait SchemaDialect: std::fmt::Debug {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    /// Build the column metadata query.
    ///
    /// `None` means "the connection's current database/schema". Dialects
    /// without schemas ignore `schema`.
    fn columns_query(&self, database: Option<&str>, schema: Option<&str>) -> ColumnQuery;

    /// Map a column's declared type (plus nullability) to its annotation type.
    fn map_type(&self, column: &Column) -> TypeResult<String>;
}

/// Supported source dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceDialect {
    #[default]
    MySql,
    Postgres,
}

impl SourceDialect {
    /// Get the dialect implementation.
    pub fn dialect(&self) -> &'static dyn SchemaDialect {
        match self {
            SourceDialect::MySql => &MySql,
            SourceDialect::Postgres => &Postgres,
        }
    }
}

impl SchemaDialect for SourceDialect {
    fn name(&self) -> &'static str {
        self.dialect().name()
    }

    fn columns_query(&self, database: Option<&str>, schema: Option<&str>) -> ColumnQuery {
        self.dialect().columns_query(database, schema)
    }

    fn map_type(&self, column: &Column) -> TypeResult<String> {
        self.dialect().map_type(column)
    }
}

impl std::fmt::Display for SourceDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
