//! PostgreSQL metadata source.
//!
//! `information_schema` columns use domain types (`sql_identifier`,
//! `cardinal_number`, `yes_or_no`), so the query casts them to plain
//! `text`/`int4` for the driver.

use super::SchemaDialect;
use crate::metadata::connection::ColumnQuery;
use crate::metadata::types::Column;
use crate::types::{map_postgres_type, TypeResult};

/// PostgreSQL metadata dialect.
#[derive(Debug, Clone, Copy)]
pub struct Postgres;

impl SchemaDialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn columns_query(&self, database: Option<&str>, schema: Option<&str>) -> ColumnQuery {
        let mut conditions = Vec::with_capacity(2);
        let mut params = Vec::new();

        match database {
            Some(name) => {
                params.push(name.to_string());
                conditions.push(format!("table_catalog = ${}", params.len()));
            }
            None => conditions.push("table_catalog = current_database()".to_string()),
        }

        match schema {
            Some(name) => {
                params.push(name.to_string());
                conditions.push(format!("table_schema = ${}", params.len()));
            }
            None => conditions.push("table_schema = current_schema()".to_string()),
        }

        let sql = format!(
            "SELECT table_name::text, column_name::text, ordinal_position::int4, \
             data_type::text, is_nullable::text, NULL::text \
             FROM information_schema.columns \
             WHERE {} \
             ORDER BY table_name, ordinal_position",
            conditions.join(" AND ")
        );

        ColumnQuery { sql, params }
    }

    fn map_type(&self, column: &Column) -> TypeResult<String> {
        map_postgres_type(&column.data_type, column.is_nullable)
    }
}
