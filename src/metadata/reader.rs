//! Schema reader: query, filter, group.

use tracing::debug;

use super::connection::{ConnectionResult, MetadataConnection};
use super::dialect::{SchemaDialect, SourceDialect};
use super::filter::TableFilters;
use super::types::{group_tables, Column, Table};

/// Reads the tables visible through a metadata connection.
///
/// The dialect is fixed at construction; every read runs one metadata query.
#[derive(Debug)]
pub struct SchemaReader<C> {
    connection: C,
    dialect: SourceDialect,
}

impl<C: MetadataConnection> SchemaReader<C> {
    pub fn new(connection: C, dialect: SourceDialect) -> Self {
        Self {
            connection,
            dialect,
        }
    }

    pub fn dialect(&self) -> SourceDialect {
        self.dialect
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Fetch the columns of `database` (and `schema`, Postgres only).
    ///
    /// The returned iterator yields each column whose table every filter
    /// accepts, once, in result order. It is single-pass.
    pub async fn read_columns<'f>(
        &self,
        database: Option<&str>,
        schema: Option<&str>,
        filters: &'f TableFilters,
    ) -> ConnectionResult<impl Iterator<Item = Column> + 'f> {
        let query = self.dialect.columns_query(database, schema);
        debug!(dialect = self.dialect.name(), sql = %query.sql, params = ?query.params, "fetching column metadata");

        let rows = self.connection.fetch_columns(&query).await?;
        debug!(rows = rows.len(), "column metadata fetched");

        Ok(rows.into_iter().filter(move |column| {
            let accepted = filters.accepts(&column.table_name);
            if !accepted {
                debug!(table = %column.table_name, column = %column.column_name, "column filtered out");
            }
            accepted
        }))
    }

    /// Fetch and group the filtered columns into tables.
    pub async fn read_tables(
        &self,
        database: Option<&str>,
        schema: Option<&str>,
        filters: &TableFilters,
    ) -> ConnectionResult<Vec<Table>> {
        let columns = self.read_columns(database, schema, filters).await?;
        Ok(group_tables(columns))
    }
}
