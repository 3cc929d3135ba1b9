//! `tokio-postgres` adapter.

use async_trait::async_trait;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Row};

use crate::metadata::connection::{ColumnQuery, ConnectionError, ConnectionResult, MetadataConnection};
use crate::metadata::types::Column;

/// Metadata connection backed by a `tokio-postgres` client.
pub struct PostgresConnection {
    client: Client,
}

impl std::fmt::Debug for PostgresConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConnection").finish_non_exhaustive()
    }
}

impl PostgresConnection {
    /// Connect without TLS and drive the connection on a background task.
    #[tracing::instrument(skip_all)]
    pub async fn connect(url: &str) -> ConnectionResult<Self> {
        let (client, connection) = tokio_postgres::connect(url, NoTls)
            .await
            .map_err(ConnectionError::new)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "postgres connection error");
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl MetadataConnection for PostgresConnection {
    #[tracing::instrument(skip_all)]
    async fn fetch_columns(&self, query: &ColumnQuery) -> ConnectionResult<Vec<Column>> {
        let params: Vec<&(dyn ToSql + Sync)> = query
            .params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(query.sql.as_str(), &params)
            .await
            .map_err(ConnectionError::new)?;

        rows.iter().map(row_to_column).collect()
    }
}

fn row_to_column(row: &Row) -> ConnectionResult<Column> {
    let ordinal_position: i32 = row.try_get(2).map_err(ConnectionError::new)?;
    let is_nullable: String = row.try_get(4).map_err(ConnectionError::new)?;
    Ok(Column {
        table_name: row.try_get(0).map_err(ConnectionError::new)?,
        column_name: row.try_get(1).map_err(ConnectionError::new)?,
        ordinal_position: u32::try_from(ordinal_position).map_err(ConnectionError::new)?,
        data_type: row.try_get(3).map_err(ConnectionError::new)?,
        is_nullable: Column::nullable_flag(&is_nullable),
        column_type: row.try_get(5).map_err(ConnectionError::new)?,
    })
}
