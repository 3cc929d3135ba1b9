//! `mysql_async` adapter.

use async_trait::async_trait;
use mysql_async::prelude::{FromValue, Queryable};
use mysql_async::{Pool, Row};

use crate::metadata::connection::{ColumnQuery, ConnectionError, ConnectionResult, MetadataConnection};
use crate::metadata::types::Column;

/// Metadata connection backed by a `mysql_async` pool.
#[derive(Debug, Clone)]
pub struct MySqlConnection {
    pool: Pool,
}

impl MySqlConnection {
    /// Create a pool from a `mysql://` URL. No connection is opened yet.
    pub fn connect(url: &str) -> ConnectionResult<Self> {
        let pool = Pool::from_url(url).map_err(ConnectionError::new)?;
        Ok(Self { pool })
    }

    /// Close every pooled connection.
    pub async fn disconnect(self) -> ConnectionResult<()> {
        self.pool.disconnect().await.map_err(ConnectionError::new)
    }
}

#[async_trait]
impl MetadataConnection for MySqlConnection {
    #[tracing::instrument(skip_all)]
    async fn fetch_columns(&self, query: &ColumnQuery) -> ConnectionResult<Vec<Column>> {
        let mut conn = self.pool.get_conn().await.map_err(ConnectionError::new)?;
        let rows: Vec<Row> = conn
            .exec(query.sql.as_str(), query.params.clone())
            .await
            .map_err(ConnectionError::new)?;

        rows.iter().map(row_to_column).collect()
    }
}

fn row_to_column(row: &Row) -> ConnectionResult<Column> {
    let is_nullable: String = take(row, 4)?;
    Ok(Column {
        table_name: take(row, 0)?,
        column_name: take(row, 1)?,
        ordinal_position: take(row, 2)?,
        data_type: take(row, 3)?,
        is_nullable: Column::nullable_flag(&is_nullable),
        column_type: take(row, 5)?,
    })
}

fn take<T: FromValue>(row: &Row, index: usize) -> ConnectionResult<T> {
    row.get_opt::<T, usize>(index)
        .ok_or_else(|| ConnectionError::new(format!("missing column {index} in metadata row")))?
        .map_err(|e| ConnectionError::new(format!("invalid value in metadata column {index}: {e}")))
}
