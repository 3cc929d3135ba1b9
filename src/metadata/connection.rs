//! The database boundary.
//!
//! Query mechanics belong to the driver. This crate only hands the driver a
//! [`ColumnQuery`] (SQL plus positional string parameters) and expects the
//! rows back as [`Column`] values, in result order.

use async_trait::async_trait;

use super::types::Column;

/// Boxed driver error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An opaque failure reported by the database driver.
///
/// The driver's error is kept as-is; [`ConnectionError::into_inner`] gives it
/// back for downcasting.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConnectionError(BoxError);

impl ConnectionError {
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self(err.into())
    }

    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// A metadata query with positional parameters.
///
/// Placeholders follow the target driver (`?` for MySQL, `$n` for Postgres).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnQuery {
    pub sql: String,
    pub params: Vec<String>,
}

/// Something that can run a metadata query and return column rows.
///
/// The selected columns are, in order: table name, column name, ordinal
/// position, data type, `IS_NULLABLE` (`YES`/`NO`) and the raw type
/// definition (may be NULL).
#[async_trait]
pub trait MetadataConnection: Send + Sync {
    /// Run the query and return every row, fully materialized.
    async fn fetch_columns(&self, query: &ColumnQuery) -> ConnectionResult<Vec<Column>>;
}

#[async_trait]
impl<T: MetadataConnection + ?Sized> MetadataConnection for &T {
    async fn fetch_columns(&self, query: &ColumnQuery) -> ConnectionResult<Vec<Column>> {
        (**self).fetch_columns(query).await
    }
}

#[async_trait]
impl<T: MetadataConnection + ?Sized> MetadataConnection for Box<T> {
    async fn fetch_columns(&self, query: &ColumnQuery) -> ConnectionResult<Vec<Column>> {
        (**self).fetch_columns(query).await
    }
}
