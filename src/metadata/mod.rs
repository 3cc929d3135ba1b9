//! Schema metadata module.
//!
//! Reads column metadata from `information_schema` through a
//! [`MetadataConnection`], keeps the columns accepted by the request's
//! [`TableFilters`] and groups them into [`Table`]s.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        SchemaReader                         │
//! │  SourceDialect (MySql | Postgres)    TableFilters (AND)     │
//! │  - columns_query()                   - accepts()            │
//! │  - map_type()                                               │
//! └─────────────────────────────────────────────────────────────┘
//!                           │ ColumnQuery
//!                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   MetadataConnection                        │
//! │   MySqlConnection (mysql_async) │ PostgresConnection        │
//! │                                 │ (tokio-postgres)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rowtype::metadata::{MySqlConnection, SchemaReader, SourceDialect, TableFilters};
//!
//! let connection = MySqlConnection::connect("mysql://app@localhost/shop")?;
//! let reader = SchemaReader::new(connection, SourceDialect::MySql);
//! let tables = reader.read_tables(None, None, &TableFilters::new()).await?;
//! ```

mod connection;
mod dialect;
pub mod drivers;
mod filter;
mod reader;
mod types;

pub use connection::{
    BoxError, ColumnQuery, ConnectionError, ConnectionResult, MetadataConnection,
};
pub use dialect::{MySql, Postgres, SchemaDialect, SourceDialect};
#[cfg(feature = "mysql")]
pub use drivers::MySqlConnection;
#[cfg(feature = "postgres")]
pub use drivers::PostgresConnection;
pub use filter::{TableFilter, TableFilters};
pub use reader::SchemaReader;
pub use types::{group_tables, Column, Table};
