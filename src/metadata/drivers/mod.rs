//! Concrete [`MetadataConnection`](super::MetadataConnection) adapters.
//!
//! Each adapter is behind its own cargo feature.

#[cfg(feature = "mysql")]
mod mysql;
#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "mysql")]
pub use mysql::MySqlConnection;
#[cfg(feature = "postgres")]
pub use postgres::PostgresConnection;
