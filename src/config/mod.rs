//! Configuration module for rowtype.
//!
//! Handles connection configuration, environment variables, and settings.

mod connection;
mod request;
mod settings;

pub use connection::{ConnectionConfig, ConnectionConfigError, Driver};
pub use request::{RequestOverrides, ResolvedConnection, ENV_CONNECTION_NAME};
pub use settings::{
    expand_env_vars, ConnectionSettings, FilterSettings, OutputSettings, Settings, SettingsError,
};
