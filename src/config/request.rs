//! Turning settings plus per-run overrides into a connection and a request.
//!
//! Precedence, highest first:
//! 1. [`RequestOverrides`] (command-line values)
//! 2. the chosen connection's `database` / `default_schema`
//! 3. `[output]` and `[filters]`
//!
//! Override patterns are appended to the configured ones. `partial` and
//! `no_singularize` can only switch their option on.

use super::connection::{ConnectionConfig, Driver};
use super::settings::{Settings, SettingsError};
use crate::generate::GenerationRequest;
use crate::naming::Singularization;
use crate::render::{Completeness, ShapeKind};

/// Name reported for a connection built from `ROWTYPE_DB_*` variables.
pub const ENV_CONNECTION_NAME: &str = "env";

/// Connection details resolved from the config file or the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConnection {
    pub name: String,
    pub driver: Driver,
    pub url: String,
    /// Database to read unless overridden.
    pub database: Option<String>,
    /// Schema to read unless overridden (Postgres).
    pub schema: Option<String>,
}

/// Per-run values taking precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub namespace: Option<String>,
    pub class_name: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    /// Render `object{}` shapes.
    pub object: bool,
    pub partial: bool,
    pub no_singularize: bool,
    /// Extra include patterns.
    pub include: Vec<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
}

impl Settings {
    /// Pick the connection to read from.
    ///
    /// An explicit name must exist. Without one, the default connection is
    /// used, then [`ConnectionConfig::from_env`].
    pub fn resolve_connection(&self, name: Option<&str>) -> Result<ResolvedConnection, SettingsError> {
        let named = match name {
            Some(name) => Some((name, self.get_connection(name)?)),
            None => self.default_connection(),
        };

        if let Some((name, conn)) = named {
            return Ok(ResolvedConnection {
                name: name.to_string(),
                driver: conn.driver_type()?,
                url: conn.resolved_connection_string()?,
                database: conn.database.clone(),
                schema: conn.default_schema.clone(),
            });
        }

        let config = ConnectionConfig::from_env()?;
        Ok(ResolvedConnection {
            name: ENV_CONNECTION_NAME.to_string(),
            driver: config.driver,
            url: config.to_connection_string(),
            database: None,
            schema: None,
        })
    }

    /// Build the generation request for one run.
    pub fn build_request(
        &self,
        connection: &ResolvedConnection,
        overrides: &RequestOverrides,
    ) -> Result<GenerationRequest, SettingsError> {
        let output = &self.output;

        let shape = if overrides.object { ShapeKind::Map } else { output.shape };
        let completeness = if overrides.partial || output.partial {
            Completeness::Partial
        } else {
            Completeness::Full
        };
        let singularization = if overrides.no_singularize || !output.singularize {
            Singularization::Off
        } else {
            Singularization::Default
        };

        let mut filters = self.filters.clone();
        filters.include.extend(overrides.include.iter().cloned());
        filters.exclude.extend(overrides.exclude.iter().cloned());

        let mut request = GenerationRequest::new(
            overrides.namespace.clone().unwrap_or_else(|| output.namespace.clone()),
            overrides.class_name.clone().unwrap_or_else(|| output.class_name.clone()),
        )
        .with_shape(shape)
        .with_completeness(completeness)
        .with_singularization(singularization)
        .with_filters(filters.to_filters()?);

        if let Some(database) = overrides.database.clone().or_else(|| connection.database.clone()) {
            request = request.with_database(database);
        }
        if let Some(schema) = overrides.schema.clone().or_else(|| connection.schema.clone()) {
            request = request.with_schema(schema);
        }

        Ok(request)
    }
}
