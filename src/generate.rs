//! End-to-end generation from schema metadata to a PHP document.
//!
//! ```text
//! information_schema → SchemaReader → Tables → TypeBlocks → Document
//! ```
//!
//! # Example
//!
//! ```ignore
//! use rowtype::generate::{GenerationRequest, Generator};
//! use rowtype::metadata::{MySqlConnection, SourceDialect};
//!
//! let connection = MySqlConnection::connect("mysql://app@localhost/shop")?;
//! let generator = Generator::new(connection, SourceDialect::MySql);
//!
//! let request = GenerationRequest::new("App\\Database", "DatabaseTypes").with_database("shop");
//! let php = generator.generate(&request).await?;
//! ```

use tracing::{debug, info};

use crate::metadata::{
    ConnectionError, MetadataConnection, SchemaReader, SourceDialect, Table, TableFilter,
    TableFilters,
};
use crate::naming::{resolve_type_name, Singularization};
use crate::render::{emit_document, render_definitions, table_blocks, Completeness, ShapeKind, TypeBlock};
use crate::types::TypeError;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that abort a generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Unknown type: {type_name}")]
    UnknownType { type_name: String },

    #[error("Can't parse enum definition: {definition}")]
    EnumParse { definition: String },

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

impl From<TypeError> for GenerateError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::UnknownType { type_name } => Self::UnknownType { type_name },
            TypeError::EnumParse { definition } => Self::EnumParse { definition },
        }
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;

// ============================================================================
// Request
// ============================================================================

/// Options for one generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Namespace of the generated PHP file.
    pub namespace: String,
    /// Name of the placeholder class.
    pub class_name: String,
    /// Database to read; `None` uses the connection's current database.
    pub database: Option<String>,
    /// Schema to read (Postgres); `None` uses the current schema.
    pub schema: Option<String>,
    pub shape: ShapeKind,
    pub completeness: Completeness,
    pub singularization: Singularization,
    pub filters: TableFilters,
}

impl GenerationRequest {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
            database: None,
            schema: None,
            shape: ShapeKind::default(),
            completeness: Completeness::default(),
            singularization: Singularization::default(),
            filters: TableFilters::default(),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_completeness(mut self, completeness: Completeness) -> Self {
        self.completeness = completeness;
        self
    }

    pub fn with_singularization(mut self, singularization: Singularization) -> Self {
        self.singularization = singularization;
        self
    }

    pub fn with_filters(mut self, filters: TableFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Add one filter to the request's list.
    pub fn with_filter(mut self, filter: TableFilter) -> Self {
        self.filters = self.filters.with(filter);
        self
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Build the blocks for every table, both analyzer dialects per table.
pub fn build_blocks(
    tables: &[Table],
    source: SourceDialect,
    request: &GenerationRequest,
) -> GenerateResult<Vec<TypeBlock>> {
    let mut blocks = Vec::with_capacity(tables.len() * 2);
    for table in tables {
        let type_name = resolve_type_name(&table.name, &request.singularization);
        debug!(table = %table.name, type_name = %type_name, columns = table.columns.len(), "rendering table");
        blocks.extend(table_blocks(
            table,
            source,
            &type_name,
            request.shape,
            request.completeness,
        )?);
    }
    Ok(blocks)
}

/// Render the type definitions of already-read tables, without the PHP wrapper.
pub fn render_table_definitions(
    tables: &[Table],
    source: SourceDialect,
    request: &GenerationRequest,
) -> GenerateResult<String> {
    Ok(render_definitions(&build_blocks(tables, source, request)?))
}

/// Render the full PHP document for already-read tables.
pub fn render_document(
    tables: &[Table],
    source: SourceDialect,
    request: &GenerationRequest,
) -> GenerateResult<String> {
    let definitions = render_table_definitions(tables, source, request)?;
    Ok(emit_document(&request.namespace, &request.class_name, &definitions))
}

// ============================================================================
// Generator
// ============================================================================

/// Generates annotation documents from a metadata connection.
#[derive(Debug)]
pub struct Generator<C> {
    reader: SchemaReader<C>,
}

impl<C: MetadataConnection> Generator<C> {
    pub fn new(connection: C, dialect: SourceDialect) -> Self {
        Self {
            reader: SchemaReader::new(connection, dialect),
        }
    }

    pub fn reader(&self) -> &SchemaReader<C> {
        &self.reader
    }

    /// Read the tables selected by the request.
    pub async fn read_tables(&self, request: &GenerationRequest) -> GenerateResult<Vec<Table>> {
        let tables = self
            .reader
            .read_tables(
                request.database.as_deref(),
                request.schema.as_deref(),
                &request.filters,
            )
            .await?;
        Ok(tables)
    }

    /// Generate only the type definitions text.
    #[tracing::instrument(skip_all, fields(dialect = %self.reader.dialect()))]
    pub async fn generate_definitions(&self, request: &GenerationRequest) -> GenerateResult<String> {
        let tables = self.read_tables(request).await?;
        let definitions = render_table_definitions(&tables, self.reader.dialect(), request)?;
        info!(tables = tables.len(), "type definitions generated");
        Ok(definitions)
    }

    /// Generate the complete PHP document.
    #[tracing::instrument(skip_all, fields(dialect = %self.reader.dialect(), namespace = %request.namespace))]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerateResult<String> {
        let tables = self.read_tables(request).await?;
        let document = render_document(&tables, self.reader.dialect(), request)?;
        info!(tables = tables.len(), "document generated");
        Ok(document)
    }
}
