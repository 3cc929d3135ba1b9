//! # rowtype
//!
//! Generates PHPStan and Psalm row-shape types from MySQL and PostgreSQL
//! schema metadata.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          information_schema (MySQL | PostgreSQL)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [metadata: SchemaReader + TableFilters]
//! ┌─────────────────────────────────────────────────────────┐
//! │               Tables (ordered Columns)                   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [naming + types]
//! ┌─────────────────────────────────────────────────────────┐
//! │     TypeBlocks (phpstan + psalm, one pair per table)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [render]
//! ┌─────────────────────────────────────────────────────────┐
//! │        PHP document: doc comment + placeholder class     │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod render;
pub mod types;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::generate::{GenerateError, GenerateResult, GenerationRequest, Generator};
    pub use crate::metadata::{
        Column, ColumnQuery, ConnectionError, MetadataConnection, SourceDialect, Table,
        TableFilter, TableFilters,
    };
    pub use crate::naming::Singularization;
    pub use crate::render::{AnalyzerDialect, Completeness, ShapeKind, TypeBlock};
}

pub use generate::{GenerateError, GenerationRequest, Generator};
pub use metadata::SourceDialect;
