//! Type block rendering.
//!
//! A [`TypeBlock`] is the annotation for one table in one analyzer dialect:
//!
//! ```text
//! @phpstan-type TBlogPost array{
//!     id: int,
//!     title: string,
//!     body: string|null
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::{join_field_lines, quote_field, FIELD_INDENT};
use crate::metadata::{SchemaDialect, SourceDialect, Table};
use crate::types::TypeResult;

/// Static analyzer annotation conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerDialect {
    Phpstan,
    Psalm,
}

impl AnalyzerDialect {
    /// Every dialect, in output order.
    pub const ALL: [AnalyzerDialect; 2] = [AnalyzerDialect::Phpstan, AnalyzerDialect::Psalm];

    /// Annotation tag prefix (`@<prefix>-type`).
    pub fn prefix(&self) -> &'static str {
        match self {
            AnalyzerDialect::Phpstan => "phpstan",
            AnalyzerDialect::Psalm => "psalm",
        }
    }
}

/// List-like (`array{}`) or map-like (`object{}`) shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    #[serde(rename = "array")]
    List,
    #[serde(rename = "object")]
    Map,
}

impl ShapeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ShapeKind::List => "array",
            ShapeKind::Map => "object",
        }
    }
}

/// Whether every field is required or the partial variant is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    #[default]
    Full,
    Partial,
}

impl Completeness {
    /// Suffix appended to the type name.
    pub fn suffix(&self) -> &'static str {
        match self {
            Completeness::Full => "",
            Completeness::Partial => "_Partial",
        }
    }
}

/// A rendered-ready type definition for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBlock {
    pub dialect: AnalyzerDialect,
    /// Display name without the `T` prefix or partial suffix.
    pub type_name: String,
    pub shape: ShapeKind,
    pub completeness: Completeness,
    /// `(field name, type expression)` pairs in column order.
    pub fields: Vec<(String, String)>,
}

impl TypeBlock {
    /// Build a block from a table, mapping each column type with `source`.
    pub fn from_table(
        table: &Table,
        source: SourceDialect,
        dialect: AnalyzerDialect,
        type_name: impl Into<String>,
        shape: ShapeKind,
        completeness: Completeness,
    ) -> TypeResult<Self> {
        let fields = table
            .columns
            .iter()
            .map(|column| {
                source
                    .map_type(column)
                    .map(|ty| (column.column_name.clone(), ty))
            })
            .collect::<TypeResult<Vec<_>>>()?;

        Ok(Self {
            dialect,
            type_name: type_name.into(),
            shape,
            completeness,
            fields,
        })
    }

    /// Header line, e.g. `@psalm-type TUser_Partial object{`.
    pub fn header(&self) -> String {
        format!(
            "@{}-type T{}{} {}{{",
            self.dialect.prefix(),
            self.type_name,
            self.completeness.suffix(),
            self.shape.keyword()
        )
    }

    /// Render the block. The result ends with `}\n`.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .fields
            .iter()
            .map(|(name, ty)| format!("{FIELD_INDENT}{}: {ty}", quote_field(name)))
            .collect();

        format!("{}\n{}\n}}\n", self.header(), join_field_lines(&lines))
    }
}

impl fmt::Display for TypeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build the blocks for one table, one per analyzer dialect, back to back.
pub fn table_blocks(
    table: &Table,
    source: SourceDialect,
    type_name: &str,
    shape: ShapeKind,
    completeness: Completeness,
) -> TypeResult<Vec<TypeBlock>> {
    AnalyzerDialect::ALL
        .iter()
        .map(|&dialect| TypeBlock::from_table(table, source, dialect, type_name, shape, completeness))
        .collect()
}
