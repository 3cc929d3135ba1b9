//! Annotation rendering.
//!
//! - [`block`]: one `@<analyzer>-type` definition per table and analyzer
//! - [`document`]: the PHP file wrapping every definition in a doc comment
//! - [`format`]: quoting, line joining and doc comment helpers

pub mod block;
pub mod document;
pub mod format;

pub use block::{table_blocks, AnalyzerDialect, Completeness, ShapeKind, TypeBlock};
pub use document::emit_document;

/// Combine rendered blocks into the definitions text.
///
/// Blocks are separated by one empty line; the text ends with a newline.
#[must_use]
pub fn render_definitions(blocks: &[TypeBlock]) -> String {
    blocks
        .iter()
        .map(TypeBlock::render)
        .collect::<Vec<_>>()
        .join("\n")
}
