//! PHP document assembly.
//!
//! The document is fixed text:
//!
//! ```text
//! <?php
//!
//! namespace App\Database;
//!
//! /**
//!  * @phpstan-type TUser array{
//!  *     id: int
//!  * }
//!  * ...
//!  */
//! class DatabaseTypes {
//! }
//! ```
//!
//! Writing it anywhere is the caller's job.

use super::format::embed_in_doc_block;

/// Opening marker of a PHP file.
pub const PHP_OPEN_TAG: &str = "<?php";

/// Assemble the output document around already rendered type definitions.
#[must_use]
pub fn emit_document(namespace: &str, class_name: &str, definitions: &str) -> String {
    let content = [
        PHP_OPEN_TAG.to_string(),
        String::new(),
        format!("namespace {namespace};"),
        String::new(),
        embed_in_doc_block(definitions),
        format!("class {class_name} {{\n}}\n"),
    ];
    content.join("\n")
}
