//! Formatting helpers for annotation output.
//!
//! Provides field-name quoting, field-line joining and doc comment embedding.

/// Indentation of field lines inside a shape.
pub const FIELD_INDENT: &str = "    ";

/// Check if a field name can be emitted without quotes.
///
/// Mirrors the `^\w+$` test of the analyzers' shape parser: one or more
/// ASCII letters, digits or underscores.
#[must_use]
pub fn is_simple_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Quote a field name if needed.
///
/// Returns the name as-is if it is a simple identifier, otherwise wraps it in
/// single quotes: `'user id'`.
#[must_use]
pub fn quote_field(name: &str) -> String {
    if is_simple_identifier(name) {
        name.to_string()
    } else {
        format!("'{name}'")
    }
}

/// Join field lines with `,\n`, no comma after the last one.
///
/// Existing trailing commas are stripped first, so the output does not
/// depend on how the lines were produced.
#[must_use]
pub fn join_field_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref().trim_end_matches(','))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Embed text into a `/** ... */` doc comment.
///
/// Every line (empty ones included) gets the ` * ` continuation prefix.
#[must_use]
pub fn embed_in_doc_block(inner: &str) -> String {
    let lines: Vec<String> = inner.split('\n').map(|line| format!(" * {line}")).collect();
    format!("/**\n{}\n */", lines.join("\n"))
}
