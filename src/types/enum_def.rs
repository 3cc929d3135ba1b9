//! MySQL `enum(...)` / `set(...)` definition parsing.
//!
//! `COLUMN_TYPE` holds the full definition, e.g. `enum('draft','it''s live')`.
//! The option list uses the database's own quoting: single-quoted literals
//! separated by commas, `''` for an embedded quote and `\` as escape char.

use std::sync::LazyLock;

use regex::Regex;

use super::{TypeError, TypeResult};

static DEFINITION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:enum|set)\((.*)\)$").unwrap());

const QUOTE: char = '\'';
const DELIMITER: char = ',';
const ESCAPE: char = '\\';

/// Parse the option literals out of an enum/set definition, in source order.
pub fn parse_enum_definition(definition: &str) -> TypeResult<Vec<String>> {
    let inner = DEFINITION_PATTERN
        .captures(definition)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| TypeError::enum_parse(definition))?
        .as_str();

    let mut options = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        if chars.next() != Some(QUOTE) {
            return Err(TypeError::enum_parse(definition));
        }

        let mut value = String::new();
        loop {
            match chars.next() {
                None => return Err(TypeError::enum_parse(definition)),
                Some(ESCAPE) => match chars.next() {
                    Some(c) => value.push(c),
                    None => return Err(TypeError::enum_parse(definition)),
                },
                Some(QUOTE) if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    value.push(QUOTE);
                }
                Some(QUOTE) => break,
                Some(c) => value.push(c),
            }
        }
        options.push(value);

        match chars.next() {
            None => break,
            Some(DELIMITER) => continue,
            Some(_) => return Err(TypeError::enum_parse(definition)),
        }
    }

    Ok(options)
}

/// Render option literals as a `"a"|"b"` union of JSON string literals.
pub fn render_literal_union(options: &[String]) -> TypeResult<String> {
    let literals = options
        .iter()
        .map(|option| serde_json::to_string(option))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TypeError::enum_parse(e.to_string()))?;
    Ok(literals.join("|"))
}
