//! Table name to type name conversion.
//!
//! Type names are built in two steps: the table name is turned into a
//! PascalCase identifier, then optionally singularized. Singularization is a
//! fixed suffix-rewrite heuristic, not a dictionary lookup, so irregular
//! plurals (`people`) pass through unchanged and some singular words lose a
//! trailing `s` (`bus` becomes `bu`).

use std::fmt;
use std::sync::Arc;

/// Suffix rewrite rules, tried in order. Only the first match applies.
static SINGULAR_RULES: &[(&str, &str)] = &[
    ("ies", "y"),   // categories -> category
    ("sses", "ss"), // addresses -> address
    ("xes", "x"),
    ("oes", "o"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("s", ""),
];

/// Convert a snake_case table name into a PascalCase identifier.
///
/// Underscores and spaces separate segments. The first character of each
/// segment is upper-cased (ASCII only); the rest of the segment is kept as-is.
///
/// # Examples
/// ```
/// use rowtype::naming::to_type_identifier;
///
/// assert_eq!(to_type_identifier("blog_posts"), "BlogPosts");
/// assert_eq!(to_type_identifier("HTTP_log"), "HTTPLog");
/// ```
#[must_use]
pub fn to_type_identifier(table_name: &str) -> String {
    let mut result = String::with_capacity(table_name.len());
    for segment in table_name.split(['_', ' ']) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Singularize a word with the first matching suffix rule.
///
/// # Examples
/// ```
/// use rowtype::naming::singularize;
///
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("Addresses"), "Address");
/// assert_eq!(singularize("People"), "People");
/// ```
#[must_use]
pub fn singularize(word: &str) -> String {
    for (suffix, replacement) in SINGULAR_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    word.to_string()
}

/// How a table's type name is singularized.
#[derive(Clone, Default)]
pub enum Singularization {
    /// Keep the PascalCase table name as-is.
    Off,
    /// Apply [`singularize`].
    #[default]
    Default,
    /// Apply a caller-supplied rule to the PascalCase name.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl Singularization {
    pub fn custom<F>(rule: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(rule))
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            Singularization::Off => name.to_string(),
            Singularization::Default => singularize(name),
            Singularization::Custom(rule) => rule(name),
        }
    }
}

impl fmt::Debug for Singularization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Singularization::Off => f.write_str("Off"),
            Singularization::Default => f.write_str("Default"),
            Singularization::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Resolve the display name of a table: PascalCase first, then singularized.
///
/// # Examples
/// ```
/// use rowtype::naming::{resolve_type_name, Singularization};
///
/// assert_eq!(resolve_type_name("blog_posts", &Singularization::Default), "BlogPost");
/// assert_eq!(resolve_type_name("blog_posts", &Singularization::Off), "BlogPosts");
/// ```
#[must_use]
pub fn resolve_type_name(table_name: &str, policy: &Singularization) -> String {
    policy.apply(&to_type_identifier(table_name))
}
