//! Table-name filters.
//!
//! A [`TableFilters`] list is carried by each generation request. A column is
//! kept only if every filter accepts its table name, and it is kept once.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

type Predicate = dyn Fn(&str) -> bool + Send + Sync;

/// A single predicate over table names.
#[derive(Clone)]
pub struct TableFilter {
    description: String,
    predicate: Arc<Predicate>,
}

impl TableFilter {
    /// Wrap an arbitrary predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            description: "custom".to_string(),
            predicate: Arc::new(predicate),
        }
    }

    /// Accept tables matching any of the patterns.
    pub fn include(patterns: Vec<Regex>) -> Self {
        Self {
            description: format!("include {}", join_patterns(&patterns)),
            predicate: Arc::new(move |table: &str| patterns.iter().any(|p| p.is_match(table))),
        }
    }

    /// Reject tables matching any of the patterns.
    pub fn exclude(patterns: Vec<Regex>) -> Self {
        Self {
            description: format!("exclude {}", join_patterns(&patterns)),
            predicate: Arc::new(move |table: &str| !patterns.iter().any(|p| p.is_match(table))),
        }
    }

    /// Accept only the named tables.
    pub fn only<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = tables.into_iter().map(Into::into).collect();
        Self {
            description: format!("only [{}]", names.join(", ")),
            predicate: Arc::new(move |table: &str| names.iter().any(|n| n == table)),
        }
    }

    pub fn accepts(&self, table_name: &str) -> bool {
        (self.predicate)(table_name)
    }
}

impl fmt::Debug for TableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TableFilter").field(&self.description).finish()
    }
}

fn join_patterns(patterns: &[Regex]) -> String {
    let parts: Vec<&str> = patterns.iter().map(Regex::as_str).collect();
    format!("[{}]", parts.join(", "))
}

/// An immutable list of filters combined with AND semantics.
#[derive(Debug, Clone, Default)]
pub struct TableFilters {
    filters: Vec<TableFilter>,
}

impl TableFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the list with one more filter.
    pub fn with(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when every filter accepts the table (vacuously true when empty).
    pub fn accepts(&self, table_name: &str) -> bool {
        self.filters.iter().all(|f| f.accepts(table_name))
    }
}

impl FromIterator<TableFilter> for TableFilters {
    fn from_iter<T: IntoIterator<Item = TableFilter>>(iter: T) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}
