//! Free-text search and category selection for list views.
//!
//! Every list page (expenses, invoices, children, teachers) narrows its
//! records the same way: a query that must appear in at least one searchable
//! field, AND a category that must match exactly unless the `all` sentinel is
//! selected. Both comparisons ignore case.
//!
//! Filtering never mutates the input and keeps the original relative order.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel category value that disables the category test.
pub const ALL: &str = "all";

/// A record that can be narrowed by a list view.
pub trait Searchable {
    /// Text fields tested against the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of the single field used for category selection.
    fn category(&self) -> Cow<'_, str>;
}

/// Category selection: the `all` sentinel or one specific value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value; `all` in any case is the sentinel.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Check a record's category value against this selection.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category.to_lowercase() == wanted.to_lowercase(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(category) => f.write_str(category),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL.to_string(),
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Combined query and category selection for a list view.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Lower-cased free-text query (empty matches everything)
    query: String,

    /// Category selection
    category: CategoryFilter,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl AsRef<str>) -> Self {
        self.query = query.as_ref().to_lowercase();
        self
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// The normalized query text.
    pub fn query_text(&self) -> &str {
        &self.query
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category
    }

    /// True when any searchable field contains the query.
    pub fn matches_query<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.query))
    }

    /// True when the record passes both the query and the category test.
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.matches_query(record) && self.category.matches(&record.category())
    }

    /// Select the matching records, preserving their order.
    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> Vec<&'a T> {
        let matched: Vec<&T> = records.iter().filter(|r| self.matches(*r)).collect();
        tracing::debug!(
            query = %self.query,
            category = %self.category,
            total = records.len(),
            matched = matched.len(),
            "applied list filter"
        );
        matched
    }
}

/// Filter records by free-text query and category selector.
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    category: &str,
) -> Vec<&'a T> {
    ListFilter::new()
        .query(query)
        .category(category)
        .apply(records)
}

/// Category selector options: `all` followed by each distinct lower-cased
/// category in first-seen order.
pub fn categories<T: Searchable>(records: &[T]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for record in records {
        let value = record.category().to_lowercase();
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options
}
