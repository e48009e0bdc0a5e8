//! The Query value object.
//!
//! A Query captures everything the listing controls say at one moment:
//! search box text, selected category, numeric thresholds, checked flags
//! and the sort dropdown. The UI layer owns it and builds a fresh one on
//! every interaction; the pipeline only reads it.
//!
//! Queries serialize to JSON so a page can keep its state in a URL, a saved
//! search, or a file passed to the command line.

use catalog::CATEGORY;
use serde::{Deserialize, Serialize};

use crate::sort::SortMode;

/// Sentinel dropdown value meaning "no category selected".
const ALL_CATEGORIES: &str = "all";

/// A selected value for a categorical attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub field: String,
    pub value: String,
}

impl CategorySelection {
    /// Returns `false` for an empty value or the dropdown's `all` entry.
    ///
    /// Selections restored from JSON skip the builder, so the pipeline
    /// checks this again before filtering.
    pub fn is_active(&self) -> bool {
        !is_all_categories(&self.value)
    }
}

fn is_all_categories(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES)
}

/// A bound on a numeric attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericBound {
    pub field: String,
    pub value: f64,
}

/// Current search/filter/sort criteria.
///
/// The default Query has no active filters and `featured` sort, so running
/// it returns the catalog unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Query {
    /// Free text from the search box.
    pub search: String,
    /// Text attributes to search; empty means the item kind's defaults.
    pub search_fields: Vec<String>,
    pub category: Option<CategorySelection>,
    pub minimum: Option<NumericBound>,
    pub maximum: Option<NumericBound>,
    /// Flags that must be `true` on every result.
    pub required_flags: Vec<String>,
    pub sort: SortMode,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Select a value of the `category` attribute.
    pub fn category(self, value: impl Into<String>) -> Self {
        self.category_in(CATEGORY, value)
    }

    /// Select a value of an arbitrary categorical attribute.
    ///
    /// An empty value or the dropdown's `all` entry clears the selection.
    pub fn category_in(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        self.category = if is_all_categories(&value) {
            None
        } else {
            Some(CategorySelection {
                field: field.into(),
                value,
            })
        };
        self
    }

    pub fn minimum(mut self, field: impl Into<String>, value: f64) -> Self {
        self.minimum = Some(NumericBound {
            field: field.into(),
            value,
        });
        self
    }

    pub fn maximum(mut self, field: impl Into<String>, value: f64) -> Self {
        self.maximum = Some(NumericBound {
            field: field.into(),
            value,
        });
        self
    }

    pub fn require_flag(mut self, flag: impl Into<String>) -> Self {
        self.required_flags.push(flag.into());
        self
    }

    pub fn sort(mut self, mode: SortMode) -> Self {
        self.sort = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = Query::new();
        assert_eq!(query.sort, SortMode::Featured);
        assert!(query.search.is_empty());
        assert!(query.category.is_none());
        assert!(query.minimum.is_none() && query.maximum.is_none());
        assert!(query.required_flags.is_empty());
    }

    #[test]
    fn test_selection_is_active() {
        let selection = |value: &str| CategorySelection {
            field: CATEGORY.to_string(),
            value: value.to_string(),
        };
        assert!(selection("paddles").is_active());
        assert!(!selection("ALL").is_active());
        assert!(!selection("").is_active());
    }

    #[test]
    fn test_all_category_clears_selection() {
        assert_eq!(Query::new().category("All").category, None);
        assert_eq!(Query::new().category("").category, None);
        assert_eq!(
            Query::new().category_in("type", "indoor").category,
            Some(CategorySelection {
                field: "type".to_string(),
                value: "indoor".to_string(),
            })
        );
    }

    #[test]
    fn test_query_json_round_trip() {
        let query = Query::new()
            .search("paddle")
            .category("paddles")
            .maximum("price", 150.0)
            .require_flag("isNew")
            .sort(SortMode::PriceDescending);

        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains("\"sort\":\"price-descending\""));
        assert!(json.contains("\"requiredFlags\":[\"isNew\"]"));

        let parsed: Query = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: Query = serde_json::from_str(r#"{ "search": "riverside" }"#).unwrap();
        assert_eq!(parsed.search, "riverside");
        assert_eq!(parsed.sort, SortMode::Featured);
        assert!(parsed.required_flags.is_empty());
    }
}
