//! Free-text search over an item's text attributes.
//!
//! This is the search box on every listing page: a case-insensitive
//! substring match against a handful of fields (title and excerpt for
//! articles, name and location for courts, and so on).

use crate::traits::Filter;
use catalog::Item;

/// Keeps items where the search text appears in at least one searched field.
///
/// ## Algorithm
/// 1. Lowercase and trim the search text once, at construction
/// 2. An empty search text matches everything
/// 3. Otherwise check each field in order, stopping at the first hit
/// 4. A field the item does not have never matches
///
/// When no fields are given, the item kind's default search fields are used.
pub struct TextSearchFilter {
    needle: String,
    fields: Vec<String>,
}

impl TextSearchFilter {
    /// Create a new TextSearchFilter.
    ///
    /// # Arguments
    /// * `search` - Raw text from the search box
    /// * `fields` - Text attributes to search; empty means the kind's defaults
    pub fn new(search: &str, fields: Vec<String>) -> Self {
        Self {
            needle: search.trim().to_lowercase(),
            fields,
        }
    }

    fn field_matches(&self, item: &Item, field: &str) -> bool {
        item.text(field)
            .is_some_and(|value| value.to_lowercase().contains(&self.needle))
    }
}

impl Filter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn matches(&self, item: &Item) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        if self.fields.is_empty() {
            item.kind
                .default_search_fields()
                .iter()
                .any(|field| self.field_matches(item, field))
        } else {
            self.fields
                .iter()
                .any(|field| self.field_matches(item, field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ItemKind;

    fn paddle() -> Item {
        Item::new("p1", ItemKind::Product)
            .with_text("name", "Carbon Pro Paddle")
            .with_text("description", "Raw carbon face, 16mm core")
    }

    #[test]
    fn test_case_insensitive_substring() {
        let item = paddle();
        assert!(TextSearchFilter::new("PAD", vec![]).matches(&item));
        assert!(TextSearchFilter::new("carbon face", vec![]).matches(&item));
        assert!(!TextSearchFilter::new("ball", vec![]).matches(&item));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let bare = Item::new("x", ItemKind::Post);
        assert!(TextSearchFilter::new("", vec![]).matches(&bare));
        assert!(TextSearchFilter::new("   ", vec!["missing".to_string()]).matches(&bare));
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let item = paddle();
        let name_only = TextSearchFilter::new("core", vec!["name".to_string()]);
        assert!(!name_only.matches(&item));

        let description = TextSearchFilter::new("core", vec!["description".to_string()]);
        assert!(description.matches(&item));
    }

    #[test]
    fn test_missing_field_does_not_match() {
        let item = Item::new("c1", ItemKind::Court).with_text("name", "Riverside");
        let filter = TextSearchFilter::new("austin", vec!["city".to_string(), "name".to_string()]);
        assert!(!filter.matches(&item));
    }
}
