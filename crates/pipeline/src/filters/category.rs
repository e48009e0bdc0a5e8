//! Filter on a categorical attribute (category dropdowns, type tabs).

use crate::traits::Filter;
use catalog::Item;

/// Keeps items whose categorical field equals the selected value.
///
/// Categories are controlled, enum-like strings, so the comparison is exact
/// and case-sensitive. With nothing selected every item passes; with a
/// selection, an item lacking the field is dropped.
pub struct CategoryFilter {
    field: String,
    selected: Option<String>,
}

impl CategoryFilter {
    /// Create a new CategoryFilter.
    ///
    /// # Arguments
    /// * `field` - The categorical attribute to compare (typically `category`)
    /// * `selected` - The selected value, or `None` for "all"
    pub fn new(field: impl Into<String>, selected: Option<String>) -> Self {
        Self {
            field: field.into(),
            selected,
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, item: &Item) -> bool {
        match &self.selected {
            None => true,
            Some(selected) => item.text(&self.field) == Some(selected.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CATEGORY, ItemKind};

    #[test]
    fn test_category_filter() {
        let paddle = Item::new("1", ItemKind::Product).with_text(CATEGORY, "paddles");
        let ball = Item::new("2", ItemKind::Product).with_text(CATEGORY, "balls");
        let unknown = Item::new("3", ItemKind::Product);

        let filter = CategoryFilter::new(CATEGORY, Some("paddles".to_string()));
        assert!(filter.matches(&paddle));
        assert!(!filter.matches(&ball));
        assert!(!filter.matches(&unknown));
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let paddle = Item::new("1", ItemKind::Product).with_text(CATEGORY, "Paddles");
        let filter = CategoryFilter::new(CATEGORY, Some("paddles".to_string()));
        assert!(!filter.matches(&paddle));
    }

    #[test]
    fn test_no_selection_passes() {
        let unknown = Item::new("3", ItemKind::Product);
        assert!(CategoryFilter::new(CATEGORY, None).matches(&unknown));
    }
}
