//! Core domain types for the marketplace catalog.
//!
//! Every page of the product (articles, courts, shop, players, community
//! feed) browses a list of entries with the same rough shape: an id, some
//! text to search, a few categorical values, some numbers and some yes/no
//! flags. [`Item`] is the single normalized representation of all of them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

// =============================================================================
// Well-known attribute keys
// =============================================================================

/// Categorical attribute used by the category dropdowns.
pub const CATEGORY: &str = "category";
/// Numeric attribute used by the price sorts.
pub const PRICE: &str = "price";
/// Flag marking recently added entries.
pub const IS_NEW: &str = "isNew";
/// Flag marking promoted entries.
pub const FEATURED: &str = "featured";

/// Unique identifier for a catalog entry
pub type ItemId = String;

// =============================================================================
// ItemKind
// =============================================================================

/// The kind of entry a catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Article,
    Court,
    Product,
    Player,
    Post,
}

impl ItemKind {
    /// Text attributes searched when a query does not name its own.
    pub fn default_search_fields(self) -> &'static [&'static str] {
        match self {
            ItemKind::Article => &["title", "excerpt", "author"],
            ItemKind::Court => &["name", "location", "city"],
            ItemKind::Product => &["name", "description", "brand"],
            ItemKind::Player => &["name", "location"],
            ItemKind::Post => &["content", "author"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Article => "article",
            ItemKind::Court => "court",
            ItemKind::Product => "product",
            ItemKind::Player => "player",
            ItemKind::Post => "post",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" | "articles" => Ok(ItemKind::Article),
            "court" | "courts" => Ok(ItemKind::Court),
            "product" | "products" => Ok(ItemKind::Product),
            "player" | "players" => Ok(ItemKind::Player),
            "post" | "posts" => Ok(ItemKind::Post),
            _ => Err(CatalogError::UnknownKind(s.to_string())),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A normalized catalog entry.
///
/// Attributes live in three maps keyed by the field name the page uses
/// (`name`, `price`, `hasLights`, ...). A missing key means the entry has no
/// data for that field, which filters treat according to their own
/// absent-data policy. `BTreeMap` keeps attribute order deterministic for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    #[serde(default)]
    pub text: BTreeMap<String, String>,
    #[serde(default)]
    pub numbers: BTreeMap<String, f64>,
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            kind,
            text: BTreeMap::new(),
            numbers: BTreeMap::new(),
            flags: BTreeMap::new(),
        }
    }

    /// Set a string attribute (builder style).
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.text.insert(key.into(), value.into());
        self
    }

    /// Set a numeric attribute (builder style).
    pub fn with_number(mut self, key: impl Into<String>, value: f64) -> Self {
        self.numbers.insert(key.into(), value);
        self
    }

    /// Set a boolean flag (builder style).
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.flags.insert(key.into(), value);
        self
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.text.get(key).map(String::as_str)
    }

    /// Numeric attribute, with NaN reported as absent.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.numbers.get(key).copied().filter(|v| !v.is_nan())
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    /// Value of the `category` attribute, if any.
    pub fn category(&self) -> Option<&str> {
        self.text(CATEGORY)
    }

    /// Value of the `price` attribute, if any.
    pub fn price(&self) -> Option<f64> {
        self.number(PRICE)
    }

    /// Display label: the first default search field that is present.
    pub fn label(&self) -> &str {
        self.kind
            .default_search_fields()
            .iter()
            .find_map(|field| self.text(field))
            .unwrap_or(&self.id)
    }
}

// =============================================================================
// Catalog - the in-memory collection
// =============================================================================

/// An ordered, id-indexed collection of items.
///
/// Items keep the order they were inserted in; that order is the "featured"
/// order the pipeline falls back to.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) items: Vec<Item>,
    pub(crate) by_id: HashMap<ItemId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Ids must be unique within a catalog.
    pub fn insert(&mut self, item: Item) -> Result<()> {
        if self.by_id.contains_key(&item.id) {
            return Err(CatalogError::DuplicateId { id: item.id });
        }
        self.by_id.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Distinct values of a string attribute with how many items carry each.
    ///
    /// Feeds the category dropdowns; sorted by value.
    pub fn categories(&self, field: &str) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in self.items.iter().filter_map(|item| item.text(field)) {
            *counts.entry(value).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Courts".parse::<ItemKind>().unwrap(), ItemKind::Court);
        assert_eq!("product".parse::<ItemKind>().unwrap(), ItemKind::Product);
        assert!("tournament".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_nan_is_absent() {
        let item = Item::new("1", ItemKind::Product).with_number(PRICE, f64::NAN);
        assert_eq!(item.price(), None);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let named = Item::new("1", ItemKind::Court).with_text("name", "Riverside");
        let unnamed = Item::new("2", ItemKind::Court);
        assert_eq!(named.label(), "Riverside");
        assert_eq!(unnamed.label(), "2");
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut catalog = Catalog::new();
        catalog.insert(Item::new("a", ItemKind::Post)).unwrap();
        let err = catalog.insert(Item::new("a", ItemKind::Post)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id } if id == "a"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_categories_counts() {
        let mut catalog = Catalog::new();
        for (id, category) in [("1", "paddles"), ("2", "balls"), ("3", "paddles")] {
            catalog
                .insert(Item::new(id, ItemKind::Product).with_text(CATEGORY, category))
                .unwrap();
        }
        catalog.insert(Item::new("4", ItemKind::Product)).unwrap();

        assert_eq!(
            catalog.categories(CATEGORY),
            vec![("balls".to_string(), 1), ("paddles".to_string(), 2)]
        );
    }
}
