//! Catalog building and loading.
//!
//! Turns parsed items into a [`Catalog`], enforcing id uniqueness.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog document from disk.
    ///
    /// Steps:
    /// 1. Parse and normalize every record (in parallel)
    /// 2. Insert records in document order, rejecting duplicate ids
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);

        let items = parser::parse_catalog_file(path)?;
        let catalog = Self::from_items(items)?;

        info!("Loaded {} catalog items", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from already-normalized items.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let items = items.into_iter();
        let mut catalog = Catalog::new();
        catalog.items.reserve(items.size_hint().0);
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }
}
