//! # Catalog Crate
//!
//! This crate handles loading and normalizing marketplace catalog data:
//! articles, courts, shop products, players and community posts.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Item, ItemKind, Catalog)
//! - **parser**: Parse JSON catalog documents into normalized items
//! - **index**: Build a Catalog from parsed items
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/shop.json"))?;
//! let paddle = catalog.get("p1").unwrap();
//! println!("{} costs {:?}", paddle.label(), paddle.price());
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use types::{CATEGORY, Catalog, FEATURED, IS_NEW, Item, ItemId, ItemKind, PRICE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_item_builder() {
        let item = Item::new("p1", ItemKind::Product)
            .with_text("name", "Paddle")
            .with_text(CATEGORY, "paddles")
            .with_number(PRICE, 100.0)
            .with_flag(IS_NEW, false);

        assert_eq!(item.label(), "Paddle");
        assert_eq!(item.category(), Some("paddles"));
        assert_eq!(item.price(), Some(100.0));
        assert_eq!(item.flag(IS_NEW), Some(false));
        assert_eq!(item.flag(FEATURED), None);
    }
}
