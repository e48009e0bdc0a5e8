//! Error types for the catalog crate.
//!
//! Only loading and normalizing a catalog can fail. Once items are in
//! memory, filtering and sorting them is total.

use thiserror::Error;

/// Errors that can occur while loading and normalizing catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog document is not valid JSON or does not have the expected shape
    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    /// A record has no usable `id` field
    ///
    /// `index` is the zero-based position of the record in the `items` array.
    #[error("Record {index} has no id")]
    MissingId { index: usize },

    /// Two records share the same id
    #[error("Duplicate item id: {id}")]
    DuplicateId { id: String },

    /// A field had a value that cannot be normalized
    #[error("Invalid value for {field} on item {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// The document names an item kind we do not know about
    #[error("Unknown item kind: {0}")]
    UnknownKind(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
