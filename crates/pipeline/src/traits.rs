//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to catalog items.

use catalog::Item;

/// Core trait for filtering catalog items.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to serve concurrent queries over shared items
/// - Filters only ever see `&Item`; they cannot modify the catalog
/// - A filter decides one item at a time so the pipeline can stop at the
///   first filter that rejects an item
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Returns `true` if the item should be kept.
    fn matches(&self, item: &Item) -> bool;
}
