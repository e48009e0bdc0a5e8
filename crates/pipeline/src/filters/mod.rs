//! Filter implementations for the catalog pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod category;
pub mod flag;
pub mod numeric;
pub mod text_search;

// Re-export for convenience
pub use category::CategoryFilter;
pub use flag::FlagFilter;
pub use numeric::{MaximumValueFilter, MinimumValueFilter};
pub use text_search::TextSearchFilter;
