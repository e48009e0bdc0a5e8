//! Pipeline for searching, filtering and sorting catalog items.
//!
//! This crate provides:
//! - Query, the explicit, serializable state of a listing page's controls
//! - Filter trait and implementations (text search, category, numeric bounds, flags)
//! - FilterPipeline for composing filters
//! - Stable sorting by a closed set of sort modes
//! - ResultView for paging and empty-state rendering
//!
//! ## Architecture
//! Every listing page processes its items in stages:
//! 1. Filters drop items that fail any active criterion (logical AND)
//! 2. The survivors are stably sorted by the selected mode
//! 3. The rendering layer slices the result into pages or "load more" chunks
//!
//! Each stage is pure and borrows the items; nothing is cached between queries.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{run_query, Query, SortMode};
//!
//! let query = Query::new()
//!     .search("paddle")
//!     .category("paddles")
//!     .sort(SortMode::PriceAscending);
//!
//! let view = run_query(catalog.items(), &query);
//! if view.is_empty_state() {
//!     println!("No products match your filters");
//! }
//! for item in view.page(0, 12).items {
//!     println!("{}", item.label());
//! }
//! ```

pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod sort;
pub mod traits;
pub mod view;

// Re-export main types
pub use error::ParseModeError;
pub use filter_pipeline::FilterPipeline;
pub use query::{CategorySelection, NumericBound, Query};
pub use sort::{SortMode, sort_items};
pub use traits::Filter;
pub use view::{Page, ResultView, ViewMode, ViewState};

use catalog::Item;

/// Filter then sort `items` for `query`.
///
/// Items that survive keep their catalog order except where the sort mode
/// reorders them.
pub fn run_query<'a>(items: &'a [Item], query: &Query) -> ResultView<'a> {
    let pipeline = FilterPipeline::from_query(query);
    let mut filtered = pipeline.apply(items);
    sort_items(&mut filtered, query.sort);
    ResultView::new(filtered)
}
