//! Derived result views for rendering.
//!
//! A [`ResultView`] is the final, ordered list of items a listing page
//! renders. It is rebuilt from scratch for every Query and never stored.
//! Pages and "load more" are slices of it; the view carries no memory of
//! earlier queries.

use catalog::Item;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

/// Layout toggle on listing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Compact,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
            ViewMode::Compact => "compact",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            "compact" => Ok(ViewMode::Compact),
            _ => Err(ParseModeError {
                kind: "view",
                value: s.to_string(),
            }),
        }
    }
}

/// Whether the latest query produced anything to show.
///
/// "Nothing loaded yet" is not a view state: until data arrives the caller
/// has no ResultView at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    HasResults,
    NoResults,
}

/// The ordered, filtered items for one render pass.
#[derive(Debug, Clone, Default)]
pub struct ResultView<'a> {
    items: Vec<&'a Item>,
}

/// One slice of a ResultView.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub items: &'a [&'a Item],
    /// Offset of the first item in this page.
    pub cursor: usize,
    /// Offset to request next, or `None` when this page reaches the end.
    pub next_cursor: Option<usize>,
    /// Size of the whole view.
    pub total: usize,
}

impl Page<'_> {
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

impl<'a> ResultView<'a> {
    pub fn new(items: Vec<&'a Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<&'a Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> ViewState {
        if self.items.is_empty() {
            ViewState::NoResults
        } else {
            ViewState::HasResults
        }
    }

    /// Signal for the empty-results message.
    pub fn is_empty_state(&self) -> bool {
        self.state() == ViewState::NoResults
    }

    /// Slice of at most `page_size` items starting at `cursor`.
    ///
    /// A page size of zero is treated as one. A cursor past the end yields
    /// an empty page with no next cursor.
    pub fn page(&self, cursor: usize, page_size: usize) -> Page<'_> {
        let total = self.items.len();
        let start = cursor.min(total);
        let end = start.saturating_add(page_size.max(1)).min(total);
        Page {
            items: &self.items[start..end],
            cursor: start,
            next_cursor: (end < total).then_some(end),
            total,
        }
    }

    /// Zero-based page number of a paginated listing.
    pub fn page_number(&self, index: usize, page_size: usize) -> Page<'_> {
        self.page(index.saturating_mul(page_size.max(1)), page_size)
    }

    /// Everything shown after `loads` clicks on "load more".
    ///
    /// The first `page_size` items are shown initially; each click adds
    /// another `page_size`.
    pub fn load_more(&self, loads: usize, page_size: usize) -> Page<'_> {
        let visible = loads.saturating_add(1).saturating_mul(page_size.max(1));
        self.page(0, visible)
    }
}
