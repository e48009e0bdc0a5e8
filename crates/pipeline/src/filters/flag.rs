//! Filter on boolean amenity/flag attributes ("has lights", "indoor", "new").

use crate::traits::Filter;
use catalog::Item;

/// Keeps items that have a required flag set to `true`.
///
/// A flag that is not required always passes. When required, a missing flag
/// counts as `false`.
pub struct FlagFilter {
    flag: String,
    required: bool,
}

impl FlagFilter {
    /// Create a filter that requires `flag` to be set.
    pub fn required(flag: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            required: true,
        }
    }

    /// Create a new FlagFilter, mirroring an amenity checkbox.
    pub fn new(flag: impl Into<String>, required: bool) -> Self {
        Self {
            flag: flag.into(),
            required,
        }
    }
}

impl Filter for FlagFilter {
    fn name(&self) -> &str {
        "FlagFilter"
    }

    fn matches(&self, item: &Item) -> bool {
        !self.required || item.flag(&self.flag) == Some(true)
    }
}
