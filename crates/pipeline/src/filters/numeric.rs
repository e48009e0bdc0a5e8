//! Threshold filters on numeric attributes.
//!
//! Used for "at least N minutes read", "rating 4+", and the shop's price
//! range slider.

use crate::traits::Filter;
use catalog::Item;

/// Removes items whose numeric field is below a minimum.
///
/// ## Algorithm
/// 1. A minimum of exactly zero (or NaN) is treated as unset: every item passes
/// 2. Otherwise keep the item only if its value is `>= minimum`, negative minimums included
/// 3. An item without the field, or with a NaN value, is dropped
pub struct MinimumValueFilter {
    field: String,
    minimum: f64,
}

impl MinimumValueFilter {
    /// Create a new MinimumValueFilter.
    ///
    /// # Arguments
    /// * `field` - Numeric attribute to check (e.g. `readTime`, `rating`)
    /// * `minimum` - Inclusive lower bound
    pub fn new(field: impl Into<String>, minimum: f64) -> Self {
        Self {
            field: field.into(),
            minimum,
        }
    }

    fn is_unset(&self) -> bool {
        self.minimum.is_nan() || self.minimum == 0.0
    }
}

impl Filter for MinimumValueFilter {
    fn name(&self) -> &str {
        "MinimumValueFilter"
    }

    fn matches(&self, item: &Item) -> bool {
        if self.is_unset() {
            return true;
        }
        item.number(&self.field).is_some_and(|v| v >= self.minimum)
    }
}

/// Removes items whose numeric field is above a maximum.
///
/// A NaN maximum is treated as unset. An item without the field is dropped.
pub struct MaximumValueFilter {
    field: String,
    maximum: f64,
}

impl MaximumValueFilter {
    pub fn new(field: impl Into<String>, maximum: f64) -> Self {
        Self {
            field: field.into(),
            maximum,
        }
    }
}

impl Filter for MaximumValueFilter {
    fn name(&self) -> &str {
        "MaximumValueFilter"
    }

    fn matches(&self, item: &Item) -> bool {
        if self.maximum.is_nan() {
            return true;
        }
        item.number(&self.field).is_some_and(|v| v <= self.maximum)
    }
}
