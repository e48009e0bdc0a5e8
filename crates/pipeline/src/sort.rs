//! Comparator selection and stable sorting of filtered items.
//!
//! The sort dropdown offers a closed set of modes. Each maps to a
//! comparator, and every sort is stable so items that compare equal keep
//! the order they had in the catalog.

use catalog::{FEATURED, IS_NEW, Item};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

/// Sort order for a result view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep catalog order.
    #[default]
    Featured,
    PriceAscending,
    PriceDescending,
    /// Items flagged `isNew` or `featured` first, catalog order otherwise.
    ///
    /// There is no creation timestamp on items, so this is a stable
    /// partition rather than a chronological sort.
    NewestFirst,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Featured,
        SortMode::PriceAscending,
        SortMode::PriceDescending,
        SortMode::NewestFirst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::PriceAscending => "price-ascending",
            SortMode::PriceDescending => "price-descending",
            SortMode::NewestFirst => "newest-first",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ParseModeError {
                kind: "sort",
                value: s.to_string(),
            })
    }
}

/// Sort items in place according to `mode`.
///
/// ## Algorithm
/// - `Featured`: no reordering
/// - `PriceAscending`: by price, items without a price last
/// - `PriceDescending`: exact reverse comparator, so items without a price come first
/// - `NewestFirst`: stable partition on the `isNew` / `featured` flags
///
/// `sort_by` is a stable merge sort, so ties keep their input order in every mode.
pub fn sort_items(items: &mut [&Item], mode: SortMode) {
    match mode {
        SortMode::Featured => {}
        SortMode::PriceAscending => {
            items.sort_by(|a, b| compare_price_ascending(a.price(), b.price()));
        }
        SortMode::PriceDescending => {
            items.sort_by(|a, b| compare_price_ascending(a.price(), b.price()).reverse());
        }
        SortMode::NewestFirst => {
            items.sort_by_key(|item| !is_promoted(item));
        }
    }
}

/// Ascending price order with absent prices after every present one.
///
/// `Item::price` already reports NaN as absent.
fn compare_price_ascending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn is_promoted(item: &Item) -> bool {
    item.flag(IS_NEW) == Some(true) || item.flag(FEATURED) == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ItemKind, PRICE};

    fn product(id: &str, price: Option<f64>) -> Item {
        let item = Item::new(id, ItemKind::Product);
        match price {
            Some(p) => item.with_number(PRICE, p),
            None => item,
        }
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_parse_sort_mode() {
        assert_eq!("price-ascending".parse::<SortMode>(), Ok(SortMode::PriceAscending));
        assert_eq!(" newest-first ".parse::<SortMode>(), Ok(SortMode::NewestFirst));
        let err = "cheapest".parse::<SortMode>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown sort mode: cheapest");
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_featured_keeps_order() {
        let a = product("a", Some(3.0));
        let b = product("b", Some(1.0));
        let mut items = vec![&a, &b];
        sort_items(&mut items, SortMode::Featured);
        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_price_sorts_put_missing_prices_at_ends() {
        let a = product("a", Some(30.0));
        let b = product("b", None);
        let c = product("c", Some(10.0));
        let d = product("d", Some(f64::NAN));

        let mut items = vec![&a, &b, &c, &d];
        sort_items(&mut items, SortMode::PriceAscending);
        assert_eq!(ids(&items), vec!["c", "a", "b", "d"]);

        let mut items = vec![&a, &b, &c, &d];
        sort_items(&mut items, SortMode::PriceDescending);
        assert_eq!(ids(&items), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let a = product("a", Some(20.0));
        let b = product("b", Some(10.0));
        let c = product("c", Some(20.0));
        let d = product("d", Some(10.0));

        let mut items = vec![&a, &b, &c, &d];
        sort_items(&mut items, SortMode::PriceAscending);
        assert_eq!(ids(&items), vec!["b", "d", "a", "c"]);

        let mut items = vec![&a, &b, &c, &d];
        sort_items(&mut items, SortMode::PriceDescending);
        assert_eq!(ids(&items), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_newest_first_is_stable_partition() {
        let a = product("a", None);
        let b = product("b", None).with_flag(IS_NEW, true);
        let c = product("c", None).with_flag(IS_NEW, false);
        let d = product("d", None).with_flag(FEATURED, true);

        let mut items = vec![&a, &b, &c, &d];
        sort_items(&mut items, SortMode::NewestFirst);
        assert_eq!(ids(&items), vec!["b", "d", "a", "c"]);
    }
}
