//! Parser for catalog documents.
//!
//! A catalog file is a JSON document of the form
//!
//! ```json
//! { "kind": "product", "items": [ { "id": "p1", "name": "Paddle", "price": 100 } ] }
//! ```
//!
//! The records come from a mix of mock fixtures and backend responses, so
//! their shapes are loose. Each record is normalized into an [`Item`]:
//! - strings become text attributes
//! - numbers become numeric attributes
//! - booleans become flags
//! - `null` means the attribute is absent
//! - arrays of strings (`"amenities": ["lights", "indoor"]`) become one flag per element
//! - numeric strings under well-known numeric keys (`"price": "$129.99"`) are parsed
//! - anything else is skipped with a warning

use crate::error::{CatalogError, Result};
use crate::types::*;
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Keys whose string values are parsed as numbers.
const NUMERIC_KEYS: &[&str] = &[PRICE, "originalPrice", "rating", "readTime"];

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    kind: String,
    #[serde(default)]
    items: Vec<Map<String, Value>>,
}

/// Parse a catalog file from disk.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse a catalog document from a string.
///
/// Records are normalized in parallel; the returned items keep document order.
pub fn parse_catalog(content: &str) -> Result<Vec<Item>> {
    let document: CatalogDocument = serde_json::from_str(content)?;
    let kind: ItemKind = document.kind.parse()?;

    document
        .items
        .par_iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record, kind))
        .collect()
}

/// Normalize one raw record into an [`Item`].
pub fn normalize_record(index: usize, record: &Map<String, Value>, kind: ItemKind) -> Result<Item> {
    let id = parse_id(record.get("id")).ok_or(CatalogError::MissingId { index })?;
    let mut item = Item::new(id, kind);

    for (key, value) in record {
        if key == "id" {
            continue;
        }
        match value {
            Value::Null => {}
            Value::Bool(flag) => {
                item.flags.insert(key.clone(), *flag);
            }
            Value::Number(number) => {
                if let Some(n) = number.as_f64() {
                    item.numbers.insert(key.clone(), n);
                }
            }
            Value::String(s) if NUMERIC_KEYS.contains(&key.as_str()) => {
                let n = parse_numeric_string(s).ok_or_else(|| CatalogError::InvalidValue {
                    id: item.id.clone(),
                    field: key.clone(),
                    value: s.clone(),
                })?;
                item.numbers.insert(key.clone(), n);
            }
            Value::String(s) => {
                item.text.insert(key.clone(), s.clone());
            }
            Value::Array(values) => {
                let names: Option<Vec<&str>> = values.iter().map(Value::as_str).collect();
                match names {
                    Some(names) => {
                        for name in names {
                            item.flags.insert(name.to_string(), true);
                        }
                    }
                    None => tracing::warn!(
                        "Skipping non-string array attribute {} on item {}",
                        key,
                        item.id
                    ),
                }
            }
            Value::Object(_) => {
                tracing::warn!("Skipping nested attribute {} on item {}", key, item.id);
            }
        }
    }

    Ok(item)
}

fn parse_id(value: Option<&Value>) -> Option<ItemId> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse strings like `"129.99"`, `"$1,299"` or `" 4.5 "`.
fn parse_numeric_string(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|n| !n.is_nan())
}
