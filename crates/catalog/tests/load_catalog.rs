//! Integration tests for loading catalog files from disk.

use catalog::{CATEGORY, Catalog, CatalogError, ItemKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_courts_file() {
    let file = write_catalog(
        r#"{
            "kind": "court",
            "items": [
                { "id": 1, "name": "Riverside Park", "city": "Austin", "type": "outdoor",
                  "rating": 4.6, "amenities": ["lights", "parking"] },
                { "id": 2, "name": "Downtown Rec Center", "city": "Austin", "type": "indoor",
                  "rating": "4.1", "hasLights": false }
            ]
        }"#,
    );

    let catalog = Catalog::load_from_file(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    let riverside = catalog.get("1").unwrap();
    assert_eq!(riverside.kind, ItemKind::Court);
    assert_eq!(riverside.flag("lights"), Some(true));
    assert_eq!(riverside.number("rating"), Some(4.6));

    let downtown = catalog.get("2").unwrap();
    assert_eq!(downtown.number("rating"), Some(4.1));
    assert_eq!(downtown.flag("hasLights"), Some(false));
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let file = write_catalog(
        r#"{ "kind": "product", "items": [ { "id": "p1" }, { "id": "p1" } ] }"#,
    );

    let result = Catalog::load_from_file(file.path());
    assert!(matches!(result, Err(CatalogError::DuplicateId { id }) if id == "p1"));
}

#[test]
fn test_load_missing_file() {
    let result = Catalog::load_from_file(std::path::Path::new("does/not/exist.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_load_empty_items() {
    let file = write_catalog(r#"{ "kind": "post" }"#);
    let catalog = Catalog::load_from_file(file.path()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.categories(CATEGORY).is_empty());
}
