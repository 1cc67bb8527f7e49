//! Catalog loading and category derivation services
//!
//! The data source for the browser: a JSON document holding an array of
//! product records. Loading never touches UI state; failures come back as
//! human-readable messages for the error banner.

use crate::model::Product;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load and parse the product catalog file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read catalog file: {}", e))?;

    let products: Vec<Product> = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse catalog JSON: {}", e))?;

    Ok(products)
}

/// Collect the distinct category values across the catalog, sorted
///
/// This ordered list drives both the category picker and the accent
/// assignment, so it must be deterministic for a given catalog.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: HashSet<&str> = HashSet::new();
    for product in products {
        categories.insert(product.category.as_str());
    }

    let mut result: Vec<String> = categories.into_iter().map(String::from).collect();
    result.sort();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("product-{}", id),
            price: 1.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn temp_catalog(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shop-tui-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("Failed to write temp catalog");
        path
    }

    #[test]
    fn test_distinct_categories_dedupes_and_sorts() {
        let products = vec![
            product(1, "electronics"),
            product(2, "bags"),
            product(3, "electronics"),
            product(4, "clothing"),
        ];

        assert_eq!(
            distinct_categories(&products),
            vec!["bags", "clothing", "electronics"]
        );
    }

    #[test]
    fn test_distinct_categories_empty_catalog() {
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/nonexistent/products.json").unwrap_err();
        assert!(err.contains("Failed to read catalog file"));
    }

    #[test]
    fn test_load_catalog_malformed_json() {
        let path = temp_catalog("malformed.json", "{ not json");
        let err = load_catalog(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(err.contains("Failed to parse catalog JSON"));
    }

    #[test]
    fn test_load_catalog_parses_products() {
        let path = temp_catalog(
            "valid.json",
            r#"[
                {"id": 1, "title": "Alpha Backpack", "price": 100.0, "category": "bags",
                 "rating": {"rate": 4.5, "count": 12}},
                {"id": 2, "title": "Beta Jacket", "price": 150.0, "category": "clothing"}
            ]"#,
        );
        let products = load_catalog(&path).expect("Failed to load catalog");
        let _ = fs::remove_file(&path);

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Alpha Backpack");
        assert_eq!(products[0].rate(), 4.5);
        assert!(products[1].rating.is_none());
    }
}
