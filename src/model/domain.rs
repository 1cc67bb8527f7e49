//! Domain state - catalog data separate from UI concerns

use crate::model::product::Product;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Domain state holding the loaded catalog
#[derive(Default)]
pub struct CatalogState {
    /// All products from the catalog, in catalog order
    pub products: Vec<Product>,

    /// Sorted distinct category values across the catalog
    pub categories: Vec<String>,

    /// Path the catalog was loaded from
    pub catalog_path: Option<PathBuf>,

    /// When the catalog was last loaded
    pub loaded_at: Option<DateTime<Local>>,
}

impl CatalogState {
    /// Create an empty catalog state
    pub fn new() -> Self {
        Self::default()
    }
}
