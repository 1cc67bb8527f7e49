//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `BrowseState` - User selections (query, category, sort, view) and the
//!   visible-list selector derived from them
//! - `CatalogState` - Business/data state (products, categories)
//! - `ModalStack` - Modal overlay management

pub mod browse;
pub mod domain;
pub mod modal;
pub mod product;

// Re-export commonly used types
pub use browse::{visible_products, BrowseState, SortOrder, ViewMode, CATEGORY_ALL};
pub use domain::CatalogState;
pub use product::{Product, Rating};
