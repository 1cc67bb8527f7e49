//! External service interactions
//!
//! This module contains the data-source side of the application:
//! - Catalog loading and parsing
//! - Distinct category derivation

pub mod catalog;

pub use catalog::{distinct_categories, load_catalog};
