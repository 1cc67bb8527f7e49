//! Browse state and the visible-list selector
//!
//! `BrowseState` is the single source of truth for the four user-driven
//! selections: search query, category filter, sort order, and view mode.
//! `visible_products` derives the list to present from the raw catalog and
//! a state snapshot. Everything in this module is synchronous and total.

use crate::model::product::Product;

/// Reserved category value meaning "no category filter applied"
pub const CATEGORY_ALL: &str = "all";

/// Sort order for the visible product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    RateDesc,
}

impl SortOrder {
    pub fn all() -> Vec<SortOrder> {
        vec![
            SortOrder::None,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
            SortOrder::RateDesc,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            SortOrder::None => "None",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::RateDesc => "Highest Rating",
        }
    }
}

/// Presentation mode for the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn name(&self) -> &str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }

    pub fn toggled(&self) -> ViewMode {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// User-driven selection state for one browsing session
///
/// Fields are private; all mutation goes through the setters, so no caller
/// can put the state into a shape the setters cannot produce. Each setter
/// replaces exactly one field and `reset` restores all four defaults in a
/// single assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    query: String,
    category: String,
    sort: SortOrder,
    view: ViewMode,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CATEGORY_ALL.to_string(),
            sort: SortOrder::None,
            view: ViewMode::Grid,
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Replace the search query verbatim. Normalization (trimming,
    /// lowercasing) happens at filter time, not at write time.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replace the category filter verbatim, including the "all" sentinel.
    /// Values not present in the catalog are accepted and simply match
    /// nothing.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Restore all four fields to their defaults atomically
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Derive the ordered list of products to present
///
/// Stages run in a fixed order, each on the output of the previous:
/// category filter (exact, case-sensitive match unless "all"), then title
/// search (case-insensitive substring of the trimmed query), then sort.
/// The sort is stable, so products with equal keys keep their relative
/// order. The input slice is never reordered or mutated.
///
/// The view mode has no effect on the result; it only changes how the
/// result is rendered.
pub fn visible_products<'a>(products: &'a [Product], state: &BrowseState) -> Vec<&'a Product> {
    let mut list: Vec<&Product> = products.iter().collect();

    if state.category() != CATEGORY_ALL {
        list.retain(|p| p.category == state.category());
    }

    let query = state.query().trim();
    if !query.is_empty() {
        let query = query.to_lowercase();
        list.retain(|p| p.title.to_lowercase().contains(&query));
    }

    match state.sort() {
        SortOrder::None => {}
        SortOrder::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::RateDesc => list.sort_by(|a, b| b.rate().total_cmp(&a.rate())),
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::Rating;

    fn product(id: u64, title: &str, category: &str, price: f64, rate: Option<f64>) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: rate.map(|r| Rating { rate: r, count: 10 }),
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            product(1, "Alpha Backpack", "bags", 100.0, Some(4.5)),
            product(2, "Beta Jacket", "clothing", 150.0, Some(3.0)),
            product(3, "Gamma Backpack", "bags", 80.0, Some(4.9)),
        ]
    }

    fn titles<'a>(list: &[&'a Product]) -> Vec<&'a str> {
        list.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let state = BrowseState::new();
        assert_eq!(state.query(), "");
        assert_eq!(state.category(), CATEGORY_ALL);
        assert_eq!(state.sort(), SortOrder::None);
        assert_eq!(state.view(), ViewMode::Grid);
    }

    #[test]
    fn test_setters_replace_single_field() {
        let mut state = BrowseState::new();

        state.set_query("backpack");
        assert_eq!(state.query(), "backpack");
        assert_eq!(state.category(), CATEGORY_ALL);
        assert_eq!(state.sort(), SortOrder::None);
        assert_eq!(state.view(), ViewMode::Grid);

        state.set_category("bags");
        assert_eq!(state.query(), "backpack");
        assert_eq!(state.category(), "bags");

        state.set_sort(SortOrder::PriceDesc);
        assert_eq!(state.sort(), SortOrder::PriceDesc);
        assert_eq!(state.view(), ViewMode::Grid);

        state.set_view(ViewMode::List);
        assert_eq!(state.view(), ViewMode::List);
        assert_eq!(state.query(), "backpack");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = BrowseState::new();
        state.set_query("  jacket ");
        state.set_category("clothing");
        state.set_sort(SortOrder::RateDesc);
        state.set_view(ViewMode::List);

        state.reset();
        assert_eq!(state, BrowseState::default());
    }

    #[test]
    fn test_category_all_is_identity() {
        let products = sample_products();
        let state = BrowseState::new();

        let visible = visible_products(&products, &state);
        assert_eq!(
            titles(&visible),
            vec!["Alpha Backpack", "Beta Jacket", "Gamma Backpack"]
        );
    }

    #[test]
    fn test_category_filter_exact_match() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_category("clothing");

        let visible = visible_products(&products, &state);
        assert_eq!(titles(&visible), vec!["Beta Jacket"]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_category("Clothing");

        assert!(visible_products(&products, &state).is_empty());
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_category("shoes");

        assert!(visible_products(&products, &state).is_empty());
    }

    #[test]
    fn test_blank_query_is_identity() {
        let products = sample_products();
        let mut state = BrowseState::new();

        for query in ["", "   ", "\t \n"] {
            state.set_query(query);
            assert_eq!(visible_products(&products, &state).len(), 3);
        }
    }

    #[test]
    fn test_query_substring_match() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_query("Backpack");

        let visible = visible_products(&products, &state);
        assert_eq!(titles(&visible), vec!["Alpha Backpack", "Gamma Backpack"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let products = sample_products();
        let mut state = BrowseState::new();

        state.set_query("BACKPACK");
        let upper = titles(&visible_products(&products, &state));

        state.set_query("backpack");
        let lower = titles(&visible_products(&products, &state));

        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["Alpha Backpack", "Gamma Backpack"]);
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_query("  backpack  ");

        let visible = visible_products(&products, &state);
        assert_eq!(titles(&visible), vec!["Alpha Backpack", "Gamma Backpack"]);
    }

    #[test]
    fn test_sort_none_preserves_input_order() {
        let products = vec![
            product(1, "Zebra", "misc", 30.0, None),
            product(2, "Apple", "misc", 10.0, None),
            product(3, "Mango", "misc", 20.0, None),
        ];
        let state = BrowseState::new();

        let visible = visible_products(&products, &state);
        assert_eq!(titles(&visible), vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_sort_price_ascending() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_sort(SortOrder::PriceAsc);

        let visible = visible_products(&products, &state);
        for pair in visible.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
        assert_eq!(
            titles(&visible),
            vec!["Gamma Backpack", "Alpha Backpack", "Beta Jacket"]
        );
    }

    #[test]
    fn test_sort_price_descending() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_sort(SortOrder::PriceDesc);

        let visible = visible_products(&products, &state);
        for pair in visible.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
        assert_eq!(
            titles(&visible),
            vec!["Beta Jacket", "Alpha Backpack", "Gamma Backpack"]
        );
    }

    #[test]
    fn test_sort_rate_descending() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_sort(SortOrder::RateDesc);

        let visible = visible_products(&products, &state);
        assert_eq!(
            titles(&visible),
            vec!["Gamma Backpack", "Alpha Backpack", "Beta Jacket"]
        );
    }

    #[test]
    fn test_missing_rating_sorts_as_zero() {
        let products = vec![
            product(1, "Unrated", "misc", 10.0, None),
            product(2, "Low", "misc", 10.0, Some(1.5)),
            product(3, "High", "misc", 10.0, Some(4.0)),
        ];
        let mut state = BrowseState::new();
        state.set_sort(SortOrder::RateDesc);

        let visible = visible_products(&products, &state);
        assert_eq!(titles(&visible), vec!["High", "Low", "Unrated"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let products = vec![
            product(1, "First", "misc", 25.0, Some(3.0)),
            product(2, "Second", "misc", 25.0, Some(3.0)),
            product(3, "Third", "misc", 25.0, Some(3.0)),
        ];

        let mut state = BrowseState::new();
        state.set_sort(SortOrder::PriceAsc);
        assert_eq!(
            titles(&visible_products(&products, &state)),
            vec!["First", "Second", "Third"]
        );

        state.set_sort(SortOrder::RateDesc);
        assert_eq!(
            titles(&visible_products(&products, &state)),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn test_stages_compose_in_order() {
        let mut products = sample_products();
        products.push(product(4, "Delta Backpack", "bags", 90.0, Some(2.0)));

        let mut state = BrowseState::new();
        state.set_category("bags");
        state.set_query("backpack");
        state.set_sort(SortOrder::PriceAsc);

        let visible = visible_products(&products, &state);
        assert_eq!(
            titles(&visible),
            vec!["Gamma Backpack", "Delta Backpack", "Alpha Backpack"]
        );
    }

    #[test]
    fn test_view_mode_does_not_affect_result() {
        let products = sample_products();
        let mut state = BrowseState::new();
        state.set_query("backpack");
        state.set_sort(SortOrder::RateDesc);

        state.set_view(ViewMode::Grid);
        let grid = titles(&visible_products(&products, &state));

        state.set_view(ViewMode::List);
        let list = titles(&visible_products(&products, &state));

        assert_eq!(grid, list);
    }

    #[test]
    fn test_selector_does_not_mutate_input() {
        let products = sample_products();
        let before: Vec<u64> = products.iter().map(|p| p.id).collect();

        let mut state = BrowseState::new();
        state.set_sort(SortOrder::PriceAsc);
        let _ = visible_products(&products, &state);

        let after: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }
}
