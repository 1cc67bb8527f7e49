//! Category accent colors
//!
//! Each category gets a consistent color for its pill across the list, the
//! grid cards, the detail view, and the category picker. The mapping is a
//! pure function of the category and the ordered distinct-category list, so
//! a category keeps its accent for the whole session.

use ratatui::style::Color;

/// Fixed palette of category accents
pub const ACCENTS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Red,
];

/// Palette index for a category: its position in the ordered distinct
/// category list modulo the palette size. Categories not in the list fall
/// back to index 0.
pub fn accent_index(category: &str, categories: &[String]) -> usize {
    categories
        .iter()
        .position(|c| c == category)
        .map(|i| i % ACCENTS.len())
        .unwrap_or(0)
}

/// Accent color for a category
pub fn category_accent(category: &str, categories: &[String]) -> Color {
    ACCENTS[accent_index(category, categories)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_accent_index_follows_list_position() {
        let cats = categories(&["bags", "clothing", "electronics"]);

        assert_eq!(accent_index("bags", &cats), 0);
        assert_eq!(accent_index("clothing", &cats), 1);
        assert_eq!(accent_index("electronics", &cats), 2);
    }

    #[test]
    fn test_accent_index_wraps_around_palette() {
        let names: Vec<String> = (0..8).map(|i| format!("category-{}", i)).collect();

        assert_eq!(accent_index("category-6", &names), 0);
        assert_eq!(accent_index("category-7", &names), 1);
    }

    #[test]
    fn test_unknown_category_falls_back_to_first_accent() {
        let cats = categories(&["bags", "clothing"]);

        assert_eq!(accent_index("shoes", &cats), 0);
        assert_eq!(category_accent("shoes", &cats), ACCENTS[0]);
    }

    #[test]
    fn test_accent_is_stable_for_same_inputs() {
        let cats = categories(&["bags", "clothing", "electronics"]);

        let first = category_accent("clothing", &cats);
        let second = category_accent("clothing", &cats);
        assert_eq!(first, second);
    }
}
