//! Data model for catalog products

use serde::{Deserialize, Serialize};

/// Customer rating summary attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    #[serde(default)]
    pub count: u64,
}

/// A single catalog product
///
/// Products are read-only for the lifetime of a session. Filtering and
/// sorting operate on borrowed views, never on the records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// Rating value used for sorting and display. A missing rating counts
    /// as zero.
    pub fn rate(&self) -> f64 {
        self.rating.as_ref().map(|r| r.rate).unwrap_or(0.0)
    }

    /// Number of ratings behind the score
    pub fn rating_count(&self) -> u64 {
        self.rating.as_ref().map(|r| r.count).unwrap_or(0)
    }

    /// Price formatted with a currency symbol
    pub fn display_price(&self, currency: &str) -> String {
        format!("{}{:.2}", currency, self.price)
    }

    /// Five-slot star string for the rating, e.g. "★★★★☆"
    pub fn stars(&self) -> String {
        let filled = self.rate().round().clamp(0.0, 5.0) as usize;
        let mut stars = String::new();
        for _ in 0..filled {
            stars.push('★');
        }
        for _ in filled..5 {
            stars.push('☆');
        }
        stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_with_rating() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.test/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rate(), 3.9);
        assert_eq!(product.rating_count(), 120);
    }

    #[test]
    fn test_parse_product_without_rating() {
        let json = r#"{
            "id": 2,
            "title": "Plain Shirt",
            "price": 12.5,
            "category": "clothing"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.rating.is_none());
        assert_eq!(product.rate(), 0.0);
        assert_eq!(product.rating_count(), 0);
        assert_eq!(product.description, "");
        assert_eq!(product.image, "");
    }

    #[test]
    fn test_display_price() {
        let product = Product {
            id: 3,
            title: "Mug".to_string(),
            price: 7.0,
            description: String::new(),
            category: "kitchen".to_string(),
            image: String::new(),
            rating: None,
        };

        assert_eq!(product.display_price("£"), "£7.00");
        assert_eq!(product.display_price("$"), "$7.00");
    }

    #[test]
    fn test_stars_rounding() {
        let mut product = Product {
            id: 4,
            title: "Lamp".to_string(),
            price: 20.0,
            description: String::new(),
            category: "home".to_string(),
            image: String::new(),
            rating: Some(Rating {
                rate: 4.5,
                count: 10,
            }),
        };
        assert_eq!(product.stars(), "★★★★★");

        product.rating = Some(Rating {
            rate: 2.4,
            count: 3,
        });
        assert_eq!(product.stars(), "★★☆☆☆");

        product.rating = None;
        assert_eq!(product.stars(), "☆☆☆☆☆");
    }
}
