use crate::models::{Money, StockMap};
use serde::{Deserialize, Serialize};

/// Unique catalog identifier, assigned at seed time and never reused.
pub type ProductId = u32;

/// A catalog product with its per-size stock counts
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub id: ProductId,
    /// Display name of the product
    pub name: String,
    /// Merchandising category, e.g. "Shirts"
    pub category: String,
    /// Reference to the product image asset
    pub image: String,
    /// Optional description of the product
    pub description: Option<String>,
    /// Average review rating
    pub rating: f32,
    /// Number of reviews behind the rating
    pub review_count: u32,
    /// Current list price
    pub price: Money,
    /// Stock counts per size
    pub stock: StockMap,
}

impl Product {
    /// Creates a new Product with required fields and an empty stock map
    pub fn new(id: ProductId, name: String, category: String, price: Money) -> Self {
        Self {
            id,
            name,
            category,
            image: String::new(),
            description: None,
            rating: 0.0,
            review_count: 0,
            price,
            stock: StockMap::new(),
        }
    }

    /// Sets the image reference
    pub fn with_image(mut self, image: String) -> Self {
        self.image = image;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the rating and review count
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Sets the stock map
    pub fn with_stock(mut self, stock: StockMap) -> Self {
        self.stock = stock;
        self
    }
}
