use crate::models::{Money, Product, ProductId, Size};
use serde::{Deserialize, Serialize};

/// One cart entry, uniquely identified by `(product_id, size)`.
///
/// The descriptive fields and the price are a snapshot copied from the
/// catalog when the line was created. Later catalog edits do not reach
/// back into existing lines.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Catalog id of the product this line was snapshotted from
    pub product_id: ProductId,
    /// Chosen size
    pub size: Size,
    /// Units of this product and size; always at least 1
    pub quantity: u32,
    /// Product name at the time of add
    pub name: String,
    /// Category at the time of add
    pub category: String,
    /// Image reference at the time of add
    pub image: String,
    /// Unit price at the time of add
    pub price: Money,
}

impl CartLine {
    /// Creates a line by snapshotting a catalog product
    pub fn snapshot(product: &Product, size: Size, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            size,
            quantity,
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price,
        }
    }

    /// True when this line is keyed by the given product and size
    pub fn matches(&self, product_id: ProductId, size: Size) -> bool {
        self.product_id == product_id && self.size == size
    }

    /// Snapshotted unit price times quantity
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}
