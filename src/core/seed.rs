//! Built-in catalog used when no persisted catalog exists yet

use crate::models::{Money, Product, Size, StockMap};

/// The initial product list the catalog seeds with on first start.
pub fn initial_products() -> Vec<Product> {
    vec![
        Product::new(1, "Polo Shirt".into(), "Shirts".into(), Money::from_major(489))
            .with_image("/Featured/men-polo.png".into())
            .with_description("Classic polo shirt".into())
            .with_rating(4.5, 24)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 10),
                (Size::S, 15),
                (Size::M, 20),
                (Size::L, 18),
                (Size::Xl, 12),
                (Size::Xxl, 8),
            ])),
        Product::new(2, "Hoodie".into(), "Outerwear".into(), Money::from_major(679))
            .with_image("/Featured/men-hoodie.png".into())
            .with_description("Comfortable hoodie".into())
            .with_rating(5.0, 18)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 5),
                (Size::S, 10),
                (Size::M, 15),
                (Size::L, 12),
                (Size::Xl, 8),
                (Size::Xxl, 5),
            ])),
        Product::new(3, "Short".into(), "Pants".into(), Money::from_major(899))
            .with_image("/Featured/men-short.png".into())
            .with_description("Stylish shorts".into())
            .with_rating(4.8, 32)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 8),
                (Size::S, 12),
                (Size::M, 18),
                (Size::L, 15),
                (Size::Xl, 10),
                (Size::Xxl, 6),
            ])),
        Product::new(4, "Shirt".into(), "Shirts".into(), Money::from_major(329))
            .with_image("/Featured/men-shirt.png".into())
            .with_description("Elegant dress shirt".into())
            .with_rating(4.3, 15)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 12),
                (Size::S, 18),
                (Size::M, 25),
                (Size::L, 20),
                (Size::Xl, 15),
                (Size::Xxl, 10),
            ])),
        Product::new(5, "Classic Polo".into(), "Shirts".into(), Money::from_major(449))
            .with_image("/Featured/men-polo.png".into())
            .with_rating(4.7, 28)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 6),
                (Size::S, 10),
                (Size::M, 14),
                (Size::L, 12),
                (Size::Xl, 8),
                (Size::Xxl, 4),
            ])),
        Product::new(6, "Winter Jacket".into(), "Outerwear".into(), Money::from_major(899))
            .with_image("/Featured/men-hoodie.png".into())
            .with_rating(4.9, 41)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 3),
                (Size::S, 7),
                (Size::M, 10),
                (Size::L, 8),
                (Size::Xl, 5),
                (Size::Xxl, 3),
            ])),
        Product::new(7, "Cargo Shorts".into(), "Pants".into(), Money::from_major(599))
            .with_image("/Featured/men-short.png".into())
            .with_rating(4.6, 19)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 5),
                (Size::S, 8),
                (Size::M, 12),
                (Size::L, 10),
                (Size::Xl, 6),
                (Size::Xxl, 4),
            ])),
        Product::new(8, "Casual Shirt".into(), "Shirts".into(), Money::from_major(379))
            .with_image("/Featured/men-shirt.png".into())
            .with_rating(4.4, 22)
            .with_stock(StockMap::from_counts([
                (Size::Xs, 10),
                (Size::S, 15),
                (Size::M, 20),
                (Size::L, 18),
                (Size::Xl, 12),
                (Size::Xxl, 8),
            ])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_positive() {
        let products = initial_products();
        assert_eq!(products.len(), 8);
        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert!(p.stock.any_available());
        }
    }
}
