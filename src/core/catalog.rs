//! Product catalog: records, per-size stock and admin mutations

use crate::core::seed;
use crate::models::{Money, Product, ProductId, Size};
use crate::store::{StateStore, CATALOG_KEY};
use crate::{Error, Result};
use std::sync::Arc;

/// Stock-status filter for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFilter {
    /// Every product
    All,
    /// Products with any stock at all
    InStock,
    /// Products with some stock but below the low-stock threshold
    Low,
    /// Products with no stock in any size
    Out,
}

impl StockFilter {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StockFilter::All => "all",
            StockFilter::InStock => "in",
            StockFilter::Low => "low",
            StockFilter::Out => "out",
        }
    }

    /// Converts a string to a StockFilter enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StockFilter::All),
            "in" => Some(StockFilter::InStock),
            "low" => Some(StockFilter::Low),
            "out" => Some(StockFilter::Out),
            _ => None,
        }
    }
}

/// Owns the product records and their stock counts.
///
/// Loaded once at process start and handed to callers by reference; every
/// mutation rewrites the full catalog blob through the injected store
/// before it returns (write-through). A failed write rolls the in-memory
/// change back so memory and disk never drift.
pub struct ProductCatalog {
    products: Vec<Product>,
    store: Arc<dyn StateStore>,
}

impl ProductCatalog {
    /// Loads the persisted catalog, seeding with the built-in product list
    /// when no blob exists yet.
    pub fn load_or_seed(store: Arc<dyn StateStore>) -> Result<Self> {
        let products = match store.load(CATALOG_KEY)? {
            Some(bytes) => {
                let mut products: Vec<Product> = serde_json::from_slice(&bytes)?;
                // Older blobs may predate a size; repair the invariant here.
                for product in &mut products {
                    product.stock.normalize();
                }
                products
            }
            None => {
                log::info!("no persisted catalog, seeding built-in products");
                let products = seed::initial_products();
                let catalog = Self { products, store };
                catalog.persist()?;
                return Ok(catalog);
            }
        };
        Ok(Self { products, store })
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(Error::NotFound(id))
    }

    fn get_mut(&mut self, id: ProductId) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Replaces a product's price.
    pub fn update_price(&mut self, id: ProductId, new_price: Money) -> Result<()> {
        let product = self.get_mut(id)?;
        let previous = product.price;
        product.price = new_price;
        if let Err(e) = self.persist() {
            self.get_mut(id)?.price = previous;
            return Err(e);
        }
        log::debug!("product {} price {} -> {}", id, previous, new_price);
        Ok(())
    }

    /// Sets the stock count for exactly one size bucket.
    pub fn update_stock(&mut self, id: ProductId, size: Size, count: u32) -> Result<()> {
        let product = self.get_mut(id)?;
        let previous = product.stock.get(size);
        product.stock.set(size, count);
        if let Err(e) = self.persist() {
            self.get_mut(id)?.stock.set(size, previous);
            return Err(e);
        }
        log::debug!("product {} stock[{}] {} -> {}", id, size, previous, count);
        Ok(())
    }

    /// Removes `amount` units from one bucket, failing without touching the
    /// bucket when it holds fewer than `amount`.
    pub fn decrease_stock(&mut self, id: ProductId, size: Size, amount: u32) -> Result<()> {
        let product = self.get_mut(id)?;
        let available = product.stock.get(size);
        if available < amount {
            log::warn!(
                "refusing to oversell product {} size {}: requested {}, available {}",
                id,
                size,
                amount,
                available
            );
            return Err(Error::InsufficientStock {
                requested: amount,
                available,
            });
        }
        product.stock.set(size, available - amount);
        if let Err(e) = self.persist() {
            self.get_mut(id)?.stock.set(size, available);
            return Err(e);
        }
        Ok(())
    }

    /// True when any size bucket holds stock. Unknown ids read as false.
    pub fn is_in_stock(&self, id: ProductId) -> bool {
        self.get(id).map(|p| p.stock.any_available()).unwrap_or(false)
    }

    /// True when the given size bucket holds stock. Unknown ids read as false.
    pub fn is_size_available(&self, id: ProductId, size: Size) -> bool {
        self.get(id).map(|p| p.stock.get(size) > 0).unwrap_or(false)
    }

    /// Total units across all sizes of one product.
    pub fn total_stock(&self, id: ProductId) -> Result<u32> {
        Ok(self.get(id)?.stock.total())
    }

    /// Total units across the entire catalog.
    pub fn total_stock_all(&self) -> u32 {
        self.products.iter().map(|p| p.stock.total()).sum()
    }

    /// Sum over products of price times total stock.
    pub fn total_inventory_value(&self) -> Money {
        self.products
            .iter()
            .map(|p| p.price.times(p.stock.total()))
            .sum()
    }

    /// Products with some stock but fewer total units than the threshold.
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                let total = p.stock.total();
                total > 0 && total < threshold
            })
            .collect()
    }

    /// Products with no stock in any size.
    pub fn out_of_stock(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock.total() == 0)
            .collect()
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Products matching a case-insensitive name query, an optional category
    /// and a stock-status filter.
    pub fn filter(
        &self,
        query: &str,
        category: Option<&str>,
        stock: StockFilter,
        low_threshold: u32,
    ) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                if !query.is_empty() && !p.name.to_lowercase().contains(&query) {
                    return false;
                }
                if let Some(cat) = category {
                    if p.category != cat {
                        return false;
                    }
                }
                let total = p.stock.total();
                match stock {
                    StockFilter::All => true,
                    StockFilter::InStock => total > 0,
                    StockFilter::Low => total > 0 && total < low_threshold,
                    StockFilter::Out => total == 0,
                }
            })
            .collect()
    }

    /// Test seam: replaces one product's entire stock map without persisting.
    #[cfg(test)]
    pub(crate) fn set_stock_map(&mut self, id: ProductId, stock: crate::models::StockMap) {
        if let Ok(product) = self.get_mut(id) {
            product.stock = stock;
        }
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.products)?;
        self.store.save(CATALOG_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StockMap;
    use crate::store::MemoryStore;

    fn create_test_catalog() -> ProductCatalog {
        ProductCatalog::load_or_seed(Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_load_or_seed_seeds_once() {
        let store = Arc::new(MemoryStore::new());
        let catalog = ProductCatalog::load_or_seed(store.clone()).unwrap();
        assert_eq!(catalog.products().len(), 8);

        // The seed itself is written through.
        let reloaded = ProductCatalog::load_or_seed(store).unwrap();
        assert_eq!(reloaded.products().len(), 8);
        assert_eq!(reloaded.get(1).unwrap().name, "Polo Shirt");
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = create_test_catalog();
        assert!(matches!(catalog.get(99), Err(Error::NotFound(99))));
    }

    #[test]
    fn test_update_price_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut catalog = ProductCatalog::load_or_seed(store.clone()).unwrap();

        catalog.update_price(1, Money::from_major(525)).unwrap();
        assert_eq!(catalog.get(1).unwrap().price, Money::from_major(525));

        let reloaded = ProductCatalog::load_or_seed(store).unwrap();
        assert_eq!(reloaded.get(1).unwrap().price, Money::from_major(525));
    }

    #[test]
    fn test_update_price_unknown_id_is_an_error() {
        let mut catalog = create_test_catalog();
        let result = catalog.update_price(99, Money::from_major(10));
        assert!(matches!(result, Err(Error::NotFound(99))));
    }

    #[test]
    fn test_update_stock_sets_single_bucket() {
        let mut catalog = create_test_catalog();
        let before_l = catalog.get(1).unwrap().stock.get(Size::L);

        catalog.update_stock(1, Size::M, 7).unwrap();

        let product = catalog.get(1).unwrap();
        assert_eq!(product.stock.get(Size::M), 7);
        assert_eq!(product.stock.get(Size::L), before_l);
    }

    #[test]
    fn test_decrease_stock_guards_against_overselling() {
        let mut catalog = create_test_catalog();
        catalog.update_stock(1, Size::M, 5).unwrap();

        let result = catalog.decrease_stock(1, Size::M, 10);
        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                requested: 10,
                available: 5
            })
        ));
        // The bucket is untouched.
        assert_eq!(catalog.get(1).unwrap().stock.get(Size::M), 5);

        catalog.decrease_stock(1, Size::M, 5).unwrap();
        assert_eq!(catalog.get(1).unwrap().stock.get(Size::M), 0);
    }

    #[test]
    fn test_availability_queries() {
        let mut catalog = create_test_catalog();
        assert!(catalog.is_in_stock(1));
        assert!(catalog.is_size_available(1, Size::M));
        assert!(!catalog.is_in_stock(99));
        assert!(!catalog.is_size_available(99, Size::M));

        for size in Size::ALL {
            catalog.update_stock(2, size, 0).unwrap();
        }
        assert!(!catalog.is_in_stock(2));
        assert!(!catalog.is_size_available(2, Size::S));
    }

    #[test]
    fn test_total_stock_matches_buckets() {
        let catalog = create_test_catalog();
        let product = catalog.get(1).unwrap();
        let summed: u32 = product.stock.iter().map(|(_, c)| c).sum();
        assert_eq!(catalog.total_stock(1).unwrap(), summed);
        assert_eq!(catalog.total_stock(1).unwrap(), 83);
    }

    #[test]
    fn test_inventory_value() {
        let store = Arc::new(MemoryStore::new());
        let mut catalog = ProductCatalog::load_or_seed(store).unwrap();
        // Collapse to a single known product worth of stock.
        for p in 1..=8 {
            for size in Size::ALL {
                catalog.update_stock(p, size, 0).unwrap();
            }
        }
        catalog.update_stock(1, Size::M, 3).unwrap();
        // Product 1 costs $489.
        assert_eq!(catalog.total_inventory_value(), Money::from_major(489 * 3));
        assert_eq!(catalog.total_stock_all(), 3);
    }

    #[test]
    fn test_low_and_out_of_stock_filters() {
        let mut catalog = create_test_catalog();
        for size in Size::ALL {
            catalog.update_stock(3, size, 0).unwrap();
        }
        catalog.set_stock_map(4, StockMap::from_counts([(Size::M, 2)]));

        let out: Vec<_> = catalog.out_of_stock().iter().map(|p| p.id).collect();
        assert_eq!(out, vec![3]);

        let low: Vec<_> = catalog.low_stock(30).iter().map(|p| p.id).collect();
        assert!(low.contains(&4));
        assert!(!low.contains(&3)); // zero stock is "out", not "low"

        // Seed product 1 holds 83 units, well above the threshold.
        assert!(!low.contains(&1));
    }

    #[test]
    fn test_categories_and_filter() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.categories(), vec!["Shirts", "Outerwear", "Pants"]);

        let polos = catalog.filter("polo", None, StockFilter::All, 30);
        let ids: Vec<_> = polos.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);

        let pants = catalog.filter("", Some("Pants"), StockFilter::InStock, 30);
        let ids: Vec<_> = pants.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn test_stock_filter_labels() {
        for filter in [
            StockFilter::All,
            StockFilter::InStock,
            StockFilter::Low,
            StockFilter::Out,
        ] {
            assert_eq!(StockFilter::from_str(filter.as_str()), Some(filter));
        }
        assert_eq!(StockFilter::from_str("backorder"), None);
    }
}
