//! Cart ledger: merge-or-insert line items keyed by product and size

use crate::config::Policy;
use crate::models::{CartLine, Money, OrderTotals, Product, ProductId, Size};
use crate::store::{StateStore, CART_KEY};
use crate::{Error, Result};
use std::sync::Arc;

/// Owns the cart line items.
///
/// Lines are keyed by `(product_id, size)`; adding an existing key merges
/// quantities instead of creating a second line. Each line carries a
/// snapshot of the product taken at add time, so the ledger never reads
/// live catalog state. Every mutation rewrites the full line list through
/// the injected store.
pub struct CartLedger {
    lines: Vec<CartLine>,
    store: Arc<dyn StateStore>,
}

impl CartLedger {
    /// Loads the persisted cart, starting empty when no blob exists.
    pub fn load(store: Arc<dyn StateStore>) -> Result<Self> {
        let lines = match store.load(CART_KEY)? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => Vec::new(),
        };
        Ok(Self { lines, store })
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds units of a product and size, merging into an existing line when
    /// one already holds that key.
    pub fn add_line(&mut self, product: &Product, size: Size, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity(
                "cart lines require at least one unit".into(),
            ));
        }

        match self.lines.iter_mut().find(|l| l.matches(product.id, size)) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine::snapshot(product, size, quantity)),
        }
        self.persist()?;
        log::debug!("cart add {}x product {} size {}", quantity, product.id, size);
        Ok(())
    }

    /// Deletes the line with the given key, if present.
    pub fn remove_line(&mut self, product_id: ProductId, size: Size) -> Result<()> {
        let before = self.lines.len();
        self.lines.retain(|l| !l.matches(product_id, size));
        if self.lines.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Replaces a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, size: Size, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return self.remove_line(product_id, size);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(product_id, size)) {
            line.quantity = quantity;
            self.persist()?;
        }
        Ok(())
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.persist()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals at the prices snapshotted when each line was added.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Derived charges for the current cart under the given policy.
    pub fn totals(&self, policy: &Policy) -> OrderTotals {
        OrderTotals::compute(self.subtotal(), policy)
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.lines)?;
        self.store.save(CART_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn create_test_product(id: ProductId, dollars: i64) -> Product {
        Product::new(
            id,
            format!("Product {id}"),
            "Shirts".to_string(),
            Money::from_major(dollars),
        )
    }

    fn create_test_ledger() -> CartLedger {
        CartLedger::load(Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_add_merges_same_key() {
        let mut cart = create_test_ledger();
        let p1 = create_test_product(1, 100);

        cart.add_line(&p1, Size::M, 3).unwrap();
        assert_eq!(cart.subtotal(), Money::from_major(300));

        cart.add_line(&p1, Size::M, 2).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.subtotal(), Money::from_major(500));
    }

    #[test]
    fn test_same_product_different_sizes_are_distinct_lines() {
        let mut cart = create_test_ledger();
        let p1 = create_test_product(1, 100);

        cart.add_line(&p1, Size::M, 1).unwrap();
        cart.add_line(&p1, Size::L, 1).unwrap();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_units(), 2);
    }

    #[test]
    fn test_add_zero_quantity_is_rejected() {
        let mut cart = create_test_ledger();
        let p1 = create_test_product(1, 100);
        assert!(matches!(
            cart.add_line(&p1, Size::M, 0),
            Err(Error::InvalidQuantity(_))
        ));
        assert_eq!(cart.line_count(), 0);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = create_test_ledger();
        let p1 = create_test_product(1, 100);

        cart.add_line(&p1, Size::M, 4).unwrap();
        cart.set_quantity(1, Size::M, 0).unwrap();
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total_units(), 0);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = create_test_ledger();
        let p1 = create_test_product(1, 50);

        cart.add_line(&p1, Size::S, 2).unwrap();
        cart.set_quantity(1, Size::S, 7).unwrap();
        assert_eq!(cart.lines()[0].quantity, 7);
        assert_eq!(cart.subtotal(), Money::from_major(350));
    }

    #[test]
    fn test_remove_missing_line_is_a_no_op() {
        let mut cart = create_test_ledger();
        cart.remove_line(42, Size::Xl).unwrap();
        assert_eq!(cart.line_count(), 0);
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut cart = create_test_ledger();
        let p1 = create_test_product(1, 100);
        let p2 = create_test_product(2, 200);

        cart.add_line(&p1, Size::M, 2).unwrap();
        cart.add_line(&p2, Size::L, 1).unwrap();
        cart.clear().unwrap();

        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn test_snapshot_price_survives_catalog_edits() {
        let mut cart = create_test_ledger();
        let mut p1 = create_test_product(1, 100);

        cart.add_line(&p1, Size::M, 1).unwrap();
        p1.price = Money::from_major(999);

        assert_eq!(cart.subtotal(), Money::from_major(100));
    }

    #[test]
    fn test_totals_policy() {
        let mut cart = create_test_ledger();
        let policy = Policy::default();

        cart.add_line(&create_test_product(1, 600), Size::M, 1).unwrap();
        let totals = cart.totals(&policy);
        assert_eq!(totals.shipping, Money::ZERO);
        assert_eq!(totals.tax, Money::from_major(48));

        cart.clear().unwrap();
        cart.add_line(&create_test_product(2, 400), Size::M, 1).unwrap();
        let totals = cart.totals(&policy);
        assert_eq!(totals.shipping, Money::from_major(25));
        assert_eq!(totals.tax, Money::from_major(32));
        assert_eq!(totals.total, Money::from_major(457));
    }

    #[test]
    fn test_write_through_survives_reload() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = CartLedger::load(store.clone()).unwrap();
        cart.add_line(&create_test_product(1, 100), Size::M, 2).unwrap();

        let reloaded = CartLedger::load(store).unwrap();
        assert_eq!(reloaded.line_count(), 1);
        assert_eq!(reloaded.total_units(), 2);
        assert_eq!(reloaded.subtotal(), Money::from_major(200));
    }
}
