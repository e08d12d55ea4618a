//! Wishlist: an idempotent membership set of product snapshots

use crate::models::{Product, ProductId};
use crate::store::{StateStore, WISHLIST_KEY};
use crate::Result;
use std::sync::Arc;

/// Owns the wishlist membership set.
///
/// Entries are product snapshots keyed by id with set semantics; insertion
/// order is preserved for display. Every mutation rewrites the full list
/// through the injected store.
pub struct WishlistSet {
    items: Vec<Product>,
    store: Arc<dyn StateStore>,
}

impl WishlistSet {
    /// Loads the persisted wishlist, starting empty when no blob exists.
    pub fn load(store: Arc<dyn StateStore>) -> Result<Self> {
        let items = match store.load(WISHLIST_KEY)? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => Vec::new(),
        };
        Ok(Self { items, store })
    }

    /// Current entries in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the wishlist holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the product is a member.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Adds a product snapshot; a second add of the same id is a no-op.
    pub fn add(&mut self, product: &Product) -> Result<()> {
        if self.contains(product.id) {
            return Ok(());
        }
        self.items.push(product.clone());
        self.persist()
    }

    /// Removes a product by id; removing a non-member is a no-op.
    pub fn remove(&mut self, product_id: ProductId) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|p| p.id != product_id);
        if self.items.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Adds the product if absent, removes it if present. Returns the
    /// resulting membership state.
    pub fn toggle(&mut self, product: &Product) -> Result<bool> {
        if self.contains(product.id) {
            self.remove(product.id)?;
            Ok(false)
        } else {
            self.add(product)?;
            Ok(true)
        }
    }

    /// Empties the wishlist.
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.items)?;
        self.store.save(WISHLIST_KEY, &bytes)
    }
}
