//! Shopper-facing façade over the engine components

use crate::api::admin::AdminApi;
use crate::config::Policy;
use crate::core::cart::CartLedger;
use crate::core::catalog::ProductCatalog;
use crate::core::wishlist::WishlistSet;
use crate::models::{OrderDraft, OrderTotals, ProductId, Size};
use crate::store::StateStore;
use crate::{Error, Result};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Seam for the out-of-scope order/payment system: receives a finalized
/// draft and performs the side-effecting submission.
pub trait OrderSubmitter {
    /// Submits a finalized order
    fn submit(&self, draft: &OrderDraft) -> Result<()>;
}

/// One storefront session: the catalog, cart and wishlist constructed
/// together over a shared store, plus the commerce policy.
///
/// Built once at process or session start and passed by reference; the
/// components are never reachable through ambient globals.
pub struct Storefront {
    catalog: ProductCatalog,
    cart: CartLedger,
    wishlist: WishlistSet,
    policy: Policy,
}

impl Storefront {
    /// Opens a storefront over a store with the default policy.
    pub fn open(store: Arc<dyn StateStore>) -> Result<Self> {
        Self::open_with_policy(store, Policy::default())
    }

    /// Opens a storefront over a store with an explicit policy.
    pub fn open_with_policy(store: Arc<dyn StateStore>, policy: Policy) -> Result<Self> {
        Ok(Self {
            catalog: ProductCatalog::load_or_seed(store.clone())?,
            cart: CartLedger::load(store.clone())?,
            wishlist: WishlistSet::load(store)?,
            policy,
        })
    }

    /// The product catalog.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// The cart ledger.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The wishlist.
    pub fn wishlist(&self) -> &WishlistSet {
        &self.wishlist
    }

    /// The active commerce policy.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// The admin façade over this storefront's catalog.
    pub fn admin(&mut self) -> AdminApi<'_> {
        AdminApi::new(&mut self.catalog, self.policy.clone())
    }

    /// Adds units of a product and size to the cart.
    ///
    /// The size bucket must currently hold stock; inside the ledger stock
    /// stays advisory, the guard lives here at the API boundary.
    pub fn add_to_cart(&mut self, id: ProductId, size: Size, quantity: u32) -> Result<()> {
        let product = self.catalog.get(id)?.clone();
        let available = product.stock.get(size);
        if available == 0 {
            return Err(Error::InsufficientStock {
                requested: quantity,
                available,
            });
        }
        self.cart.add_line(&product, size, quantity)
    }

    /// Removes a cart line.
    pub fn remove_from_cart(&mut self, id: ProductId, size: Size) -> Result<()> {
        self.cart.remove_line(id, size)
    }

    /// Replaces a cart line's quantity; zero removes the line.
    pub fn set_cart_quantity(&mut self, id: ProductId, size: Size, quantity: u32) -> Result<()> {
        self.cart.set_quantity(id, size, quantity)
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) -> Result<()> {
        self.cart.clear()
    }

    /// Adds or removes a product from the wishlist, returning the resulting
    /// membership state.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> Result<bool> {
        let product = self.catalog.get(id)?.clone();
        self.wishlist.toggle(&product)
    }

    /// Charges for the current cart under the active policy.
    pub fn totals(&self) -> OrderTotals {
        self.cart.totals(&self.policy)
    }

    /// Finalizes the cart into an order: verifies stock covers every line,
    /// decrements the sold units, submits through the collaborator and
    /// clears the cart.
    ///
    /// All-or-nothing: a failed decrement or a rejected submission restores
    /// every bucket already decremented and leaves the cart as it was.
    pub fn checkout(&mut self, submitter: &dyn OrderSubmitter) -> Result<OrderDraft> {
        if self.cart.line_count() == 0 {
            return Err(Error::EmptyCart);
        }

        // Verify before touching anything. Single-threaded, so the check
        // and the decrements below cannot interleave with another caller.
        for line in self.cart.lines() {
            let available = self.catalog.get(line.product_id)?.stock.get(line.size);
            if available < line.quantity {
                return Err(Error::InsufficientStock {
                    requested: line.quantity,
                    available,
                });
            }
        }

        let lines = self.cart.lines().to_vec();
        let mut decremented: Vec<(ProductId, Size, u32)> = Vec::new();
        for line in &lines {
            if let Err(e) = self
                .catalog
                .decrease_stock(line.product_id, line.size, line.quantity)
            {
                self.restore_buckets(&decremented);
                return Err(e);
            }
            decremented.push((line.product_id, line.size, line.quantity));
        }

        let draft = OrderDraft::new(
            Uuid::new_v4().to_string(),
            Utc::now().timestamp() as u64,
            lines,
            self.cart.totals(&self.policy),
        );

        if let Err(e) = submitter.submit(&draft) {
            log::warn!("order {} submission failed: {}", draft.order_id, e);
            self.restore_buckets(&decremented);
            return Err(e);
        }

        self.cart.clear()?;
        log::info!(
            "order {} placed: {} lines, {}",
            draft.order_id,
            draft.lines.len(),
            draft.totals.total
        );
        Ok(draft)
    }

    fn restore_buckets(&mut self, decremented: &[(ProductId, Size, u32)]) {
        for &(id, size, quantity) in decremented {
            let restored = self
                .catalog
                .get(id)
                .map(|p| p.stock.get(size) + quantity)
                .unwrap_or(quantity);
            if let Err(e) = self.catalog.update_stock(id, size, restored) {
                log::warn!("failed to restore product {} size {}: {}", id, size, e);
            }
        }
    }
}
