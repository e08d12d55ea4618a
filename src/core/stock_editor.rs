//! Interactive batch editing of one product's stock map

use crate::core::catalog::ProductCatalog;
use crate::models::{Product, ProductId, Size, StockMap};
use crate::Result;

/// Units added or removed per bucket by the bulk increase/decrease ops.
pub const BULK_STEP: u32 = 10;

/// Bucket level set by the bulk restock op.
pub const RESTOCK_LEVEL: u32 = 20;

/// Uniform operation applied to every bucket of a working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkStockOp {
    /// Add [`BULK_STEP`] units to every bucket
    Increase,
    /// Remove [`BULK_STEP`] units from every bucket, clamping at zero
    Decrease,
    /// Set every bucket to [`RESTOCK_LEVEL`]
    Restock,
    /// Set every bucket to zero
    Reset,
}

impl BulkStockOp {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkStockOp::Increase => "increase",
            BulkStockOp::Decrease => "decrease",
            BulkStockOp::Restock => "restock",
            BulkStockOp::Reset => "reset",
        }
    }

    /// Converts a string to a BulkStockOp enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "increase" => Some(BulkStockOp::Increase),
            "decrease" => Some(BulkStockOp::Decrease),
            "restock" => Some(BulkStockOp::Restock),
            "reset" => Some(BulkStockOp::Reset),
            _ => None,
        }
    }
}

/// A batch-mutation session over one product's stock map.
///
/// Opening snapshots the current buckets into a working copy; edits stay
/// local until [`AdminStockEditor::commit`] writes them back through the
/// catalog. Dropping the editor (or calling
/// [`AdminStockEditor::discard`]) abandons the session without touching
/// the catalog.
pub struct AdminStockEditor {
    product_id: ProductId,
    working: StockMap,
}

impl AdminStockEditor {
    /// Opens an editing session over a product's current stock map.
    pub fn open(product: &Product) -> Self {
        Self {
            product_id: product.id,
            working: product.stock.clone(),
        }
    }

    /// The product this session edits.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// The working copy with edits applied so far.
    pub fn working(&self) -> &StockMap {
        &self.working
    }

    /// Sets one bucket in the working copy.
    pub fn set_bucket(&mut self, size: Size, value: u32) {
        self.working.set(size, value);
    }

    /// Applies a uniform operation to every bucket in the working copy.
    pub fn bulk_apply(&mut self, op: BulkStockOp) {
        for size in Size::ALL {
            let current = self.working.get(size);
            let next = match op {
                BulkStockOp::Increase => current + BULK_STEP,
                BulkStockOp::Decrease => current.saturating_sub(BULK_STEP),
                BulkStockOp::Restock => RESTOCK_LEVEL,
                BulkStockOp::Reset => 0,
            };
            self.working.set(size, next);
        }
    }

    /// Writes every bucket of the working copy back through the catalog,
    /// consuming the session.
    ///
    /// If a bucket write fails, buckets already written are restored from
    /// the pre-commit snapshot before the error is surfaced, so a partial
    /// commit never sticks.
    pub fn commit(self, catalog: &mut ProductCatalog) -> Result<()> {
        let previous = catalog.get(self.product_id)?.stock.clone();

        let mut written: Vec<Size> = Vec::new();
        for (size, count) in self.working.iter() {
            if let Err(e) = catalog.update_stock(self.product_id, size, count) {
                for &done in &written {
                    if let Err(rollback) =
                        catalog.update_stock(self.product_id, done, previous.get(done))
                    {
                        log::warn!(
                            "rollback of product {} size {} failed: {}",
                            self.product_id,
                            done,
                            rollback
                        );
                    }
                }
                return Err(e);
            }
            written.push(size);
        }
        log::debug!("committed stock edit for product {}", self.product_id);
        Ok(())
    }

    /// Abandons the working copy without touching the catalog.
    pub fn discard(self) {}
}
