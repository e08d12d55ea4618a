//! Admin-facing façade: price and stock edits, inventory overview

use crate::config::Policy;
use crate::core::catalog::ProductCatalog;
use crate::core::stock_editor::AdminStockEditor;
use crate::models::{Money, ProductId, Size};
use crate::{Error, Result};

/// The dashboard numbers for the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    /// Number of products in the catalog
    pub product_count: usize,
    /// Total units across all products and sizes
    pub total_stock: u32,
    /// Products with some stock below the low-stock threshold
    pub low_stock_count: usize,
    /// Products with no stock in any size
    pub out_of_stock_count: usize,
    /// Sum over products of price times total stock
    pub inventory_value: Money,
}

/// API for administrators to edit the catalog.
///
/// Form input arrives as text; this façade is the parse boundary, so the
/// engine below it only ever sees well-typed amounts and counts.
pub struct AdminApi<'a> {
    catalog: &'a mut ProductCatalog,
    policy: Policy,
}

impl<'a> AdminApi<'a> {
    /// Creates an admin façade over a catalog
    pub fn new(catalog: &'a mut ProductCatalog, policy: Policy) -> Self {
        Self { catalog, policy }
    }

    /// Parses a price from form input (`"$489"`, `"10.99"`) and applies it.
    pub fn set_price_from_input(&mut self, id: ProductId, input: &str) -> Result<()> {
        let price = Money::parse(input)
            .ok_or_else(|| Error::InvalidQuantity(format!("unparseable price: {input:?}")))?;
        self.catalog.update_price(id, price)
    }

    /// Parses a stock count from form input and applies it to one bucket.
    /// Negative and malformed text is rejected, never clamped.
    pub fn set_stock_from_input(&mut self, id: ProductId, size: Size, input: &str) -> Result<()> {
        let count: u32 = input
            .trim()
            .parse()
            .map_err(|_| Error::InvalidQuantity(format!("unparseable stock count: {input:?}")))?;
        self.catalog.update_stock(id, size, count)
    }

    /// Opens a batch stock-editing session over one product.
    pub fn edit_stock(&self, id: ProductId) -> Result<AdminStockEditor> {
        Ok(AdminStockEditor::open(self.catalog.get(id)?))
    }

    /// Commits a batch stock-editing session back into the catalog.
    pub fn commit_stock(&mut self, editor: AdminStockEditor) -> Result<()> {
        editor.commit(self.catalog)
    }

    /// Computes the dashboard numbers under the active policy.
    pub fn inventory_overview(&self) -> InventoryReport {
        InventoryReport {
            product_count: self.catalog.products().len(),
            total_stock: self.catalog.total_stock_all(),
            low_stock_count: self.catalog.low_stock(self.policy.low_stock_threshold).len(),
            out_of_stock_count: self.catalog.out_of_stock().len(),
            inventory_value: self.catalog.total_inventory_value(),
        }
    }
}
