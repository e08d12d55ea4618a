//! Commerce policy constants

use crate::models::Money;

/// Order subtotal above which shipping is free, in cents ($500).
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 500_00;

/// Flat shipping fee below the free threshold, in cents ($25).
pub const SHIPPING_FEE_CENTS: i64 = 25_00;

/// Sales tax rate in basis points (8%).
pub const TAX_RATE_BPS: u32 = 800;

/// Total units below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 30;

/// Pricing and inventory policy applied across the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Subtotal above which shipping is waived
    pub free_shipping_threshold: Money,
    /// Flat shipping fee charged below the threshold
    pub shipping_fee: Money,
    /// Sales tax rate in basis points
    pub tax_rate_bps: u32,
    /// Total-unit count below which a product is flagged as low stock
    pub low_stock_threshold: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::from_minor(FREE_SHIPPING_THRESHOLD_CENTS),
            shipping_fee: Money::from_minor(SHIPPING_FEE_CENTS),
            tax_rate_bps: TAX_RATE_BPS,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}
