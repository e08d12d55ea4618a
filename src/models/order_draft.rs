//! Finalized checkout payload handed to the order-submission collaborator

use crate::config::Policy;
use crate::models::{CartLine, Money};
use serde::{Deserialize, Serialize};

/// The derived charges for a cart at a point in time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of line totals at snapshotted prices
    pub subtotal: Money,
    /// Flat fee, waived above the free-shipping threshold and for empty carts
    pub shipping: Money,
    /// Sales tax on the subtotal
    pub tax: Money,
    /// Subtotal plus shipping plus tax
    pub total: Money,
}

impl OrderTotals {
    /// Computes the charges for a subtotal under the given policy.
    pub fn compute(subtotal: Money, policy: &Policy) -> Self {
        let shipping = if subtotal.is_zero() || subtotal > policy.free_shipping_threshold {
            Money::ZERO
        } else {
            policy.shipping_fee
        };
        let tax = subtotal.percent_bps(policy.tax_rate_bps);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// A finalized order: the cart lines frozen at checkout time plus the
/// computed charges. This is what the out-of-process order system receives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderDraft {
    /// Unique identifier for the order
    pub order_id: String,
    /// Unix timestamp when the draft was finalized
    pub created_timestamp: u64,
    /// The cart lines being purchased
    pub lines: Vec<CartLine>,
    /// Charges computed at finalization
    pub totals: OrderTotals,
}

impl OrderDraft {
    /// Creates a draft over the given lines
    pub fn new(
        order_id: String,
        created_timestamp: u64,
        lines: Vec<CartLine>,
        totals: OrderTotals,
    ) -> Self {
        Self {
            order_id,
            created_timestamp,
            lines,
            totals,
        }
    }
}
