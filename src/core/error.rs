//! Custom error types for the engine

use crate::models::ProductId;
use thiserror::Error;

/// Main error type for the engine
#[derive(Error, Debug)]
pub enum Error {
    /// No product exists with the given id
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// A quantity or count was zero, negative or malformed
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A stock decrement asked for more units than the bucket holds
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// Units the caller asked to remove
        requested: u32,
        /// Units actually held in the bucket
        available: u32,
    },

    /// Checkout attempted over an empty cart
    #[error("Cart is empty")]
    EmptyCart,

    /// The backing state store failed a read or write
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
