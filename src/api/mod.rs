//! Role-specific façades over the engine

pub mod admin;
pub mod shopper;

pub use admin::{AdminApi, InventoryReport};
pub use shopper::{OrderSubmitter, Storefront};
