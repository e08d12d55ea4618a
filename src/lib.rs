pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod store;

/// Re-export important types for easier access
pub use crate::models::{CartLine, Money, OrderDraft, OrderTotals, Product, ProductId, Size, StockMap};

pub use crate::api::{AdminApi, InventoryReport, OrderSubmitter, Storefront};
pub use crate::config::Policy;
pub use crate::core::cart::CartLedger;
pub use crate::core::catalog::{ProductCatalog, StockFilter};
pub use crate::core::error::Error;
pub use crate::core::stock_editor::{AdminStockEditor, BulkStockOp};
pub use crate::core::wishlist::WishlistSet;
pub use crate::store::{JsonFileStore, MemoryStore, StateStore};

/// Result type used throughout the engine
pub type Result<T> = std::result::Result<T, Error>;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
