//! Persistence seam for the engine's write-through snapshots
//!
//! Each component owns one namespaced key and rewrites its full blob
//! after every mutation. The store is deliberately dumb: opaque bytes in,
//! opaque bytes out; serialization stays with the components.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::Result;

/// Blob key for the product catalog collection.
pub const CATALOG_KEY: &str = "storefront.catalog";

/// Blob key for the cart line collection.
pub const CART_KEY: &str = "storefront.cart";

/// Blob key for the wishlist collection.
pub const WISHLIST_KEY: &str = "storefront.wishlist";

/// Abstract key-value storage for collection snapshots.
pub trait StateStore: Send + Sync {
    /// Loads the blob stored under a key. Returns None if absent.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Writes the blob stored under a key, replacing any previous value.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<()>;
}
