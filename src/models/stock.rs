use crate::models::Size;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-size stock counts for a single product.
///
/// Invariant: the map holds an entry for every [`Size`]. Constructors
/// zero-fill, and [`StockMap::normalize`] repairs maps rehydrated from
/// older persisted blobs that may be missing buckets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct StockMap(BTreeMap<Size, u32>);

impl StockMap {
    /// Creates a stock map with every bucket at zero.
    pub fn new() -> Self {
        let mut map = BTreeMap::new();
        for size in Size::ALL {
            map.insert(size, 0);
        }
        StockMap(map)
    }

    /// Creates a stock map from explicit counts, zero-filling any size not
    /// listed.
    pub fn from_counts(counts: impl IntoIterator<Item = (Size, u32)>) -> Self {
        let mut stock = StockMap::new();
        for (size, count) in counts {
            stock.0.insert(size, count);
        }
        stock
    }

    /// Inserts zero entries for any missing size.
    pub fn normalize(&mut self) {
        for size in Size::ALL {
            self.0.entry(size).or_insert(0);
        }
    }

    /// The count held in one bucket.
    pub fn get(&self, size: Size) -> u32 {
        self.0.get(&size).copied().unwrap_or(0)
    }

    /// Sets one bucket's count.
    pub fn set(&mut self, size: Size, count: u32) {
        self.0.insert(size, count);
    }

    /// Sum of all buckets.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// True when any bucket holds stock.
    pub fn any_available(&self) -> bool {
        self.0.values().any(|&count| count > 0)
    }

    /// Iterates buckets smallest size first.
    pub fn iter(&self) -> impl Iterator<Item = (Size, u32)> + '_ {
        self.0.iter().map(|(&size, &count)| (size, count))
    }
}
