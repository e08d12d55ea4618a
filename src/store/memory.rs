use crate::store::StateStore;
use crate::Result;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`StateStore`], the default for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| crate::Error::Store("memory store mutex poisoned".into()))?;
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| crate::Error::Store("memory store mutex poisoned".into()))?;
        blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
