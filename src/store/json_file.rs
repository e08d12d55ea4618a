use crate::store::StateStore;
use crate::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed [`StateStore`]: one JSON file per key under a directory.
///
/// Writes go through a temporary file and a rename so a crash mid-write
/// never leaves a half-written blob behind.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at the given directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are namespaced with dots; keep them filesystem-safe.
        let name: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        log::debug!("persisted {} ({} bytes)", key, bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_on_disk() {
        let _ = env_logger::try_init();
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        assert!(store.load("storefront.catalog").unwrap().is_none());
        store.save("storefront.catalog", b"[{\"id\":1}]").unwrap();

        // A second store over the same directory sees the blob.
        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.load("storefront.catalog").unwrap(),
            Some(b"[{\"id\":1}]".to_vec())
        );
    }

    #[test]
    fn test_keys_map_to_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        store.save("storefront.cart", b"a").unwrap();
        store.save("storefront.wishlist", b"b").unwrap();
        assert_eq!(store.load("storefront.cart").unwrap(), Some(b"a".to_vec()));
        assert_eq!(
            store.load("storefront.wishlist").unwrap(),
            Some(b"b".to_vec())
        );
    }
}
