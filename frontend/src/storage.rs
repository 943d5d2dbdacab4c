use gloo_storage::{LocalStorage, Storage};
use shared::{KeyValueStore, Result, SharedError};

/// `KeyValueStore` backed by the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageBackend;

impl KeyValueStore for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| SharedError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| SharedError::Storage(format!("{:?}", e)))
    }
}
