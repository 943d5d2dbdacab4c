use crate::storage::KeyValueStore;
use crate::{Result, SharedError};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Set of favorited contest ids, in their string form
pub type FavoriteIds = BTreeSet<String>;

/// Decodes a stored favorites record (a JSON array of id strings).
pub fn decode_favorites(raw: &str) -> Result<FavoriteIds> {
    serde_json::from_str::<Vec<String>>(raw)
        .map(|ids| ids.into_iter().collect())
        .map_err(|e| SharedError::StorageCorruption(e.to_string()))
}

pub fn encode_favorites(ids: &FavoriteIds) -> Result<String> {
    serde_json::to_string(ids).map_err(|e| SharedError::Storage(e.to_string()))
}

/// Favorite contests, loaded once from storage and written back in full on
/// every toggle.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    storage: S,
    key: String,
    ids: FavoriteIds,
}

impl<S: PartialEq> PartialEq for FavoritesStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.ids == other.ids && self.storage == other.storage
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Loads the record stored under `key`. A missing, unreadable or corrupt
    /// record yields an empty set.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match storage.get_item(&key) {
            Ok(Some(raw)) => decode_favorites(&raw).unwrap_or_else(|e| {
                warn!("Discarding favorites record {}: {}", key, e);
                FavoriteIds::new()
            }),
            Ok(None) => FavoriteIds::new(),
            Err(e) => {
                warn!("Could not read favorites record {}: {}", key, e);
                FavoriteIds::new()
            }
        };
        debug!("Loaded {} favorites", ids.len());
        Self { storage, key, ids }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id` and persists the whole set.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
        debug!("Toggled favorite {} (now {} favorites)", id, self.ids.len());
        if let Err(e) = self.persist() {
            warn!("Failed to persist favorites: {}", e);
        }
    }

    pub fn ids(&self) -> &FavoriteIds {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let encoded = encode_favorites(&self.ids)?;
        self.storage.set_item(&self.key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use test_log::test;

    const KEY: &str = "favorites";

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(SharedError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_fresh_store_toggle_persists() {
        let storage = MemoryStorage::new();
        let mut store = FavoritesStore::load(storage.clone(), KEY);
        assert!(store.is_empty());

        store.toggle("1");

        assert!(store.is_favorite("1"));
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some(r#"["1"]"#));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let storage = MemoryStorage::with_item(KEY, r#"["5","9"]"#);
        let mut store = FavoritesStore::load(storage.clone(), KEY);

        store.toggle("5");
        assert!(!store.is_favorite("5"));
        store.toggle("5");
        assert!(store.is_favorite("5"));

        store.toggle("7");
        store.toggle("7");
        assert!(!store.is_favorite("7"));
        assert_eq!(store.len(), 2);
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some(r#"["5","9"]"#));
    }

    #[test]
    fn test_corrupt_record_loads_empty() {
        let storage = MemoryStorage::with_item(KEY, "{not json");
        let store = FavoritesStore::load(storage, KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_non_string_ids_are_corrupt() {
        assert!(matches!(
            decode_favorites("[1, 2]"),
            Err(SharedError::StorageCorruption(_))
        ));
    }

    #[test]
    fn test_reload_sees_previous_session() {
        let storage = MemoryStorage::new();
        {
            let mut store = FavoritesStore::load(storage.clone(), KEY);
            store.toggle("1890");
            store.toggle("42");
        }
        let store = FavoritesStore::load(storage, KEY);
        let ids: Vec<&str> = store.ids().iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["1890", "42"]);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut store = FavoritesStore::load(ReadOnlyStorage, KEY);
        store.toggle("3");
        assert!(store.is_favorite("3"));
    }
}
