use crate::Result;
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;

/// Key under which the contest list is cached
pub const CONTEST_LIST_KEY: &str = "contest.list";

/// Session cache for successful fetches.
///
/// Entries live as long as the cache object; there is no expiry. One instance
/// is built per app session and handed to whoever fetches, so tests can use a
/// fresh cache each.
pub struct ResponseCache<T: Clone> {
    entries: RefCell<HashMap<String, T>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<T: Clone> Default for ResponseCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ResponseCache<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Gets a cached value or runs `fetcher` and caches its successful result.
    /// Errors are returned as-is and leave the cache untouched.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetcher: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.get(key) {
            debug!("Cache hit for key: {}", key);
            return Ok(value);
        }

        debug!("Cache miss for key: {}, fetching...", key);
        let value = fetcher().await?;
        self.set(key.to_string(), value.clone());
        Ok(value)
    }

    /// Gets a value from cache, counting the lookup in the statistics
    pub fn get(&self, key: &str) -> Option<T> {
        let value = self.entries.borrow().get(key).cloned();
        match value {
            Some(_) => self.hits.set(self.hits.get() + 1),
            None => self.misses.set(self.misses.get() + 1),
        }
        value
    }

    pub fn set(&self, key: String, value: T) {
        self.entries.borrow_mut().insert(key, value);
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.borrow().len(),
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SharedError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cache_basic_operations() {
        let cache = ResponseCache::new();

        cache.set("test_key".to_string(), "test_value".to_string());
        assert_eq!(cache.get("test_key").as_deref(), Some("test_value"));

        cache.remove("test_key");
        assert!(cache.get("test_key").is_none());
    }

    #[test]
    fn test_cache_statistics() {
        let cache = ResponseCache::new();
        cache.set("key1".to_string(), 1);
        cache.set("key2".to_string(), 2);

        cache.get("key1");
        cache.get("missing");

        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 2,
                hits: 1,
                misses: 1
            }
        );

        cache.clear();
        assert_eq!(cache.stats().entries, 0);
    }

    #[tokio::test]
    async fn test_get_or_fetch_runs_fetcher_once() {
        let cache = ResponseCache::new();
        let calls = Cell::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_fetch(CONTEST_LIST_KEY, || async {
                    calls.set(calls.get() + 1);
                    Ok(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(value, vec![1, 2, 3]);
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(cache.stats().hits, 2);
    }

    #[tokio::test]
    async fn test_get_or_fetch_does_not_cache_errors() {
        let cache: ResponseCache<Vec<i32>> = ResponseCache::new();

        let err = cache
            .get_or_fetch(CONTEST_LIST_KEY, || async {
                Err(SharedError::NetworkFailure("offline".to_string()))
            })
            .await
            .unwrap_err();
        assert!(err.is_fetch_failure());
        assert_eq!(cache.stats().entries, 0);

        let value = cache
            .get_or_fetch(CONTEST_LIST_KEY, || async { Ok(vec![7]) })
            .await
            .unwrap();
        assert_eq!(value, vec![7]);
    }
}
