//! Shared in-memory cache backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{Cache, CacheStats, CacheStore};
use crate::config::Config;
use crate::error::CacheResult;

/// `CacheStore` behind an async lock, cloneable across handlers and tasks.
#[derive(Clone, Debug)]
pub struct InMemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl InMemoryCache {
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries, default_ttl))),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_entries, Duration::from_secs(config.cache_ttl))
    }

    /// Handle to the underlying engine, for the cleanup task.
    pub fn shared(&self) -> Arc<RwLock<CacheStore>> {
        self.store.clone()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.store.read().await.ttl_remaining(key)
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn exists(&self, key: &str) -> CacheResult<bool> {
        // write lock: an expired entry is dropped on probe
        Ok(self.store.write().await.contains(key))
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        self.store
            .write()
            .await
            .set(key.to_string(), value, Some(ttl))
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.store.write().await.delete(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_cache_contract() {
        let cache = InMemoryCache::new(10, Duration::from_secs(600));

        assert!(!cache.exists("k").await.unwrap());
        cache.set("k", "v".to_string(), Duration::from_secs(5)).await.unwrap();
        assert!(cache.exists("k").await.unwrap());
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));

        cache.delete("k").await.unwrap();
        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_in_memory_cache_honors_write_ttl() {
        let cache = InMemoryCache::new(10, Duration::from_secs(600));
        cache.set("k", "v".to_string(), Duration::from_secs(5)).await.unwrap();

        let remaining = cache.ttl_remaining("k").await.unwrap();
        assert!(remaining <= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = InMemoryCache::new(10, Duration::from_secs(600));
        let other = cache.clone();
        cache.set("k", "v".to_string(), Duration::from_secs(5)).await.unwrap();

        assert_eq!(other.len().await, 1);
        other.get("k").await.unwrap();
        assert_eq!(cache.stats().await.hits, 1);
    }
}
