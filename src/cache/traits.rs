use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheResult;

/// Key-value cache contract used by the tutorial service.
///
/// Values are opaque JSON text. Implementations fail fast; any error is a
/// soft fault the caller treats as a miss.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns whether a live value is stored under `key`.
    async fn exists(&self, key: &str) -> CacheResult<bool>;

    /// Gets a value by key.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value with the given TTL, replacing any previous value.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;

    /// Removes a value. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> CacheResult<()>;
}
