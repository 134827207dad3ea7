//! Fail-fast cache decorator.
//!
//! Bounds every command of the wrapped cache with a fixed timeout so a slow
//! or hung backend surfaces as `CacheError::Timeout` instead of stalling the
//! request. There is no retry.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::Cache;
use crate::error::{CacheError, CacheResult};

#[derive(Debug, Clone)]
pub struct TimeoutCache<C> {
    inner: C,
    timeout: Duration,
}

impl<C: Cache> TimeoutCache<C> {
    pub fn new(inner: C, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    async fn bounded<T>(&self, op: impl Future<Output = CacheResult<T>>) -> CacheResult<T> {
        tokio::time::timeout(self.timeout, op)
            .await
            .unwrap_or(Err(CacheError::Timeout(self.timeout)))
    }
}

#[async_trait]
impl<C: Cache> Cache for TimeoutCache<C> {
    async fn exists(&self, key: &str) -> CacheResult<bool> {
        self.bounded(self.inner.exists(key)).await
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.bounded(self.inner.get(key)).await
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        self.bounded(self.inner.set(key, value, ttl)).await
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.bounded(self.inner.delete(key)).await
    }
}
