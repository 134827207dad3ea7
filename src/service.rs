//! Cache-aside tutorial service.
//!
//! Reads probe the cache and fall back to the store; writes and deletes go to
//! the store first and then refresh or invalidate the cache. Every cache fault
//! is logged and treated as a miss. Only store errors reach the caller.
//!
//! Writes and deletes advance a write epoch. A read captures the epoch before
//! it touches the store and only fills the cache if the epoch is unchanged,
//! so a late fill can never replace what a newer save or delete left behind.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{Cache, CacheKeys};
use crate::config::CachePolicy;
use crate::error::{CacheError, CacheResult, StoreResult};
use crate::models::{Tutorial, TutorialDraft};
use crate::store::TutorialStore;

/// Mediates between callers, the authoritative store and the cache.
pub struct TutorialService<S, C> {
    store: Arc<S>,
    cache: Arc<C>,
    keys: CacheKeys,
    ttl: Duration,
    populate_in_background: bool,
    epoch: Arc<Mutex<u64>>,
}

impl<S, C> Clone for TutorialService<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            cache: self.cache.clone(),
            keys: self.keys.clone(),
            ttl: self.ttl,
            populate_in_background: self.populate_in_background,
            epoch: self.epoch.clone(),
        }
    }
}

impl<S, C> TutorialService<S, C>
where
    S: TutorialStore + 'static,
    C: Cache + 'static,
{
    pub fn new(store: Arc<S>, cache: Arc<C>, policy: CachePolicy) -> Self {
        Self {
            store,
            cache,
            keys: CacheKeys::new(policy.key_prefix),
            ttl: policy.ttl,
            populate_in_background: policy.populate_in_background,
            epoch: Arc::new(Mutex::new(0)),
        }
    }

    // == Get By Id ==
    /// Returns the tutorial, from the cache when possible.
    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Tutorial>> {
        let key = self.keys.tutorial(id);

        if let Some(tutorial) = self.probe::<Tutorial>(&key).await {
            info!(tutorial_id = id, "Fetched tutorial from cache");
            return Ok(Some(tutorial));
        }

        info!(tutorial_id = id, "Fetching tutorial from store");
        let seen = self.current_epoch().await;
        let tutorial = self.store.find_by_id(id).await?;

        if let Some(t) = &tutorial {
            self.populate(key, t, seen).await;
        }

        Ok(tutorial)
    }

    // == Get All ==
    /// Returns every tutorial, from the cached snapshot when possible.
    pub async fn find_all(&self) -> StoreResult<Vec<Tutorial>> {
        let key = self.keys.all();

        if let Some(tutorials) = self.probe::<Vec<Tutorial>>(&key).await {
            info!(count = tutorials.len(), "Fetched all tutorials from cache");
            return Ok(tutorials);
        }

        info!("Fetching all tutorials from store");
        let seen = self.current_epoch().await;
        let tutorials = self.store.find_all().await?;
        self.populate(key, &tutorials, seen).await;

        Ok(tutorials)
    }

    // == Save ==
    /// Persists the tutorial, mirrors it into the cache and drops the snapshot.
    pub async fn save(&self, draft: TutorialDraft) -> StoreResult<Tutorial> {
        let saved = self.store.save(draft).await?;
        self.advance_epoch().await;
        let key = self.keys.tutorial(saved.id);

        match self.write(&key, &saved).await {
            Ok(()) => info!(tutorial_id = saved.id, "Stored tutorial in cache"),
            Err(err) => warn!(tutorial_id = saved.id, error = %err, "Could not store tutorial in cache"),
        }
        self.invalidate(&self.keys.all()).await;

        Ok(saved)
    }

    // == Delete ==
    /// Deletes from the store, then evicts the tutorial and the snapshot.
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.store.delete_by_id(id).await?;
        self.advance_epoch().await;

        self.invalidate(&self.keys.tutorial(id)).await;
        self.invalidate(&self.keys.all()).await;
        info!(tutorial_id = id, "Deleted tutorial");

        Ok(())
    }

    /// Store-only existence check. Leaves the cache untouched.
    pub async fn exists(&self, id: i64) -> StoreResult<bool> {
        Ok(self.store.find_by_id(id).await?.is_some())
    }

    // == Uncached Queries ==
    pub async fn find_by_published(&self, published: bool) -> StoreResult<Vec<Tutorial>> {
        self.store.find_by_published(published).await
    }

    pub async fn find_by_title_containing(&self, fragment: &str) -> StoreResult<Vec<Tutorial>> {
        self.store.find_by_title_containing(fragment).await
    }

    // == Cache Helpers ==

    /// Cache lookup that folds every failure mode into `None`.
    async fn probe<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.lookup(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key = %key, error = %err, "Cache unavailable, falling back to store");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = %key, error = %err, "Discarding undecodable cache entry");
                None
            }
        }
    }

    async fn lookup(&self, key: &str) -> CacheResult<Option<String>> {
        if !self.cache.exists(key).await? {
            return Ok(None);
        }
        self.cache.get(key).await
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> CacheResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|err| CacheError::Serialization(err.to_string()))?;
        self.cache.set(key, raw, self.ttl).await
    }

    async fn current_epoch(&self) -> u64 {
        *self.epoch.lock().await
    }

    /// Must run after the store write and before the cache is touched.
    async fn advance_epoch(&self) {
        let mut epoch = self.epoch.lock().await;
        *epoch = epoch.wrapping_add(1);
    }

    /// Best-effort cache fill after a store read taken at epoch `seen`.
    async fn populate<T: Serialize>(&self, key: String, value: &T, seen: u64) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %key, error = %err, "Could not encode value for cache");
                return;
            }
        };

        if self.populate_in_background {
            let cache = self.cache.clone();
            let epoch = self.epoch.clone();
            let ttl = self.ttl;
            tokio::spawn(async move {
                fill_if_current(cache.as_ref(), &epoch, seen, &key, raw, ttl).await;
            });
        } else {
            fill_if_current(self.cache.as_ref(), &self.epoch, seen, &key, raw, self.ttl).await;
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            warn!(key = %key, error = %err, "Could not invalidate cache entry");
        }
    }
}

/// Writes `raw` unless a save or delete has advanced the epoch past `seen`.
/// The epoch lock is held across the `set` so no write can slip in between.
async fn fill_if_current<C: Cache + ?Sized>(
    cache: &C,
    epoch: &Mutex<u64>,
    seen: u64,
    key: &str,
    raw: String,
    ttl: Duration,
) {
    let current = epoch.lock().await;
    if *current != seen {
        debug!(key = %key, "Skipping cache fill superseded by a newer write");
        return;
    }

    match cache.set(key, raw, ttl).await {
        Ok(()) => info!(key = %key, "Stored value in cache"),
        Err(err) => warn!(key = %key, error = %err, "Cache unavailable, skipping cache storage"),
    }
}
