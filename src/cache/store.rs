//! Cache Store Module
//!
//! In-memory cache engine combining HashMap storage with LRU tracking and TTL
//! expiration. `InMemoryCache` wraps it behind the async `Cache` contract.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{CacheError, CacheResult};

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    max_entries: usize,
    /// Applied when a write carries no TTL of its own
    default_ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a value, replacing any previous one and resetting its TTL.
    ///
    /// At capacity, the least recently used entry is evicted first.
    pub fn set(&mut self, key: String, value: String, ttl: Option<Duration>) -> CacheResult<()> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key must be 1..={} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            match self.lru.evict_oldest() {
                Some(evicted_key) => {
                    self.entries.remove(&evicted_key);
                    self.stats.record_eviction();
                }
                None => {
                    return Err(CacheError::CacheFull(
                        "Cache is full and eviction failed".to_string(),
                    ));
                }
            }
        }

        let entry = CacheEntry::new(value, Some(ttl.unwrap_or(self.default_ttl)));
        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns the live value for `key`, counting a hit or a miss.
    ///
    /// An expired entry is dropped on access and counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if self.drop_if_expired(key) {
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Existence probe; does not touch hit/miss counters or LRU order.
    pub fn contains(&mut self, key: &str) -> bool {
        !self.drop_if_expired(key) && self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes an entry; returns whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == TTL ==
    /// Remaining lifetime of a live entry.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(CacheEntry::ttl_remaining)
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn drop_if_expired(&mut self, key: &str) -> bool {
        let expired = self.entries.get(key).is_some_and(CacheEntry::is_expired);
        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        expired
    }
}
