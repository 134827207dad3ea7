//! Cache Statistics Module
//!
//! Hit/miss/eviction counters of the in-memory cache engine.

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Reads that returned a live value
    pub hits: u64,
    /// Reads that found nothing or an expired value
    pub misses: u64,
    /// Entries dropped to make room under the capacity bound
    pub evictions: u64,
    /// Entries dropped because their TTL elapsed
    pub expirations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// hits / (hits + misses), or 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
