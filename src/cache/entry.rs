//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value plus its expiry deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (JSON text)
    pub value: String,
    /// When the entry was written
    pub created_at: Instant,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    pub fn new(value: String, ttl: Option<Duration>) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: ttl.map(|ttl| now + ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current instant reaches its deadline, so a
    /// zero TTL produces an entry that is never readable.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiry check against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(deadline) if now >= deadline)
    }

    // == Time To Live ==
    /// Remaining lifetime, `Some(ZERO)` once expired, None if the entry never expires.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
