//! Cache Module
//!
//! The `Cache` contract used by the tutorial service, key derivation, the
//! in-memory TTL/LRU backend and the fail-fast timeout decorator.

mod entry;
mod keys;
mod lru;
mod memory;
mod stats;
mod store;
mod timeout;
mod traits;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use keys::CacheKeys;
pub use lru::LruTracker;
pub use memory::InMemoryCache;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use timeout::TimeoutCache;
pub use traits::Cache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
