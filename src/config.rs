//! Configuration Module
//!
//! Loads server and cache-policy configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default namespace prefix for tutorial cache keys.
pub const DEFAULT_KEY_PREFIX: &str = "tutorials:";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the in-memory cache can hold
    pub max_entries: usize,
    /// TTL in seconds applied to every cached tutorial or snapshot
    pub cache_ttl: u64,
    /// Namespace prefix for cache keys
    pub cache_key_prefix: String,
    /// Per-command cache timeout in milliseconds
    pub cache_timeout_ms: u64,
    /// Repopulate the cache after a store read without blocking the caller
    pub populate_in_background: bool,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

/// Cache-aside policy handed to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// TTL set on every cache write
    pub ttl: Duration,
    /// Namespace prefix for cache keys
    pub key_prefix: String,
    /// Spawn post-fallback cache writes instead of awaiting them
    pub populate_in_background: bool,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            populate_in_background: true,
        }
    }
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL_SECS` - TTL of cached values in seconds (default: 600)
    /// - `CACHE_KEY_PREFIX` - Cache key namespace (default: `tutorials:`)
    /// - `CACHE_TIMEOUT_MS` - Cache command timeout (default: 500)
    /// - `CACHE_POPULATE_ASYNC` - Fire-and-forget repopulation (default: true)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("CACHE_MAX_ENTRIES", defaults.max_entries),
            cache_ttl: env_or("CACHE_TTL_SECS", defaults.cache_ttl),
            cache_key_prefix: env::var("CACHE_KEY_PREFIX")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.cache_key_prefix),
            cache_timeout_ms: env_or("CACHE_TIMEOUT_MS", defaults.cache_timeout_ms),
            populate_in_background: env_or(
                "CACHE_POPULATE_ASYNC",
                defaults.populate_in_background,
            ),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Derives the service's cache policy.
    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy {
            ttl: Duration::from_secs(self.cache_ttl),
            key_prefix: self.cache_key_prefix.clone(),
            populate_in_background: self.populate_in_background,
        }
    }

    /// Cache command timeout as a Duration.
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            cache_ttl: 600,
            cache_key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            cache_timeout_ms: 500,
            populate_in_background: true,
            server_port: 8080,
            cleanup_interval: 1,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
