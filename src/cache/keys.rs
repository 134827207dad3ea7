//! Cache key derivation
//!
//! Keys are `<prefix><id>` for a single tutorial and `<prefix>all` for the
//! collection snapshot. Ids are integers, so an id key never collides with
//! the collection key.

use crate::config::DEFAULT_KEY_PREFIX;

/// Token used in place of an id for the full-collection snapshot.
const ALL_TOKEN: &str = "all";

/// Derives cache keys within one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeys {
    prefix: String,
}

impl CacheKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key of a single tutorial.
    pub fn tutorial(&self, id: i64) -> String {
        format!("{}{}", self.prefix, id)
    }

    /// Key of the full-collection snapshot.
    pub fn all(&self) -> String {
        format!("{}{}", self.prefix, ALL_TOKEN)
    }
}

impl Default for CacheKeys {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}
