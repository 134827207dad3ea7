//! LRU Tracker Module
//!
//! Access-order bookkeeping for the in-memory cache's eviction policy.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Keys ordered by last access: front = most recent, back = eviction candidate.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a key as most recently used.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    /// Removes and returns the least recently used key.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_evicts_in_insertion_order() {
        let mut lru = LruTracker::new();
        lru.touch("tutorials:1");
        lru.touch("tutorials:2");
        lru.touch("tutorials:all");

        assert_eq!(lru.evict_oldest().as_deref(), Some("tutorials:1"));
        assert_eq!(lru.evict_oldest().as_deref(), Some("tutorials:2"));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_touch_refreshes_key() {
        let mut lru = LruTracker::new();
        lru.touch("a");
        lru.touch("b");
        lru.touch("c");

        lru.touch("a");
        // front=[a, c, b]=back

        assert_eq!(lru.evict_oldest().as_deref(), Some("b"));
        assert_eq!(lru.evict_oldest().as_deref(), Some("c"));
        assert_eq!(lru.evict_oldest().as_deref(), Some("a"));
        assert_eq!(lru.evict_oldest(), None);
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_touch_same_key_is_idempotent() {
        let mut lru = LruTracker::new();
        lru.touch("key1");
        lru.touch("key1");

        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();
        lru.touch("key1");
        lru.touch("key2");

        lru.remove("key1");
        lru.remove("nonexistent");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.evict_oldest().as_deref(), Some("key2"));
    }
}
