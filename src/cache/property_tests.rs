//! Property-Based Tests for the in-memory cache engine

use proptest::prelude::*;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{CacheKeys, CacheStore};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(600);

// == Strategies ==
/// Keys drawn from the tutorial key space, collection key included.
fn tutorial_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0i64..64).prop_map(|id| CacheKeys::default().tutorial(id)),
        1 => Just(CacheKeys::default().all()),
    ]
}

/// JSON-ish payloads
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,128}".prop_map(|s| format!(r#"{{"title":"{}"}}"#, s))
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (tutorial_key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        tutorial_key_strategy().prop_map(|key| CacheOp::Get { key }),
        tutorial_key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Hit/miss counters reflect exactly the reads that were served or missed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value, None).unwrap();
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }

    // The store agrees with a plain last-writer-wins map model.
    #[test]
    fn prop_last_writer_wins(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);
        let mut model = std::collections::HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone(), None).unwrap();
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
            }
        }
    }

    // Capacity is never exceeded, whatever the write sequence.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec((tutorial_key_strategy(), value_strategy()), 1..200)
    ) {
        let max_entries = 16;
        let mut store = CacheStore::new(max_entries, TEST_DEFAULT_TTL);

        for (key, value) in entries {
            store.set(key, value, None).unwrap();
            prop_assert!(store.len() <= max_entries);
        }
    }

    // Filling to capacity then inserting a fresh key evicts the oldest key only.
    #[test]
    fn prop_lru_eviction_order(
        ids in prop::collection::hash_set(0i64..1000, 2..10),
        new_id in 1000i64..2000,
    ) {
        let keys = CacheKeys::default();
        let ordered: Vec<String> = ids.iter().map(|id| keys.tutorial(*id)).collect();
        let mut store = CacheStore::new(ordered.len(), TEST_DEFAULT_TTL);

        for key in &ordered {
            store.set(key.clone(), "v".to_string(), None).unwrap();
        }
        store.set(keys.tutorial(new_id), "v".to_string(), None).unwrap();

        prop_assert!(!store.contains(&ordered[0]));
        for key in ordered.iter().skip(1) {
            prop_assert!(store.contains(key));
        }
        prop_assert!(store.contains(&keys.tutorial(new_id)));
    }
}

// Fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // After its TTL elapses an entry is neither visible nor counted.
    #[test]
    fn prop_ttl_expiration_behavior(
        keys in prop::collection::vec(tutorial_key_strategy(), 1..10),
        value in value_strategy()
    ) {
        let unique: HashSet<String> = keys.into_iter().collect();
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);

        for key in &unique {
            store
                .set(key.clone(), value.clone(), Some(Duration::from_millis(20)))
                .unwrap();
            prop_assert!(store.contains(key));
        }

        sleep(Duration::from_millis(40));

        prop_assert_eq!(store.cleanup_expired(), unique.len());
        prop_assert!(store.is_empty());
        for key in &unique {
            prop_assert!(store.get(key).is_none());
        }
    }
}
