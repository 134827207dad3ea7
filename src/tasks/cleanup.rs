//! TTL Cleanup Task
//!
//! Background sweep that drops expired entries from the in-memory cache so
//! stale tutorials do not occupy capacity until they are next read.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::InMemoryCache;

/// Spawns a background task that periodically removes expired cache entries.
///
/// Returns the task handle; abort it during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = InMemoryCache::new(1000, Duration::from_secs(600));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: InMemoryCache, interval: Duration) -> JoinHandle<()> {
    let store = cache.shared();

    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.write().await.cleanup_expired();

            if removed > 0 {
                info!(removed, "TTL cleanup: removed expired cache entries");
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = InMemoryCache::new(100, Duration::from_secs(600));
        cache
            .set("tutorials:1", "{}".to_string(), Duration::from_millis(20))
            .await
            .unwrap();
        cache
            .set("tutorials:2", "{}".to_string(), Duration::from_secs(3600))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(200)).await;

        // swept without being read
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.stats().await.expirations, 1);
        assert!(cache.exists("tutorials:2").await.unwrap());

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = InMemoryCache::new(100, Duration::from_secs(600));
        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
