use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{Tutorial, TutorialDraft};
use crate::store::TutorialStore;

/// Tutorials held in an ordered map with a monotonically increasing id sequence.
#[derive(Debug)]
pub struct InMemoryStore {
    tutorials: RwLock<BTreeMap<i64, Tutorial>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tutorials: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Store preloaded with existing tutorials.
    pub fn with_tutorials(tutorials: impl IntoIterator<Item = Tutorial>) -> Self {
        let map: BTreeMap<i64, Tutorial> = tutorials.into_iter().map(|t| (t.id, t)).collect();
        let next = map.keys().next_back().map_or(1, |max| max.saturating_add(1));
        Self {
            tutorials: RwLock::new(map),
            next_id: AtomicI64::new(next),
        }
    }

    async fn filtered(&self, keep: impl Fn(&Tutorial) -> bool) -> Vec<Tutorial> {
        self.tutorials
            .read()
            .await
            .values()
            .filter(|t| keep(*t))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TutorialStore for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Tutorial>> {
        Ok(self.tutorials.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Tutorial>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn save(&self, draft: TutorialDraft) -> StoreResult<Tutorial> {
        let mut tutorials = self.tutorials.write().await;
        let id = match draft.id {
            Some(id) => {
                // keep the sequence ahead of explicitly chosen ids
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            // i64::MAX is never handed out, so an exhausted sequence cannot
            // land on a row saved under an explicit id
            None => self
                .next_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
                .map_err(|_| StoreError::Unavailable("tutorial id sequence exhausted".into()))?,
        };

        let tutorial = draft.into_tutorial(id);
        tutorials.insert(id, tutorial.clone());
        Ok(tutorial)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.tutorials
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn find_by_published(&self, published: bool) -> StoreResult<Vec<Tutorial>> {
        Ok(self.filtered(|t| t.published == published).await)
    }

    async fn find_by_title_containing(&self, fragment: &str) -> StoreResult<Vec<Tutorial>> {
        Ok(self.filtered(|t| t.title.contains(fragment)).await)
    }
}
