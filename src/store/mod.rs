//! Store Module
//!
//! The authoritative tutorial store contract and its in-memory backend.
//! Store errors are never swallowed by the caching layer.

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Tutorial, TutorialDraft};

/// Durable source of truth for tutorials.
#[async_trait]
pub trait TutorialStore: Send + Sync {
    /// Gets a tutorial by id.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Tutorial>>;

    /// Gets every tutorial, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Tutorial>>;

    /// Inserts or overwrites a tutorial; assigns an id when the draft has none.
    async fn save(&self, draft: TutorialDraft) -> StoreResult<Tutorial>;

    /// Deletes a tutorial. Fails with `StoreError::NotFound` for an unknown id.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;

    /// Gets tutorials with the given publication flag.
    async fn find_by_published(&self, published: bool) -> StoreResult<Vec<Tutorial>>;

    /// Gets tutorials whose title contains `fragment`.
    async fn find_by_title_containing(&self, fragment: &str) -> StoreResult<Vec<Tutorial>>;
}
