//! Tutorial entity

use serde::{Deserialize, Serialize};

/// A persisted tutorial, as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub published: bool,
}

/// Input to a save: `id` is `None` when the store should assign one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TutorialDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: bool,
}

impl TutorialDraft {
    /// Draft for a tutorial whose id the store will assign.
    pub fn new(title: impl Into<String>, description: impl Into<String>, published: bool) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            published,
        }
    }

    /// Pins the draft to an existing id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Materializes the draft under the id the store settled on.
    pub fn into_tutorial(self, id: i64) -> Tutorial {
        Tutorial {
            id,
            title: self.title,
            description: self.description,
            published: self.published,
        }
    }
}
