//! Request DTOs for the tutorial API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use super::TutorialDraft;

/// Maximum accepted title length in bytes.
pub const MAX_TITLE_LENGTH: usize = 256;

/// Request body for creating or updating a tutorial.
///
/// # Fields
/// - `title`: Tutorial title (required, non-empty)
/// - `description`: Free-form description (defaults to empty)
/// - `published`: Publication flag (defaults to false)
#[derive(Debug, Clone, Deserialize)]
pub struct TutorialRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: bool,
}

impl TutorialRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.title.len() > MAX_TITLE_LENGTH {
            return Some(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        None
    }

    /// Converts the request into a store draft, optionally pinned to an id.
    pub fn into_draft(self, id: Option<i64>) -> TutorialDraft {
        TutorialDraft {
            id,
            title: self.title,
            description: self.description,
            published: self.published,
        }
    }
}

/// Query string for `GET /api/tutorials`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Only tutorials whose title contains this substring
    pub title: Option<String>,
}
