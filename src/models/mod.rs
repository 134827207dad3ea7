//! Domain entity and HTTP DTOs
//!
//! `Tutorial` is the cached entity; the request/response types are the
//! JSON bodies of the HTTP surface.

pub mod requests;
pub mod responses;
mod tutorial;

// Re-export commonly used types
pub use requests::{ListQuery, TutorialRequest};
pub use responses::{DeleteResponse, HealthResponse, StatsResponse};
pub use tutorial::{Tutorial, TutorialDraft};
