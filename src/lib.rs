//! Tutorial Cache - cache-aside tutorial service
//!
//! Serves tutorials from an authoritative store through a TTL-bound cache,
//! degrading to store-only reads whenever the cache is unavailable.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::{CachePolicy, Config};
pub use service::TutorialService;
pub use tasks::spawn_cleanup_task;
