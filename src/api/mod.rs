//! API Module
//!
//! HTTP handlers and routing for the tutorial REST API.
//!
//! # Endpoints
//! - `/api/tutorials` - List and create tutorials
//! - `/api/tutorials/published` - Published tutorials
//! - `/api/tutorials/:id` - Fetch, update, delete a tutorial
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
