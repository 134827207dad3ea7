//! API Handlers
//!
//! HTTP request handlers for the tutorial endpoints. Every tutorial read and
//! write goes through the cache-aside `TutorialService`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::{InMemoryCache, TimeoutCache};
use crate::config::{CachePolicy, Config};
use crate::error::{ApiError, Result};
use crate::models::{
    DeleteResponse, HealthResponse, ListQuery, StatsResponse, Tutorial, TutorialRequest,
};
use crate::service::TutorialService;
use crate::store::InMemoryStore;

/// Service wiring used by the server: in-memory store, timeout-bounded in-memory cache.
pub type AppService = TutorialService<InMemoryStore, TimeoutCache<InMemoryCache>>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside tutorial service
    pub service: AppService,
    /// Handle to the in-memory cache backend, for stats and the cleanup task
    pub cache: InMemoryCache,
}

impl AppState {
    /// Wires the service from explicit collaborators.
    pub fn new(
        store: InMemoryStore,
        cache: InMemoryCache,
        policy: CachePolicy,
        cache_timeout: Duration,
    ) -> Self {
        let bounded = TimeoutCache::new(cache.clone(), cache_timeout);
        let service = TutorialService::new(Arc::new(store), Arc::new(bounded), policy);
        Self { service, cache }
    }

    /// Creates a new AppState from configuration with an empty store.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            InMemoryStore::new(),
            InMemoryCache::from_config(config),
            config.cache_policy(),
            config.cache_timeout(),
        )
    }
}

/// Handler for GET /api/tutorials
///
/// Lists all tutorials, or those whose title contains `?title=`.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Tutorial>>> {
    let tutorials = match query.title.as_deref() {
        Some(fragment) if !fragment.is_empty() => {
            state.service.find_by_title_containing(fragment).await?
        }
        _ => state.service.find_all().await?,
    };

    Ok(Json(tutorials))
}

/// Handler for GET /api/tutorials/published
pub async fn published_handler(State(state): State<AppState>) -> Result<Json<Vec<Tutorial>>> {
    Ok(Json(state.service.find_by_published(true).await?))
}

/// Handler for GET /api/tutorials/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Tutorial>> {
    state
        .service
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Tutorial {} not found", id)))
}

/// Handler for POST /api/tutorials
pub async fn create_handler(
    State(state): State<AppState>,
    Json(req): Json<TutorialRequest>,
) -> Result<(StatusCode, Json<Tutorial>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let saved = state.service.save(req.into_draft(None)).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Handler for PUT /api/tutorials/:id
///
/// Only existing tutorials can be updated.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TutorialRequest>,
) -> Result<Json<Tutorial>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    if !state.service.exists(id).await? {
        return Err(ApiError::NotFound(format!("Tutorial {} not found", id)));
    }

    let saved = state.service.save(req.into_draft(Some(id))).await?;
    Ok(Json(saved))
}

/// Handler for DELETE /api/tutorials/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    state.service.delete_by_id(id).await?;
    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /stats
///
/// Statistics of the in-memory cache backend.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
