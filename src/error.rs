//! Error types for the tutorial service
//!
//! Cache faults and store faults are kept apart: the service recovers every
//! `CacheError` locally, while `StoreError` propagates to the caller.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Faults raised by a cache backend.
///
/// Every variant is a soft fault from the service's point of view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Backend could not be reached
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Command did not complete within the configured timeout
    #[error("Cache command timed out after {0:?}")]
    Timeout(Duration),

    /// Key or value rejected by the backend
    #[error("Invalid cache request: {0}")]
    InvalidRequest(String),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// Value could not be encoded for storage
    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

// == Store Error Enum ==
/// Faults raised by the authoritative store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No tutorial with the given id
    #[error("Tutorial not found: {0}")]
    NotFound(i64),

    /// Store could not complete the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// == API Error Enum ==
/// Errors surfaced by the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Store failure propagated from the service
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Aliases ==
/// Result of a cache backend operation.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Result of a store operation.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result of an HTTP handler.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_timeout_display() {
        let err = CacheError::Timeout(Duration::from_millis(500));
        assert_eq!(err.to_string(), "Cache command timed out after 500ms");
    }

    #[test]
    fn test_store_not_found_display() {
        assert_eq!(StoreError::NotFound(7).to_string(), "Tutorial not found: 7");
    }

    #[test]
    fn test_api_error_status_mapping() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::from(StoreError::NotFound(1)), StatusCode::NOT_FOUND),
            (
                ApiError::from(StoreError::Unavailable("db down".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
