//! API Routes
//!
//! Configures the Axum router with the tutorial endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler,
    published_handler, stats_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/tutorials` - List tutorials (optional `?title=` filter)
/// - `POST /api/tutorials` - Create a tutorial
/// - `GET /api/tutorials/published` - List published tutorials
/// - `GET /api/tutorials/:id` - Fetch a tutorial
/// - `PUT /api/tutorials/:id` - Update a tutorial
/// - `DELETE /api/tutorials/:id` - Delete a tutorial
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/tutorials", get(list_handler).post(create_handler))
        .route("/api/tutorials/published", get(published_handler))
        .route(
            "/api/tutorials/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::from_config(&Config::default()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/tutorials")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"Intro"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_published_route_not_shadowed_by_id() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/tutorials/published")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/tutorials/12345")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
