use super::{handlers, ApiState};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Price routes
        .route("/api/prices", get(handlers::get_prices))
        .route("/api/prices/rates", get(handlers::get_rate_card))

        // Status routes
        .route("/api/status/health", get(handlers::get_health))

        .layer(CorsLayer::permissive())
        .with_state(state)
}
