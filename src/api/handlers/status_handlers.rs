use super::super::ApiState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

pub async fn get_health(State(state): State<ApiState>) -> (StatusCode, Json<HealthStatus>) {
    match state.price_service.check_storage().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "ok",
                database: "up",
            }),
        ),
        Err(e) => {
            tracing::error!("Storage health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "degraded",
                    database: "down",
                }),
            )
        }
    }
}
