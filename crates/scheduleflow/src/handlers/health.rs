//! Health check endpoints for Kubernetes.
//!
//! - `/livez` - Basic liveness check (immediate 200, no store access)
//! - `/readyz` - Readiness check (runs a store query)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness check.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness check.
///
/// Counts partners to verify the store answers queries.
/// Returns 200 with the count if healthy, 503 if not.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.partners.count().await {
        Ok(partners) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "healthy": true,
                "partners": partners
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
