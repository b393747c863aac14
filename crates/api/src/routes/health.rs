//! Health and service-info routes, mounted at the root (unversioned).

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
}

/// GET /health
///
/// Liveness plus a database ping. Degrades to 503 when the pool cannot
/// answer `SELECT 1`.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let db_healthy = fintrack_db::health_check(&state.pool).await.is_ok();
    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(json!({
            "status": if db_healthy { "ok" } else { "degraded" },
            "db_healthy": db_healthy,
        })),
    )
}

/// GET /info
async fn info() -> Json<serde_json::Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
