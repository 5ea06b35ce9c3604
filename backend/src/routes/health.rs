//! Health check endpoints
//!
//! - /health - basic process check
//! - /health/ready - readiness probe; verifies the database answers
//! - /health/live - liveness probe

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Probe response body
#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseCheck>,
}

/// Outcome of the database check
#[derive(Serialize)]
pub struct DatabaseCheck {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Basic health check endpoint
pub async fn health_check() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "healthy",
        version: VERSION,
        database: None,
    })
}

/// Readiness probe; returns 503 until the database answers
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ProbeResponse>, (StatusCode, Json<ProbeResponse>)> {
    match db::health_check(&state.db).await {
        Ok(()) => Ok(Json(ProbeResponse {
            status: "ready",
            version: VERSION,
            database: Some(DatabaseCheck {
                status: "healthy",
                error: None,
            }),
        })),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ProbeResponse {
                status: "not_ready",
                version: VERSION,
                database: Some(DatabaseCheck {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                }),
            }),
        )),
    }
}

/// Liveness probe; always OK while the server is running
pub async fn liveness_check() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "alive",
        version: VERSION,
        database: None,
    })
}
