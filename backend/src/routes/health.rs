//! Health check and metrics endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness probe (checks the database)
//! - /health/live - Liveness probe (always returns OK if server is running)
//! - /metrics - Prometheus exposition

use crate::{db, state::AppState};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn response<S>(state: &AppState<S>, status: &str, checks: Option<HealthChecks>) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        service: state.config().server.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    }
}

/// Basic health check endpoint
pub async fn health_check<S>(State(state): State<AppState<S>>) -> Json<HealthResponse> {
    Json(response(&state, "healthy", None))
}

/// Readiness probe, 503 when the database is unreachable
pub async fn readiness_check<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = match db::health_check(state.db()).await {
        Ok(_) => CheckStatus {
            status: "healthy".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "unhealthy".to_string(),
            message: Some(e.to_string()),
        },
    };

    let is_healthy = db_check.status == "healthy";
    let body = response(
        &state,
        if is_healthy { "ready" } else { "not_ready" },
        Some(HealthChecks { database: db_check }),
    );

    if is_healthy {
        Ok(Json(body))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(body)))
    }
}

/// Liveness probe, OK whenever the server is running
pub async fn liveness_check<S>(State(state): State<AppState<S>>) -> Json<HealthResponse> {
    Json(response(&state, "alive", None))
}

/// Prometheus metrics in text exposition format
pub async fn metrics<S>(State(state): State<AppState<S>>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics recorder not installed").into_response(),
    }
}
