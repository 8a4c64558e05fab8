use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;
use utoipa::ToSchema;

/// Basic health check response
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Database readiness response
#[derive(serde::Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health
/// Liveness probe (no database check)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "jobly",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// GET /health/ready
/// Readiness probe with database connectivity check
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(pool): State<Arc<PgPool>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let start_time = Instant::now();

    let db_check = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        sqlx::query("SELECT 1 as health_check").fetch_one(pool.as_ref()),
    )
    .await;

    let response_time = start_time.elapsed();

    match db_check {
        Ok(Ok(_)) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "service": "jobly",
                "database": "connected",
                "response_time_ms": response_time.as_millis(),
            })),
        ),
        Ok(Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": "jobly",
                "database": "disconnected",
                "error": format!("Database error: {}", sanitize_db_error(&e)),
                "response_time_ms": response_time.as_millis(),
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": "jobly",
                "database": "timeout",
                "error": "Database query timed out after 2 seconds",
                "response_time_ms": response_time.as_millis(),
            })),
        ),
    }
}

/// Map a database error to a message without connection details
pub fn sanitize_db_error(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error",
        sqlx::Error::Io(_) => "Database connection error",
        sqlx::Error::Tls(_) => "Database TLS error",
        sqlx::Error::PoolTimedOut => "Database pool timeout",
        sqlx::Error::PoolClosed => "Database pool closed",
        sqlx::Error::Protocol(_) => "Database protocol error",
        _ => "Database operation error",
    }
}
