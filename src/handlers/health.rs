//! Readiness endpoint, `GET /v1/healthz`. Public.

use crate::{db::DbPool, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Report readiness once the database answers a trivial query.
///
/// ```json
/// { "status": "ok", "database": "connected", "timestamp": "2025-01-01T00:00:00Z" }
/// ```
///
/// An unreachable database yields the standard 500 error body.
pub async fn readiness(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        database: "connected",
        timestamp: Utc::now(),
    }))
}
