//! Liveness and database readiness, mounted at the root rather than `/api/v1`.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PoolStats {
    /// Open connections, idle or in use.
    pub size: u32,
    pub idle: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round trip of the probe query; absent when it failed.
    pub db_latency_ms: Option<u64>,
    pub db_pool: PoolStats,
}

/// GET /health
///
/// Answers 503 while the database is unreachable so load balancers can
/// take the instance out of rotation.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let db_latency_ms = match simtrain_db::health_check(&state.pool).await {
        Ok(()) => Some(started.elapsed().as_millis() as u64),
        Err(err) => {
            tracing::warn!(error = %err, "Health check query failed");
            None
        }
    };
    let db_healthy = db_latency_ms.is_some();

    let status_code = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_latency_ms,
        db_pool: PoolStats {
            size: state.pool.size(),
            idle: state.pool.num_idle(),
        },
    };

    (status_code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
