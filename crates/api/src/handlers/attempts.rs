//! Handlers for a user's simulation attempt history and playback.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use simtrain_core::attempt::{build_attempt_detail, AttemptDetail, AttemptSummary};
use simtrain_core::error::CoreError;
use simtrain_db::repositories::{AttemptRepo, SimulationRepo, UserRepo};

use crate::error::AppResult;
use crate::handlers::request::{require_id, AttemptLookupRequest, UserLookupRequest};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AttemptListResponse {
    pub attempts: Vec<AttemptSummary>,
}

#[derive(Debug, Serialize)]
pub struct AttemptDetailResponse {
    pub attempt: AttemptDetail,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/attempts/fetch
///
/// List the user's attempts, most recent first.
pub async fn fetch_attempts(
    State(state): State<AppState>,
    Json(input): Json<UserLookupRequest>,
) -> AppResult<Json<AttemptListResponse>> {
    let user_id = require_id(input.id.as_ref(), "id")?;

    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;

    let attempts: Vec<AttemptSummary> = AttemptRepo::list_summaries_for_user(&state.pool, user_id)
        .await?
        .into_iter()
        .map(AttemptSummary::from)
        .collect();

    tracing::debug!(user_id, count = attempts.len(), "Listed attempts");

    Ok(Json(AttemptListResponse { attempts }))
}

/// POST /api/v1/attempt/fetch
///
/// Playback and analytics details for one of the user's attempts.
pub async fn fetch_attempt(
    State(state): State<AppState>,
    Json(input): Json<AttemptLookupRequest>,
) -> AppResult<Json<AttemptDetailResponse>> {
    let user_id = require_id(input.user_id.as_ref(), "userId")?;
    let attempt_id = require_id(input.attempt_id.as_ref(), "attemptId")?;

    let attempt = AttemptRepo::find_for_user(&state.pool, attempt_id, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Attempt",
            id: attempt_id,
        })?;

    let simulation = SimulationRepo::find_by_id(&state.pool, attempt.simulation_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Simulation",
            id: attempt.simulation_id,
        })?;

    let detail = build_attempt_detail(
        &attempt.analytics,
        &attempt.playback,
        attempt.time_taken_seconds,
        Some(simulation.min_passing_score),
    );

    Ok(Json(AttemptDetailResponse { attempt: detail }))
}
