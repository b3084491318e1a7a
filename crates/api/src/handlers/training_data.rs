//! Handler for the per-user training dashboard.

use axum::extract::State;
use axum::Json;
use simtrain_core::error::CoreError;
use simtrain_core::training_progress::{compute_training_plan_stats, TrainingStatsResponse};
use simtrain_db::repositories::UserRepo;
use simtrain_db::training_tree::load_training_tree;

use crate::error::AppResult;
use crate::handlers::request::{require_id, UserLookupRequest};
use crate::state::AppState;

/// POST /api/v1/training-data/fetch
///
/// Load every training plan assigned to the user and return the plan,
/// module and overall progress rollups.
pub async fn fetch_training_data(
    State(state): State<AppState>,
    Json(input): Json<UserLookupRequest>,
) -> AppResult<Json<TrainingStatsResponse>> {
    let user_id = require_id(input.id.as_ref(), "id")?;

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })?;

    let tree = load_training_tree(&state.pool, &user).await?;
    let response = compute_training_plan_stats(tree);

    tracing::debug!(
        user_id,
        plans = response.training_plans.len(),
        total_simulations = response.stats.simulation_completed.total_simulations,
        "Computed training stats",
    );

    Ok(Json(response))
}
