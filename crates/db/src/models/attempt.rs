//! Simulation attempt models.

use serde::Serialize;
use simtrain_core::attempt::{AttemptSummary, DEFAULT_ATTEMPT_TYPE};
use simtrain_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `simulation_attempts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SimulationAttempt {
    pub id: DbId,
    pub user_id: DbId,
    pub simulation_id: DbId,
    pub module_id: Option<DbId>,
    pub training_plan_id: Option<DbId>,
    pub attempt_type: Option<String>,
    pub score_percent: Option<f64>,
    pub time_taken: Option<f64>,
    pub time_taken_seconds: Option<f64>,
    pub analytics: serde_json::Value,
    pub playback: serde_json::Value,
    pub last_attempted_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An attempt joined with its simulation, module and training plan names.
#[derive(Debug, Clone, FromRow)]
pub struct AttemptSummaryRow {
    pub attempt_id: DbId,
    pub training_plan_name: Option<String>,
    pub module_name: Option<String>,
    pub simulation_id: DbId,
    pub simulation_name: String,
    pub sim_type: Option<String>,
    pub level: Option<String>,
    pub score_percent: Option<f64>,
    pub time_taken: Option<f64>,
    pub due_date: Option<Timestamp>,
    pub attempt_type: Option<String>,
    pub est_time: f64,
}

impl From<AttemptSummaryRow> for AttemptSummary {
    fn from(row: AttemptSummaryRow) -> Self {
        Self {
            attempt_id: row.attempt_id.to_string(),
            training_plan: row.training_plan_name.unwrap_or_default(),
            module_name: row.module_name.unwrap_or_default(),
            sim_id: row.simulation_id,
            sim_name: row.simulation_name,
            sim_type: row.sim_type.unwrap_or_default(),
            sim_level: row.level.unwrap_or_default(),
            score: row.score_percent.unwrap_or(0.0),
            time_taken: row.time_taken.unwrap_or(0.0),
            due_date: row.due_date,
            attempt_type: row
                .attempt_type
                .unwrap_or_else(|| DEFAULT_ATTEMPT_TYPE.to_string()),
            est_time: row.est_time,
            attempt_count: 1,
        }
    }
}
