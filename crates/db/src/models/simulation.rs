//! Simulation entity model.

use serde::Serialize;
use simtrain_core::training_progress::SimulationProgress;
use simtrain_core::training_status::TrainingStatus;
use simtrain_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `simulations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Simulation {
    pub id: DbId,
    pub name: String,
    pub sim_type: Option<String>,
    pub level: Option<String>,
    pub est_time: f64,
    pub due_date: Option<Timestamp>,
    pub min_passing_score: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Simulation {
    /// Annotate this simulation with a user's status and best score.
    pub fn into_progress(self, status: TrainingStatus, highest_attempt_score: f64) -> SimulationProgress {
        SimulationProgress {
            simulation_id: self.id,
            name: self.name,
            sim_type: self.sim_type,
            level: self.level,
            est_time: self.est_time,
            due_date: self.due_date,
            status,
            highest_attempt_score,
        }
    }
}
