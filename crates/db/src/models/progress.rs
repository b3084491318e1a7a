//! User simulation progress model.

use serde::Serialize;
use simtrain_core::training_status::TrainingStatus;
use simtrain_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_simulation_progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSimulationProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub simulation_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserSimulationProgress {
    /// Parse the stored status string.
    ///
    /// The column carries a CHECK constraint, so a failure here means the
    /// row was written outside the schema and is reported as a decode error.
    pub fn training_status(&self) -> Result<TrainingStatus, sqlx::Error> {
        TrainingStatus::from_str_value(&self.status).map_err(|e| sqlx::Error::Decode(e.into()))
    }
}
