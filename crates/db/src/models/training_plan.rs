//! Training plan entity model.

use serde::Serialize;
use simtrain_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `training_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingPlan {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
