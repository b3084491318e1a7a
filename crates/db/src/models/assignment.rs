//! Assignment entity model.

use serde::Serialize;
use simtrain_core::assignment::AssignmentRecord;
use simtrain_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub assigned_item_type: String,
    pub assigned_item_id: DbId,
    pub assigned_to_type: String,
    pub assigned_to_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Assignment> for AssignmentRecord {
    fn from(row: Assignment) -> Self {
        Self {
            assigned_item_type: row.assigned_item_type,
            assigned_item_id: row.assigned_item_id,
            assigned_to_type: row.assigned_to_type,
            assigned_to_id: row.assigned_to_id,
            status: row.status,
        }
    }
}
