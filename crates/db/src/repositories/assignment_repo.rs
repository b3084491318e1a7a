//! Repository for the `assignments` table.

use simtrain_core::assignment::{AssigneeScope, TARGET_DEPARTMENT, TARGET_DIVISION, TARGET_USER};
use sqlx::PgPool;

use crate::models::assignment::Assignment;

const COLUMNS: &str = "id, assigned_item_type, assigned_item_id, assigned_to_type, \
                       assigned_to_id, status, created_at, updated_at";

/// Provides read access to assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// List every assignment addressed to the user, the user's division, or
    /// the user's department, regardless of item type or status.
    ///
    /// Filtering by item type and status is left to
    /// `simtrain_core::assignment::resolve_training_plan_ids`.
    pub async fn list_for_assignee(
        pool: &PgPool,
        scope: &AssigneeScope,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignments \
             WHERE (assigned_to_type = $1 AND assigned_to_id = $2) \
                OR (assigned_to_type = $3 AND assigned_to_id = $4) \
                OR (assigned_to_type = $5 AND assigned_to_id = $6) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(TARGET_USER)
            .bind(scope.user_id)
            .bind(TARGET_DIVISION)
            .bind(scope.division_id)
            .bind(TARGET_DEPARTMENT)
            .bind(scope.department_id)
            .fetch_all(pool)
            .await
    }
}
