//! Repository for the `training_plans` and `training_plan_modules` tables.

use simtrain_core::types::DbId;
use sqlx::PgPool;

use crate::models::module::Module;
use crate::models::training_plan::TrainingPlan;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides read access to training plans and their module membership.
pub struct TrainingPlanRepo;

impl TrainingPlanRepo {
    /// Find a training plan by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TrainingPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM training_plans WHERE id = $1");
        sqlx::query_as::<_, TrainingPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a plan's modules in their configured order.
    pub async fn list_modules(
        pool: &PgPool,
        training_plan_id: DbId,
    ) -> Result<Vec<Module>, sqlx::Error> {
        sqlx::query_as::<_, Module>(
            "SELECT m.id, m.name, m.created_at, m.updated_at \
             FROM training_plan_modules tpm \
             JOIN modules m ON m.id = tpm.module_id \
             WHERE tpm.training_plan_id = $1 \
             ORDER BY tpm.sort_order, tpm.id",
        )
        .bind(training_plan_id)
        .fetch_all(pool)
        .await
    }
}
