//! Repository for the `user_simulation_progress` table.

use simtrain_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::UserSimulationProgress;

const COLUMNS: &str = "id, user_id, simulation_id, status, created_at, updated_at";

/// Provides read access to per-user simulation progress.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Find the user's progress record for a simulation, if any.
    pub async fn find_for_user_simulation(
        pool: &PgPool,
        user_id: DbId,
        simulation_id: DbId,
    ) -> Result<Option<UserSimulationProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_simulation_progress \
             WHERE user_id = $1 AND simulation_id = $2"
        );
        sqlx::query_as::<_, UserSimulationProgress>(&query)
            .bind(user_id)
            .bind(simulation_id)
            .fetch_optional(pool)
            .await
    }
}
