//! Repository for the `module_simulations` table.

use simtrain_core::types::DbId;
use sqlx::PgPool;

use crate::models::simulation::Simulation;

/// Provides read access to module simulation membership.
pub struct ModuleRepo;

impl ModuleRepo {
    /// List a module's simulations in their configured order.
    pub async fn list_simulations(
        pool: &PgPool,
        module_id: DbId,
    ) -> Result<Vec<Simulation>, sqlx::Error> {
        sqlx::query_as::<_, Simulation>(
            "SELECT s.id, s.name, s.sim_type, s.level, s.est_time, s.due_date, \
                    s.min_passing_score, s.created_at, s.updated_at \
             FROM module_simulations ms \
             JOIN simulations s ON s.id = ms.simulation_id \
             WHERE ms.module_id = $1 \
             ORDER BY ms.sort_order, ms.id",
        )
        .bind(module_id)
        .fetch_all(pool)
        .await
    }
}
