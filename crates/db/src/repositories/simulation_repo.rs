//! Repository for the `simulations` table.

use simtrain_core::types::DbId;
use sqlx::PgPool;

use crate::models::simulation::Simulation;

const COLUMNS: &str =
    "id, name, sim_type, level, est_time, due_date, min_passing_score, created_at, updated_at";

/// Provides read access to simulations.
pub struct SimulationRepo;

impl SimulationRepo {
    /// Find a simulation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Simulation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM simulations WHERE id = $1");
        sqlx::query_as::<_, Simulation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
