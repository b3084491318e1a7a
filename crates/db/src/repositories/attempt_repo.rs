//! Repository for the `simulation_attempts` table.

use simtrain_core::types::DbId;
use sqlx::PgPool;

use crate::models::attempt::{AttemptSummaryRow, SimulationAttempt};

const COLUMNS: &str = "id, user_id, simulation_id, module_id, training_plan_id, attempt_type, \
                       score_percent, time_taken, time_taken_seconds, analytics, playback, \
                       last_attempted_at, created_at, updated_at";

/// Provides read access to simulation attempts.
pub struct AttemptRepo;

impl AttemptRepo {
    /// Scores of every attempt the user made on a simulation, most recent
    /// first. Attempts without a score count as 0.
    pub async fn list_scores(
        pool: &PgPool,
        user_id: DbId,
        simulation_id: DbId,
    ) -> Result<Vec<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(score_percent, 0) FROM simulation_attempts \
             WHERE user_id = $1 AND simulation_id = $2 \
             ORDER BY last_attempted_at DESC",
        )
        .bind(user_id)
        .bind(simulation_id)
        .fetch_all(pool)
        .await
    }

    /// Find one attempt, scoped to the user who made it.
    pub async fn find_for_user(
        pool: &PgPool,
        attempt_id: DbId,
        user_id: DbId,
    ) -> Result<Option<SimulationAttempt>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM simulation_attempts WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, SimulationAttempt>(&query)
            .bind(attempt_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's attempts with simulation, module and plan names,
    /// most recent first.
    pub async fn list_summaries_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AttemptSummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, AttemptSummaryRow>(
            "SELECT a.id AS attempt_id, \
                    tp.name AS training_plan_name, \
                    m.name AS module_name, \
                    s.id AS simulation_id, \
                    s.name AS simulation_name, \
                    s.sim_type, \
                    s.level, \
                    a.score_percent, \
                    a.time_taken, \
                    s.due_date, \
                    a.attempt_type, \
                    s.est_time \
             FROM simulation_attempts a \
             JOIN simulations s ON s.id = a.simulation_id \
             LEFT JOIN modules m ON m.id = a.module_id \
             LEFT JOIN training_plans tp ON tp.id = a.training_plan_id \
             WHERE a.user_id = $1 \
             ORDER BY a.last_attempted_at DESC, a.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
