//! Assembles a user's training tree from stored records.
//!
//! Resolves the user's training plans from assignments, then loads each
//! plan's modules, each module's simulations, and for every simulation the
//! user's progress status and best attempt score. Sibling lookups run
//! concurrently and are fully joined before the tree is returned.
//!
//! Plans referenced by an assignment but no longer present are skipped.
//! A simulation without a progress record is reported as `not_started`
//! with a score of 0.

use futures::future::try_join_all;
use simtrain_core::assignment::{resolve_training_plan_ids, AssignmentRecord};
use simtrain_core::attempt::highest_attempt_score;
use simtrain_core::training_progress::{ModuleProgress, SimulationProgress, TrainingPlanProgress};
use simtrain_core::training_status::TrainingStatus;
use simtrain_core::types::DbId;
use sqlx::PgPool;

use crate::models::module::Module;
use crate::models::simulation::Simulation;
use crate::models::user::User;
use crate::repositories::{AssignmentRepo, AttemptRepo, ModuleRepo, ProgressRepo, TrainingPlanRepo};

/// Load every training plan assigned to `user`, in ascending plan id order.
pub async fn load_training_tree(
    pool: &PgPool,
    user: &User,
) -> Result<Vec<TrainingPlanProgress>, sqlx::Error> {
    let scope = user.assignee_scope();
    let assignments: Vec<AssignmentRecord> = AssignmentRepo::list_for_assignee(pool, &scope)
        .await?
        .into_iter()
        .map(AssignmentRecord::from)
        .collect();

    let plan_ids = resolve_training_plan_ids(&assignments, &scope);
    tracing::debug!(
        user_id = user.id,
        plan_count = plan_ids.len(),
        "Resolved assigned training plans"
    );

    let plans = try_join_all(plan_ids.into_iter().map(|id| load_plan(pool, user.id, id))).await?;

    Ok(plans.into_iter().flatten().collect())
}

async fn load_plan(
    pool: &PgPool,
    user_id: DbId,
    training_plan_id: DbId,
) -> Result<Option<TrainingPlanProgress>, sqlx::Error> {
    let Some(plan) = TrainingPlanRepo::find_by_id(pool, training_plan_id).await? else {
        tracing::warn!(user_id, training_plan_id, "Assigned training plan not found, skipping");
        return Ok(None);
    };

    let modules = TrainingPlanRepo::list_modules(pool, plan.id).await?;
    let modules = try_join_all(modules.into_iter().map(|m| load_module(pool, user_id, m))).await?;

    Ok(Some(TrainingPlanProgress {
        training_plan_id: plan.id,
        name: plan.name,
        modules,
    }))
}

async fn load_module(
    pool: &PgPool,
    user_id: DbId,
    module: Module,
) -> Result<ModuleProgress, sqlx::Error> {
    let simulations = ModuleRepo::list_simulations(pool, module.id).await?;
    let simulations =
        try_join_all(simulations.into_iter().map(|s| load_simulation(pool, user_id, s))).await?;

    Ok(ModuleProgress {
        module_id: module.id,
        name: module.name,
        simulations,
    })
}

async fn load_simulation(
    pool: &PgPool,
    user_id: DbId,
    simulation: Simulation,
) -> Result<SimulationProgress, sqlx::Error> {
    let progress = ProgressRepo::find_for_user_simulation(pool, user_id, simulation.id).await?;

    let (status, highest) = match progress {
        Some(progress) => {
            let status = progress.training_status()?;
            let scores = AttemptRepo::list_scores(pool, user_id, simulation.id).await?;
            (status, highest_attempt_score(scores))
        }
        None => (TrainingStatus::NotStarted, 0.0),
    };

    Ok(simulation.into_progress(status, highest))
}
