//! Hierarchical training-progress aggregation.
//!
//! Folds an assembled tree of training plans, modules and simulations into
//! module rollups, plan rollups and one overall statistics record. The fold
//! is pure: each simulation seeds a [`SimAggregate`], aggregates are merged
//! at module scope, module aggregates are merged at plan scope, and plan
//! aggregates are merged globally.
//!
//! Nothing here fails. Every ratio is guarded and yields 0 when its
//! denominator is 0.

use serde::{Deserialize, Serialize};

use crate::training_status::{derive_status, TrainingStatus};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Input tree
// ---------------------------------------------------------------------------

/// A simulation annotated with the user's status and best score.
///
/// Passed through unchanged into [`ModuleRollup::simulations`], so the
/// serialized field names match what the dashboard reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationProgress {
    pub simulation_id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub sim_type: Option<String>,
    pub level: Option<String>,
    /// Estimated time in minutes.
    #[serde(rename = "estTime", default)]
    pub est_time: f64,
    #[serde(rename = "dueDate")]
    pub due_date: Option<Timestamp>,
    pub status: TrainingStatus,
    /// Best `score_percent` across the user's attempts, 0 when none.
    #[serde(default)]
    pub highest_attempt_score: f64,
}

/// A module and its ordered simulations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModuleProgress {
    pub module_id: DbId,
    pub name: String,
    pub simulations: Vec<SimulationProgress>,
}

/// A training plan and its ordered modules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingPlanProgress {
    pub training_plan_id: DbId,
    pub name: String,
    pub modules: Vec<ModuleProgress>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRollup {
    pub id: DbId,
    pub name: String,
    pub total_simulations: usize,
    /// Mean of `highest_attempt_score`, not rounded.
    pub average_score: f64,
    pub due_date: Option<Timestamp>,
    pub status: TrainingStatus,
    pub simulations: Vec<SimulationProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRollup {
    pub id: DbId,
    pub name: String,
    /// Completed over total simulations, times 100, not rounded.
    pub completion_percentage: f64,
    pub total_modules: usize,
    pub total_simulations: usize,
    pub est_time: f64,
    /// Mean of `highest_attempt_score`, not rounded.
    pub average_sim_score: f64,
    pub due_date: Option<Timestamp>,
    pub status: TrainingStatus,
    pub modules: Vec<ModuleRollup>,
}

/// A completed-over-total ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStat {
    pub total_simulations: usize,
    pub completed_simulations: usize,
    /// Rounded to 2 decimal places.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallStats {
    pub simulation_completed: CompletionStat,
    /// `total_simulations` here counts completed-or-overdue simulations, and
    /// the numerator is the overall completed count.
    pub timely_completion: CompletionStat,
    pub average_sim_score: f64,
    pub highest_sim_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingStatsResponse {
    pub training_plans: Vec<PlanRollup>,
    pub stats: OverallStats,
}

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// Running totals over a set of simulations.
///
/// The same type is used at module, plan and global scope; wider scopes are
/// built by [`SimAggregate::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimAggregate {
    pub total_simulations: usize,
    pub completed_simulations: usize,
    pub overdue_simulations: usize,
    pub in_progress_simulations: usize,
    pub total_est_time: f64,
    pub total_score: f64,
    pub highest_score: f64,
    /// Earliest non-null due date.
    pub due_date: Option<Timestamp>,
}

impl SimAggregate {
    /// Seed an aggregate from a single simulation.
    pub fn from_simulation(sim: &SimulationProgress) -> Self {
        Self {
            total_simulations: 1,
            completed_simulations: usize::from(sim.status == TrainingStatus::Completed),
            overdue_simulations: usize::from(sim.status == TrainingStatus::Overdue),
            in_progress_simulations: usize::from(sim.status == TrainingStatus::InProgress),
            total_est_time: sim.est_time,
            total_score: sim.highest_attempt_score,
            highest_score: sim.highest_attempt_score,
            due_date: sim.due_date,
        }
    }

    /// Combine two aggregates.
    pub fn merge(self, other: Self) -> Self {
        Self {
            total_simulations: self.total_simulations + other.total_simulations,
            completed_simulations: self.completed_simulations + other.completed_simulations,
            overdue_simulations: self.overdue_simulations + other.overdue_simulations,
            in_progress_simulations: self.in_progress_simulations
                + other.in_progress_simulations,
            total_est_time: self.total_est_time + other.total_est_time,
            total_score: self.total_score + other.total_score,
            highest_score: self.highest_score.max(other.highest_score),
            due_date: earliest_due_date(self.due_date, other.due_date),
        }
    }

    pub fn any_overdue(&self) -> bool {
        self.overdue_simulations > 0
    }

    pub fn any_in_progress(&self) -> bool {
        self.in_progress_simulations > 0
    }

    /// Denominator of the timely-completion ratio.
    pub fn completed_or_overdue(&self) -> usize {
        self.completed_simulations + self.overdue_simulations
    }

    /// Mean score, 0 when there are no simulations.
    pub fn average_score(&self) -> f64 {
        ratio(self.total_score, self.total_simulations)
    }
}

/// Fold a module's simulations into one aggregate.
pub fn reduce_simulations(simulations: &[SimulationProgress]) -> SimAggregate {
    simulations
        .iter()
        .map(SimAggregate::from_simulation)
        .fold(SimAggregate::default(), SimAggregate::merge)
}

/// Earliest of two optional due dates. A missing date never wins over a
/// present one.
pub fn earliest_due_date(a: Option<Timestamp>, b: Option<Timestamp>) -> Option<Timestamp> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

// ---------------------------------------------------------------------------
// Arithmetic helpers
// ---------------------------------------------------------------------------

/// `numerator / denominator`, or 0 when the denominator is 0.
fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator / denominator as f64
}

/// `part / total * 100`, or 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    ratio(part as f64, total) * 100.0
}

/// Round to 2 decimal places. Exact ties go to the even digit, so 3.125
/// becomes 3.12 and 3.135 becomes 3.14.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

// ---------------------------------------------------------------------------
// Finalizers
// ---------------------------------------------------------------------------

/// Build a module rollup from its aggregate.
///
/// `plan_in_progress` is the plan's running in-progress flag: set when this
/// module or any earlier module of the same plan holds an `in_progress`
/// simulation. A module with no progress of its own can therefore report
/// `in_progress` because of an earlier sibling.
pub fn finalize_module(
    module: ModuleProgress,
    aggregate: &SimAggregate,
    plan_in_progress: bool,
) -> ModuleRollup {
    ModuleRollup {
        id: module.module_id,
        name: module.name,
        total_simulations: aggregate.total_simulations,
        average_score: aggregate.average_score(),
        due_date: aggregate.due_date,
        status: derive_status(
            aggregate.total_simulations,
            aggregate.completed_simulations,
            aggregate.any_overdue(),
            plan_in_progress,
        ),
        simulations: module.simulations,
    }
}

/// Build a plan rollup from its aggregate and already-finalized modules.
pub fn finalize_plan(
    training_plan_id: DbId,
    name: String,
    aggregate: &SimAggregate,
    modules: Vec<ModuleRollup>,
) -> PlanRollup {
    PlanRollup {
        id: training_plan_id,
        name,
        completion_percentage: percentage(
            aggregate.completed_simulations,
            aggregate.total_simulations,
        ),
        total_modules: modules.len(),
        total_simulations: aggregate.total_simulations,
        est_time: aggregate.total_est_time,
        average_sim_score: aggregate.average_score(),
        due_date: aggregate.due_date,
        status: derive_status(
            aggregate.total_simulations,
            aggregate.completed_simulations,
            aggregate.any_overdue(),
            aggregate.any_in_progress(),
        ),
        modules,
    }
}

/// Build the cross-plan statistics from the global aggregate.
pub fn finalize_overall(aggregate: &SimAggregate) -> OverallStats {
    let timely_total = aggregate.completed_or_overdue();
    OverallStats {
        simulation_completed: CompletionStat {
            total_simulations: aggregate.total_simulations,
            completed_simulations: aggregate.completed_simulations,
            percentage: round2(percentage(
                aggregate.completed_simulations,
                aggregate.total_simulations,
            )),
        },
        timely_completion: CompletionStat {
            total_simulations: timely_total,
            completed_simulations: aggregate.completed_simulations,
            percentage: round2(percentage(aggregate.completed_simulations, timely_total)),
        },
        average_sim_score: round2(aggregate.average_score()),
        highest_sim_score: aggregate.highest_score,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Compute module, plan and overall statistics for an assembled tree.
///
/// Plan, module and simulation order is preserved in the output.
pub fn compute_training_plan_stats(plans: Vec<TrainingPlanProgress>) -> TrainingStatsResponse {
    let mut global = SimAggregate::default();
    let mut training_plans = Vec::with_capacity(plans.len());

    for plan in plans {
        let mut plan_aggregate = SimAggregate::default();
        let mut modules = Vec::with_capacity(plan.modules.len());

        for module in plan.modules {
            let module_aggregate = reduce_simulations(&module.simulations);
            plan_aggregate = plan_aggregate.merge(module_aggregate);
            modules.push(finalize_module(
                module,
                &module_aggregate,
                plan_aggregate.any_in_progress(),
            ));
        }

        global = global.merge(plan_aggregate);
        training_plans.push(finalize_plan(
            plan.training_plan_id,
            plan.name,
            &plan_aggregate,
            modules,
        ));
    }

    TrainingStatsResponse {
        training_plans,
        stats: finalize_overall(&global),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
