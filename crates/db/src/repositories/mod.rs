//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod attempt_repo;
pub mod module_repo;
pub mod progress_repo;
pub mod simulation_repo;
pub mod training_plan_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepo;
pub use attempt_repo::AttemptRepo;
pub use module_repo::ModuleRepo;
pub use progress_repo::ProgressRepo;
pub use simulation_repo::SimulationRepo;
pub use training_plan_repo::TrainingPlanRepo;
pub use user_repo::UserRepo;
