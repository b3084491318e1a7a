//! Row structs for the training tables.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus any conversions into core domain types.

pub mod assignment;
pub mod attempt;
pub mod module;
pub mod progress;
pub mod simulation;
pub mod training_plan;
pub mod user;
