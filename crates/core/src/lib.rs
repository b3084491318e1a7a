//! Domain logic for trainee progress reporting.
//!
//! This crate has no database or HTTP dependencies. Everything here operates
//! on data already loaded by the caller.

pub mod assignment;
pub mod attempt;
pub mod error;
pub mod training_progress;
pub mod training_status;
pub mod types;
