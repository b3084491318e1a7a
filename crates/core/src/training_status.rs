//! Progress states shared by simulations, modules and training plans.
//!
//! A simulation's state is supplied by its progress record. Module and plan
//! states are derived from their children with [`derive_status`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_OVERDUE: &str = "overdue";

/// All valid status strings.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_NOT_STARTED,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_OVERDUE,
];

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// Progress state of a simulation, module or training plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

impl TrainingStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_NOT_STARTED => Ok(Self::NotStarted),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_OVERDUE => Ok(Self::Overdue),
            _ => Err(format!(
                "Invalid training status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive a parent status from its children's counts.
///
/// Fixed precedence:
///
/// 1. `overdue` if any child is overdue
/// 2. `completed` if there is at least one child and all are completed
/// 3. `in_progress` if any child is completed or `any_in_progress` is set
/// 4. `not_started` otherwise
pub fn derive_status(
    total: usize,
    completed: usize,
    any_overdue: bool,
    any_in_progress: bool,
) -> TrainingStatus {
    if any_overdue {
        TrainingStatus::Overdue
    } else if total > 0 && completed == total {
        TrainingStatus::Completed
    } else if completed > 0 || any_in_progress {
        TrainingStatus::InProgress
    } else {
        TrainingStatus::NotStarted
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn from_str_agrees_with_serde_names() {
        for s in VALID_STATUSES {
            let status = TrainingStatus::from_str_value(s).unwrap();
            assert_eq!(serde_json::to_value(status).unwrap(), *s);
        }
    }

    #[test]
    fn from_str_overdue() {
        assert_matches!(
            TrainingStatus::from_str_value("overdue"),
            Ok(TrainingStatus::Overdue)
        );
    }

    #[test]
    fn from_str_rejects_unknown_value() {
        let result = TrainingStatus::from_str_value("archived");
        assert!(result.unwrap_err().contains("Invalid training status"));
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&TrainingStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn default_is_not_started() {
        assert_eq!(TrainingStatus::default(), TrainingStatus::NotStarted);
    }

    // -- derive_status --------------------------------------------------------

    #[test]
    fn empty_parent_is_not_started() {
        assert_eq!(derive_status(0, 0, false, false), TrainingStatus::NotStarted);
    }

    #[test]
    fn empty_parent_with_flag_is_in_progress() {
        assert_eq!(derive_status(0, 0, false, true), TrainingStatus::InProgress);
    }

    #[test]
    fn overdue_beats_everything() {
        assert_eq!(derive_status(3, 2, true, true), TrainingStatus::Overdue);
        assert_eq!(derive_status(3, 0, true, false), TrainingStatus::Overdue);
    }

    #[test]
    fn all_completed_is_completed() {
        assert_eq!(derive_status(2, 2, false, false), TrainingStatus::Completed);
    }

    #[test]
    fn all_completed_ignores_progress_flag() {
        assert_eq!(derive_status(2, 2, false, true), TrainingStatus::Completed);
    }

    #[test]
    fn partially_completed_is_in_progress() {
        assert_eq!(derive_status(4, 1, false, false), TrainingStatus::InProgress);
    }

    #[test]
    fn untouched_children_are_not_started() {
        assert_eq!(derive_status(4, 0, false, false), TrainingStatus::NotStarted);
    }
}
