//! Training-plan assignment resolution.
//!
//! A training plan reaches a user when it is assigned to the user directly,
//! to the user's division, or to the user's department.

use std::collections::BTreeSet;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TARGET_USER: &str = "user";
pub const TARGET_DIVISION: &str = "division";
pub const TARGET_DEPARTMENT: &str = "department";

/// All valid assignment target types.
pub const VALID_TARGET_TYPES: &[&str] = &[TARGET_USER, TARGET_DIVISION, TARGET_DEPARTMENT];

/// Item type for assignments that grant a training plan.
pub const ITEM_TYPE_TRAINING_PLAN: &str = "training_plan";

/// Assignment status that makes an assignment effective.
pub const ASSIGNMENT_STATUS_ASSIGNED: &str = "assigned";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Who an assignment is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentTarget {
    User,
    Division,
    Department,
}

impl AssignmentTarget {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            TARGET_USER => Ok(Self::User),
            TARGET_DIVISION => Ok(Self::Division),
            TARGET_DEPARTMENT => Ok(Self::Department),
            _ => Err(format!(
                "Invalid assignment target '{s}'. Must be one of: {}",
                VALID_TARGET_TYPES.join(", ")
            )),
        }
    }
}

/// The parts of a user record that assignments can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssigneeScope {
    pub user_id: DbId,
    pub division_id: Option<DbId>,
    pub department_id: Option<DbId>,
}

impl AssigneeScope {
    /// Whether an assignment addressed to `target`/`target_id` reaches this user.
    pub fn matches(&self, target: AssignmentTarget, target_id: DbId) -> bool {
        match target {
            AssignmentTarget::User => self.user_id == target_id,
            AssignmentTarget::Division => self.division_id == Some(target_id),
            AssignmentTarget::Department => self.department_id == Some(target_id),
        }
    }
}

/// An assignment as loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub assigned_item_type: String,
    pub assigned_item_id: DbId,
    pub assigned_to_type: String,
    pub assigned_to_id: DbId,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Training-plan ids that apply to `scope`, de-duplicated and ascending.
///
/// Assignments for other item types, with a status other than `assigned`,
/// or with an unknown target type are ignored.
pub fn resolve_training_plan_ids(
    assignments: &[AssignmentRecord],
    scope: &AssigneeScope,
) -> Vec<DbId> {
    assignments
        .iter()
        .filter(|a| a.assigned_item_type == ITEM_TYPE_TRAINING_PLAN)
        .filter(|a| a.status == ASSIGNMENT_STATUS_ASSIGNED)
        .filter(|a| {
            AssignmentTarget::from_str_value(&a.assigned_to_type)
                .map(|target| scope.matches(target, a.assigned_to_id))
                .unwrap_or(false)
        })
        .map(|a| a.assigned_item_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> AssigneeScope {
        AssigneeScope {
            user_id: 1,
            division_id: Some(10),
            department_id: Some(100),
        }
    }

    fn assignment(plan_id: DbId, to_type: &str, to_id: DbId) -> AssignmentRecord {
        AssignmentRecord {
            assigned_item_type: ITEM_TYPE_TRAINING_PLAN.to_string(),
            assigned_item_id: plan_id,
            assigned_to_type: to_type.to_string(),
            assigned_to_id: to_id,
            status: ASSIGNMENT_STATUS_ASSIGNED.to_string(),
        }
    }

    #[test]
    fn target_parses_every_valid_value() {
        let parsed: Vec<_> = VALID_TARGET_TYPES
            .iter()
            .map(|s| AssignmentTarget::from_str_value(s).unwrap())
            .collect();
        assert_eq!(
            parsed,
            vec![
                AssignmentTarget::User,
                AssignmentTarget::Division,
                AssignmentTarget::Department,
            ]
        );
    }

    #[test]
    fn target_rejects_unknown() {
        assert!(AssignmentTarget::from_str_value("team").is_err());
    }

    #[test]
    fn resolves_direct_division_and_department() {
        let assignments = vec![
            assignment(5, TARGET_USER, 1),
            assignment(6, TARGET_DIVISION, 10),
            assignment(7, TARGET_DEPARTMENT, 100),
        ];
        assert_eq!(resolve_training_plan_ids(&assignments, &scope()), vec![5, 6, 7]);
    }

    #[test]
    fn ignores_other_users_and_units() {
        let assignments = vec![
            assignment(5, TARGET_USER, 2),
            assignment(6, TARGET_DIVISION, 11),
            assignment(7, TARGET_DEPARTMENT, 101),
        ];
        assert!(resolve_training_plan_ids(&assignments, &scope()).is_empty());
    }

    #[test]
    fn missing_division_matches_nothing() {
        let scope = AssigneeScope {
            division_id: None,
            department_id: None,
            ..scope()
        };
        let assignments = vec![assignment(6, TARGET_DIVISION, 10)];
        assert!(resolve_training_plan_ids(&assignments, &scope).is_empty());
    }

    #[test]
    fn deduplicates_and_sorts() {
        let assignments = vec![
            assignment(9, TARGET_USER, 1),
            assignment(3, TARGET_DIVISION, 10),
            assignment(9, TARGET_DEPARTMENT, 100),
        ];
        assert_eq!(resolve_training_plan_ids(&assignments, &scope()), vec![3, 9]);
    }

    #[test]
    fn skips_unassigned_and_non_plan_items() {
        let mut revoked = assignment(5, TARGET_USER, 1);
        revoked.status = "revoked".to_string();
        let mut simulation = assignment(6, TARGET_USER, 1);
        simulation.assigned_item_type = "simulation".to_string();
        let unknown_target = assignment(7, "team", 1);

        let assignments = vec![revoked, simulation, unknown_target];
        assert!(resolve_training_plan_ids(&assignments, &scope()).is_empty());
    }
}
