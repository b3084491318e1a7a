//! User entity model.

use serde::Serialize;
use simtrain_core::assignment::AssigneeScope;
use simtrain_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub division_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// The identifiers assignments can be addressed to for this user.
    pub fn assignee_scope(&self) -> AssigneeScope {
        AssigneeScope {
            user_id: self.id,
            division_id: self.division_id,
            department_id: self.department_id,
        }
    }
}
