//! Module entity model.

use serde::Serialize;
use simtrain_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
