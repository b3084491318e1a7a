//! Request body helpers shared by the lookup endpoints.
//!
//! Ids arrive either as JSON numbers or as numeric strings (attempt ids are
//! listed as strings), and may be absent or `null`.

use serde::Deserialize;
use serde_json::Value;
use simtrain_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Body of `POST /training-data/fetch` and `POST /attempts/fetch`.
#[derive(Debug, Default, Deserialize)]
pub struct UserLookupRequest {
    #[serde(default)]
    pub id: Option<Value>,
}

/// Body of `POST /attempt/fetch`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptLookupRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub attempt_id: Option<Value>,
}

/// Extract a required id, naming `field` in the error message.
pub fn require_id(value: Option<&Value>, field: &str) -> AppResult<DbId> {
    match value {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("Missing '{field}'"))),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(AppError::BadRequest(format!("Missing '{field}'")))
        }
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| invalid(field)),
        Some(Value::String(s)) => s.trim().parse::<DbId>().map_err(|_| invalid(field)),
        Some(_) => Err(invalid(field)),
    }
}

fn invalid(field: &str) -> AppError {
    AppError::BadRequest(format!("Invalid '{field}'"))
}
