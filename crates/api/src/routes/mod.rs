pub mod attempts;
pub mod health;
pub mod training;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /training-data/fetch      POST  dashboard rollups for a user
/// /attempts/fetch           POST  attempt history for a user
/// /attempt/fetch            POST  playback details for one attempt
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(training::router())
        .merge(attempts::router())
}
