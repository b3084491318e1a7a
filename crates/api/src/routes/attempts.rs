use axum::routing::post;
use axum::Router;

use crate::handlers::attempts;
use crate::state::AppState;

/// Attempt history and playback routes.
///
/// ```text
/// POST /attempts/fetch   -> fetch_attempts
/// POST /attempt/fetch    -> fetch_attempt
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/attempts/fetch", post(attempts::fetch_attempts))
        .route("/attempt/fetch", post(attempts::fetch_attempt))
}
