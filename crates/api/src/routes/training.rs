use axum::routing::post;
use axum::Router;

use crate::handlers::training_data;
use crate::state::AppState;

/// Routes mounted at `/training-data`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/training-data/fetch",
        post(training_data::fetch_training_data),
    )
}
