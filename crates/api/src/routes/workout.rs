//! Route definitions for the completed-workout resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Routes mounted at `/completed-workouts`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(workout::complete_workout).options(workout::preflight),
    )
}
