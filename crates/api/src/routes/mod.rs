pub mod health;
pub mod workout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST    /completed-workouts    record a completed workout
/// OPTIONS /completed-workouts    CORS preflight
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/completed-workouts", workout::router())
}
