//! Completed workout model.

use life_core::types::DbId;
use sqlx::FromRow;

/// A row from `fitness.completed_workouts`.
///
/// The template and user identifiers are opaque to this service; only the
/// store-generated key has a concrete type.
#[derive(Debug, Clone, FromRow)]
pub struct CompletedWorkout {
    pub completed_workout_id: DbId,
    pub workout_template_id: String,
    pub user_id: String,
}
