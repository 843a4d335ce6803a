//! Repository for the `fitness.completed_workouts` table.

use sqlx::PgConnection;

use crate::models::CompletedWorkout;

/// Provides the single write this service performs.
pub struct CompletedWorkoutRepo;

impl CompletedWorkoutRepo {
    /// Insert a completed-workout row for `(template_id, user_id)`,
    /// returning the created row. Single statement; the store auto-commits
    /// it, so the row is either fully present or absent.
    pub async fn create(
        conn: &mut PgConnection,
        template_id: &str,
        user_id: &str,
    ) -> Result<CompletedWorkout, sqlx::Error> {
        sqlx::query_as::<_, CompletedWorkout>(
            "INSERT INTO fitness.completed_workouts (workout_template_id, user_id)
             VALUES ($1, $2)
             RETURNING completed_workout_id, workout_template_id, user_id",
        )
        .bind(template_id)
        .bind(user_id)
        .fetch_one(conn)
        .await
    }
}
