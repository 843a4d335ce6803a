//! Read-side repository joining a template's exercise list with exercise
//! metadata.

use sqlx::PgConnection;

use crate::models::ExerciseDetail;

/// Column list shared across queries to avoid repetition. `order` is a
/// reserved word, so it stays quoted.
const COLUMNS: &str = r#"we.exercise_id, we."order", we.min_reps, we.max_reps, we.goal_weight,
                         we.rest_time, we.set_type_id, e.name, e.description"#;

/// Read-only access to a workout template's exercise prescription.
pub struct WorkoutExerciseRepo;

impl WorkoutExerciseRepo {
    /// List every exercise prescribed by a template, ordered ascending by
    /// the template's `order` column. The caller relies on this ordering;
    /// it is part of the response contract.
    pub async fn list_for_template(
        conn: &mut PgConnection,
        template_id: &str,
    ) -> Result<Vec<ExerciseDetail>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS}
               FROM fitness.workout_exercises we
               JOIN fitness.exercises e ON we.exercise_id = e.exercise_id
               WHERE we.workout_template_id = $1
               ORDER BY we."order""#
        );

        sqlx::query_as::<_, ExerciseDetail>(&query)
            .bind(template_id)
            .fetch_all(conn)
            .await
    }
}
