//! Exercise detail projection for a workout template.

use life_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One exercise prescribed by a workout template, joined with the exercise
/// metadata. Serialized verbatim into the success response, so the field
/// names match the store's column names.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ExerciseDetail {
    pub exercise_id: DbId,
    /// Position within the template; the response sequence follows this,
    /// ascending.
    pub order: i32,
    pub min_reps: i32,
    pub max_reps: i32,
    pub goal_weight: Option<f64>,
    pub rest_time: Option<i32>,
    pub set_type_id: i32,
    pub name: String,
    pub description: Option<String>,
}
