//! Database row types and projections.

pub mod completed_workout;
pub mod exercise;

pub use completed_workout::CompletedWorkout;
pub use exercise::ExerciseDetail;
