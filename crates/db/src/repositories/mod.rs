//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut PgConnection` as the first argument; the caller owns the
//! connection lifecycle.

pub mod completed_workout_repo;
pub mod workout_exercise_repo;

pub use completed_workout_repo::CompletedWorkoutRepo;
pub use workout_exercise_repo::WorkoutExerciseRepo;
