//! Per-invocation store connection traits.
//!
//! The request handler opens one dedicated connection per invocation and
//! must release it on every exit path. These traits are the seam between
//! the handler and Postgres: [`StoreConnector`] acquires, and the returned
//! [`StoreConnection`] is consumed by `close`.

use async_trait::async_trait;
use life_core::config::DbConfig;

use crate::models::{CompletedWorkout, ExerciseDetail};

/// Failures from the relational store, split by invocation step.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The connection could not be opened (unreachable host, bad
    /// credentials).
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// A statement failed on an open connection.
    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// The connection did not shut down cleanly.
    #[error("failed to close database connection: {0}")]
    Close(#[source] sqlx::Error),
}

/// Opens dedicated store connections.
///
/// Constructed once per process and shared across invocations; holds no
/// connection state itself.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// Open one connection with the given parameters.
    async fn connect(&self, config: &DbConfig) -> Result<Box<dyn StoreConnection>, StoreError>;
}

/// A single dedicated connection, scoped to one invocation.
#[async_trait]
pub trait StoreConnection: Send {
    /// Insert a completed-workout row for `(template_id, user_id)`,
    /// returning the created row with its generated key.
    async fn insert_completed_workout(
        &mut self,
        template_id: &str,
        user_id: &str,
    ) -> Result<CompletedWorkout, StoreError>;

    /// List the exercises of a template, ordered ascending by their
    /// `order` column.
    async fn list_exercise_details(
        &mut self,
        template_id: &str,
    ) -> Result<Vec<ExerciseDetail>, StoreError>;

    /// Release the connection. Consumes the handle so it cannot be closed
    /// twice or reused.
    async fn close(self: Box<Self>) -> Result<(), StoreError>;
}
