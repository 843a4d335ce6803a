//! Postgres implementation of the store connection traits.

use async_trait::async_trait;
use life_core::config::DbConfig;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, PgConnection};

use crate::models::{CompletedWorkout, ExerciseDetail};
use crate::repositories::{CompletedWorkoutRepo, WorkoutExerciseRepo};
use crate::store::{StoreConnection, StoreConnector, StoreError};

/// Opens one dedicated Postgres connection per invocation.
pub struct PgStore;

/// Build connect options from resolved secret parameters.
fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .password(&config.password)
}

#[async_trait]
impl StoreConnector for PgStore {
    async fn connect(&self, config: &DbConfig) -> Result<Box<dyn StoreConnection>, StoreError> {
        tracing::debug!(host = %config.host, database = %config.name, "opening store connection");

        let conn = connect_options(config)
            .connect()
            .await
            .map_err(StoreError::Connect)?;

        Ok(Box::new(PgStoreConnection { conn }))
    }
}

struct PgStoreConnection {
    conn: PgConnection,
}

#[async_trait]
impl StoreConnection for PgStoreConnection {
    async fn insert_completed_workout(
        &mut self,
        template_id: &str,
        user_id: &str,
    ) -> Result<CompletedWorkout, StoreError> {
        let workout = CompletedWorkoutRepo::create(&mut self.conn, template_id, user_id).await?;
        Ok(workout)
    }

    async fn list_exercise_details(
        &mut self,
        template_id: &str,
    ) -> Result<Vec<ExerciseDetail>, StoreError> {
        let exercises = WorkoutExerciseRepo::list_for_template(&mut self.conn, template_id).await?;
        Ok(exercises)
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        self.conn.close().await.map_err(StoreError::Close)
    }
}
