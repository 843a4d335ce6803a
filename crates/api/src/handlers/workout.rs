//! Handler for recording a completed workout.
//!
//! The invocation flow is strictly linear: resolve the database secret,
//! open one dedicated store connection, validate the payload, insert the
//! completed-workout row, look up the template's exercises, release the
//! connection. The connection is released on every exit path once it has
//! been acquired.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use life_db::store::StoreConnection;
use life_secrets::DbSecret;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{json_response, CompleteWorkoutResponse};
use crate::state::AppState;

/// Raw invocation payload. Identifiers may arrive as JSON strings or
/// numbers; presence of both fields is checked during validation.
#[derive(Debug, Deserialize)]
pub struct CompleteWorkoutRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<IdValue>,
    #[serde(rename = "templateId")]
    pub template_id: Option<IdValue>,
}

/// An opaque identifier from the invocation payload.
///
/// Numbers are normalized to their decimal string form; the store treats
/// both identifiers as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(i64),
}

impl IdValue {
    fn into_inner(self) -> String {
        match self {
            IdValue::Text(text) => text,
            IdValue::Number(number) => number.to_string(),
        }
    }
}

/// A validated invocation payload.
#[derive(Debug)]
pub struct WorkoutRequest {
    pub user_id: String,
    pub template_id: String,
}

impl CompleteWorkoutRequest {
    fn from_slice(body: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(body)
            .map_err(|err| AppError::Validation(format!("invalid request body: {err}")))
    }

    fn validate(self) -> AppResult<WorkoutRequest> {
        match (self.user_id, self.template_id) {
            (Some(user_id), Some(template_id)) => Ok(WorkoutRequest {
                user_id: user_id.into_inner(),
                template_id: template_id.into_inner(),
            }),
            _ => Err(AppError::Validation(
                "Missing required parameters: userId and templateId.".to_string(),
            )),
        }
    }
}

/// POST /api/v1/completed-workouts
///
/// Records a completed workout and returns the template's exercises in
/// prescription order. Every failure, validation included, surfaces as
/// status 500 with the uniform error body.
pub async fn complete_workout(State(state): State<AppState>, body: Bytes) -> Response {
    tracing::debug!(payload = %String::from_utf8_lossy(&body), "received invocation");

    match run_invocation(&state, &body).await {
        Ok(payload) => json_response(StatusCode::OK, &payload),
        Err(err) => err.into_response(),
    }
}

/// OPTIONS /api/v1/completed-workouts -- CORS preflight.
pub async fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "content-type"),
        ],
    )
        .into_response()
}

/// Execute one invocation end to end.
async fn run_invocation(state: &AppState, body: &[u8]) -> AppResult<CompleteWorkoutResponse> {
    let raw = state.secrets.fetch(&state.config.db_secret_name).await?;
    let db_config = DbSecret::parse(&raw)?;

    let mut conn = state.store.connect(&db_config).await?;
    let result = record_workout(&mut *conn, body).await;

    // Released exactly once, whatever `record_workout` returned. A close
    // failure after a successful invocation is not surfaced to the caller.
    if let Err(err) = conn.close().await {
        tracing::warn!(error = %err, "failed to close store connection");
    }

    result
}

/// The store-facing portion of the invocation: validate, insert, look up.
async fn record_workout(
    conn: &mut dyn StoreConnection,
    body: &[u8],
) -> AppResult<CompleteWorkoutResponse> {
    let request = CompleteWorkoutRequest::from_slice(body)?.validate()?;

    let workout = conn
        .insert_completed_workout(&request.template_id, &request.user_id)
        .await?;
    tracing::info!(
        workout_id = workout.completed_workout_id,
        user_id = %request.user_id,
        template_id = %request.template_id,
        "recorded completed workout"
    );

    let exercises = conn.list_exercise_details(&request.template_id).await?;

    Ok(CompleteWorkoutResponse {
        workout_id: workout.completed_workout_id.to_string(),
        exercises,
    })
}
