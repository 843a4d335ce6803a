//! Fixed-header JSON response construction.
//!
//! Every response this service emits, success or failure, carries the same
//! CORS pair and JSON content type. The helpers here are the single place
//! those headers are attached; a wildcard origin combined with credentials
//! cannot be expressed through `tower_http::cors::CorsLayer`.

use axum::http::header::{
    HeaderName, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use life_db::models::ExerciseDetail;
use serde::Serialize;

/// Headers present on every response.
pub const RESPONSE_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
    (CONTENT_TYPE, "application/json"),
];

/// Fallback body for the case where response serialization itself fails.
const SERIALIZATION_FAILURE_BODY: &str =
    r#"{"error":"Internal Server Error","message":"failed to serialize response body"}"#;

/// Success payload: the generated workout id plus the template's exercises
/// in prescription order.
#[derive(Debug, Serialize)]
pub struct CompleteWorkoutResponse {
    /// String form of the generated `completed_workout_id`.
    #[serde(rename = "workoutId")]
    pub workout_id: String,
    pub exercises: Vec<ExerciseDetail>,
}

/// Uniform failure payload.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: String) -> Self {
        Self {
            error: "Internal Server Error",
            message,
        }
    }
}

/// Serialize `body` into a response carrying the fixed headers.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(buf) => (status, RESPONSE_HEADERS, buf).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                RESPONSE_HEADERS,
                SERIALIZATION_FAILURE_BODY,
            )
                .into_response()
        }
    }
}
