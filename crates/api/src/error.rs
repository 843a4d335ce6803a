use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use life_db::StoreError;
use life_secrets::SecretsError;

use crate::response::{json_response, ErrorBody};

/// Application-level error type for the invocation flow.
///
/// Every variant surfaces as status 500 with the uniform failure body
/// (validation included); the variants exist so configuration, validation,
/// and store failures stay distinguishable in logs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Secret resolution or parsing failed.
    #[error(transparent)]
    Configuration(#[from] SecretsError),

    /// The invocation payload is missing required fields or is not JSON.
    #[error("{0}")]
    Validation(String),

    /// The store connection or a statement failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for the invocation flow.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Configuration(err) => {
                tracing::error!(error = %err, "secret resolution failed");
            }
            AppError::Validation(msg) => {
                tracing::warn!(error = %msg, "invocation payload rejected");
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
            }
        }

        json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ErrorBody::new(self.to_string()),
        )
    }
}
