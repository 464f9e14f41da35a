use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shoplite_core::{BoxError, CoreError};

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Authorization(String),
    Conflict(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    /// Storage failures carry their detail for the log only.
    pub fn storage(err: BoxError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Authorization(msg) => Self::Authorization(msg),
            CoreError::Conflict(msg) => Self::Conflict(msg),
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

/// Body-binding failures map to a 400 with the generic message; the
/// rejection detail goes to the log.
pub fn invalid_body(rejection: JsonRejection) -> AppError {
    tracing::debug!("request body rejected: {}", rejection.body_text());
    AppError::Validation("invalid request".to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Authorization(msg) => (StatusCode::UNAUTHORIZED, msg),
            // Re-confirming a paid order is reported as a plain bad request.
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
