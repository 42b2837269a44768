use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failure of a single scoring request. The page shows one static message
/// for every variant; the detail is only logged.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("scoring request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("scoring response was not a score: {0}")]
    Decode(#[from] serde_json::Error),
}
