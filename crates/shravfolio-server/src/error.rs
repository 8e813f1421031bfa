//! Error types for the portfolio HTTP service.
//!
//! [`ApiError`] unifies all failure modes and implements [`IntoResponse`]
//! so handlers can return `Result<…, ApiError>` directly. Every error body
//! is `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shravfolio_sdk::SdkError;
use uuid::Uuid;

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was malformed or missing a field.
    #[error("{0}")]
    BadRequest(String),

    /// No assistant session with this id is mounted.
    #[error("unknown session: {0}")]
    UnknownSession(Uuid),

    /// The generative-AI backend failed.
    #[error("chat backend failed: {0}")]
    Upstream(#[from] SdkError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::UnknownSession(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Upstream(SdkError::EmptyResponse) => {
                (StatusCode::BAD_GATEWAY, "No response from model".to_string())
            }
            Self::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Sorry, something went wrong. Try again.".to_string(),
            ),
        };

        tracing::error!(%status, error = %self, "request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        let cases = [
            (ApiError::BadRequest("Missing message".into()), StatusCode::BAD_REQUEST),
            (ApiError::UnknownSession(Uuid::nil()), StatusCode::NOT_FOUND),
            (ApiError::Upstream(SdkError::EmptyResponse), StatusCode::BAD_GATEWAY),
            (
                ApiError::Upstream(SdkError::MissingCredential),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
