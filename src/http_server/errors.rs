//! Webhook error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::orchestrator::TurnError;

/// Result type for webhook handlers
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Webhook errors
///
/// The state machine itself never rejects input; the only failures that
/// can surface here are internal (store lock poisoning and the like), so
/// everything maps to 500.
#[derive(Debug, Clone, Error)]
pub enum WebhookError {
    /// Turn processing failure
    #[error("{0}")]
    Turn(#[from] TurnError),
}

impl WebhookError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::Turn(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<WebhookError> for ErrorResponse {
    fn from(err: WebhookError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionError;

    #[test]
    fn test_turn_error_is_internal() {
        let err = WebhookError::Turn(SessionError::LockPoisoned.into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body() {
        let err = WebhookError::Turn(SessionError::LockPoisoned.into());
        let body = ErrorResponse::from(err);
        assert_eq!(body.code, 500);
        assert!(body.error.contains("lock poisoned"));
    }
}
