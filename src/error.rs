//! Error types and HTTP error response handling.
//!
//! Every failure a handler or the auth gate can produce is an [`AppError`].
//! Converting one into a response is the only place error responses are
//! written, so each failed request gets exactly one error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{middleware::api_key::ApiKeyError, services::user_service::LookupError};

/// Application-wide error type.
///
/// The `#[error]` strings are the client-visible message templates, except
/// for `Database`, whose details are never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request carried no usable API key.
    #[error("Auth error: {0}")]
    AuthRequired(#[from] ApiKeyError),

    /// The API key did not resolve to a user.
    #[error("User Not Found: {0}")]
    UserNotFound(#[from] LookupError),

    /// Request body or parameters are invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// Database operation failed outside of identity resolution.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Status code and machine-readable code for each error kind.
    ///
    /// `AuthRequired` answers 511 Network Authentication Required, not 401.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::AuthRequired(_) => {
                (StatusCode::NETWORK_AUTHENTICATION_REQUIRED, "auth_required")
            }
            AppError::UserNotFound(_) => (StatusCode::NOT_FOUND, "user_not_found"),
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

/// Convert `AppError` into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "user_not_found",
///     "message": "User Not Found: no user matches the given api key"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database error");
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
