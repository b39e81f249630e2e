//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and a stable error
/// code in the response envelope.
///
/// # Error Categories
///
/// - **Validation**: malformed bodies, missing/invalid fields, invalid
///   enum values, missing report dates; anything the client can fix
/// - **UnbalancedLines**: the double-entry invariant was violated
/// - **NotFound**: the addressed row does not exist
/// - **Database**: any sqlx::Error from storage operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request data is invalid; the message says what was wrong.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// Total debits did not equal total credits across the lines of a
    /// transaction or journal entry.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("total debits must equal total credits")]
    UnbalancedLines,

    /// The addressed resource does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database operation failed.
    ///
    /// This wraps any sqlx::Error via `#[from]`. Returns HTTP 500 with
    /// a generic message; the real error is logged server-side only.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A malformed or undecodable JSON body is a client error.
///
/// Handlers take `Result<Json<T>, JsonRejection>` so the rejection
/// lands in the same envelope as every other validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("invalid request body: {}", rejection.body_text()))
    }
}

/// Convert AppError into an HTTP response.
///
/// Handlers return `Result<T, AppError>` and errors become JSON
/// responses in the standard envelope:
///
/// ```json
/// {
///   "success": false,
///   "error": {
///     "code": "validation_error",
///     "message": "account_code is required"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(ref msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AppError::UnbalancedLines => (
                StatusCode::BAD_REQUEST,
                "unbalanced_lines",
                self.to_string(),
            ),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::Database(ref err) => {
                // Full detail stays in the server log; the client gets
                // a generic message.
                tracing::error!(error = %err, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "an internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(
            AppError::Validation("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnbalancedLines.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("account").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
