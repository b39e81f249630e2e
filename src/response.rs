//! Standardized success response writers.
//!
//! Every successful endpoint responds with the same envelope the host
//! platform uses across modules:
//!
//! ```json
//! {"success": true, "data": { ... }}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

/// 200 OK with the payload wrapped in the success envelope.
pub fn ok<T: Serialize>(data: T) -> Response {
    envelope(StatusCode::OK, data)
}

/// 201 Created with the payload wrapped in the success envelope.
pub fn created<T: Serialize>(data: T) -> Response {
    envelope(StatusCode::CREATED, data)
}

fn envelope<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(json!({ "success": true, "data": data }))).into_response()
}
