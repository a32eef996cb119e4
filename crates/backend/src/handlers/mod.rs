pub mod a001_use_case;
pub mod a002_contact;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Error body shape shared by all endpoints: `{"error": "..."}`.
pub fn error_body(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message.into() })))
}
