use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::error_body;
use crate::domain::a002_contact;
use contracts::domain::a002_contact::submission::{ContactRequest, ContactSubmission};

/// POST /api/contact
pub async fn submit(
    Json(request): Json<ContactRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match a002_contact::service::submit(request).await {
        Ok(_) => Ok(Json(json!({ "success": true }))),
        Err(e) => {
            let message = e.to_string();
            if message.starts_with("Validation failed") {
                // Strip the prefix; the client shows this text verbatim
                let shown = message
                    .strip_prefix("Validation failed: ")
                    .unwrap_or(&message)
                    .to_string();
                Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": shown })),
                ))
            } else {
                tracing::error!("contact submit failed: {}", e);
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to send message" })),
                ))
            }
        }
    }
}

/// GET /api/contact
pub async fn list_all() -> Result<Json<Vec<ContactSubmission>>, (StatusCode, Json<Value>)> {
    match a002_contact::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("contact list failed: {}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load submissions",
            ))
        }
    }
}
