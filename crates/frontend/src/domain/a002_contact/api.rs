use contracts::domain::a002_contact::submission::ContactRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const API_PATH: &str = "/api/contact";

/// Submit the contact form. Server-side validation failures come back as
/// `{"success": false, "error": "..."}` and surface as the Err message.
pub async fn submit(request: &ContactRequest) -> Result<(), String> {
    let url = api_url(API_PATH);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        if let Ok(value) = response.json::<serde_json::Value>().await {
            if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
                return Err(message.to_string());
            }
        }
        return Err(format!("HTTP error: {}", status));
    }

    Ok(())
}
