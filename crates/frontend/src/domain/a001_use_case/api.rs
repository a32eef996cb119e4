use contracts::domain::a001_use_case::aggregate::{UseCase, UseCaseDto};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

const API_PATH: &str = "/api/use_cases";

/// Pull the human message out of an `{"error": "..."}` body, falling back
/// to the bare status code.
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(value) = response.json::<serde_json::Value>().await {
        if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
            return message.to_string();
        }
    }
    format!("HTTP error: {}", status)
}

/// Fetch all records for one industry, newest first
pub async fn list_by_industry(industry: &str) -> Result<Vec<UseCase>, String> {
    let url = api_url(&format!("{}?industry={}", API_PATH, industry));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: Vec<UseCase> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch a single record by its URL slug
pub async fn get_by_slug(slug: &str) -> Result<Option<UseCase>, String> {
    let url = api_url(&format!("{}/by-slug/{}", API_PATH, slug));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: UseCase = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(Some(data))
}

/// Create or update depending on whether the DTO carries an id
pub async fn save(dto: &UseCaseDto) -> Result<(), String> {
    let url = api_url(API_PATH);

    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

pub async fn delete(id: &str) -> Result<(), String> {
    let url = api_url(&format!("{}/{}", API_PATH, id));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
