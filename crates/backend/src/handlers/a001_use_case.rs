use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error_body;
use crate::domain::a001_use_case;
use contracts::domain::a001_use_case::aggregate::{UseCase, UseCaseDto};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub industry: Option<String>,
}

/// GET /api/use_cases?industry=healthcare
pub async fn list(
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UseCase>>, (StatusCode, Json<Value>)> {
    let industry = match params.industry.as_deref() {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return Err(error_body(StatusCode::BAD_REQUEST, "Industry is required")),
    };
    match a001_use_case::service::list_by_industry(&industry).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("use case list failed: {}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load use cases",
            ))
        }
    }
}

/// GET /api/use_cases/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<UseCase>, (StatusCode, Json<Value>)> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(error_body(StatusCode::BAD_REQUEST, "Invalid ID")),
    };
    match a001_use_case::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_body(StatusCode::NOT_FOUND, "Use case not found")),
        Err(e) => {
            tracing::error!("use case get failed: {}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load use case",
            ))
        }
    }
}

/// GET /api/use_cases/by-slug/:slug
pub async fn get_by_slug(
    Path(slug): Path<String>,
) -> Result<Json<UseCase>, (StatusCode, Json<Value>)> {
    match a001_use_case::service::get_by_slug(&slug).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_body(StatusCode::NOT_FOUND, "Use case not found")),
        Err(e) => {
            tracing::error!("use case get by slug failed: {}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load use case",
            ))
        }
    }
}

/// POST /api/use_cases — create when `id` is absent, update otherwise
pub async fn upsert(
    Json(dto): Json<UseCaseDto>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let result = if let Some(id) = dto.id.clone() {
        if uuid::Uuid::parse_str(&id).is_err() {
            return Err(error_body(StatusCode::BAD_REQUEST, "Invalid ID"));
        }
        a001_use_case::service::update(dto).await.map(|_| id)
    } else {
        a001_use_case::service::create(dto).await.map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({ "id": id }))),
        Err(e) => {
            let message = e.to_string();
            if message.starts_with("Validation failed") {
                Err(error_body(StatusCode::BAD_REQUEST, message))
            } else if message.contains("Not found") {
                Err(error_body(StatusCode::NOT_FOUND, "Use case not found"))
            } else {
                tracing::error!("use case upsert failed: {}", e);
                Err(error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save use case",
                ))
            }
        }
    }
}

/// DELETE /api/use_cases/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), (StatusCode, Json<Value>)> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(error_body(StatusCode::BAD_REQUEST, "Invalid ID")),
    };
    match a001_use_case::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(error_body(StatusCode::NOT_FOUND, "Use case not found")),
        Err(e) => {
            tracing::error!("use case delete failed: {}", e);
            Err(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete use case",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rejected before any service or database call, like the path-param
    // handlers.
    #[tokio::test]
    async fn upsert_with_malformed_id_is_a_bad_request() {
        let dto = UseCaseDto {
            id: Some("not-a-uuid".to_string()),
            ..UseCaseDto::default()
        };
        let (status, body) = upsert(Json(dto))
            .await
            .err()
            .expect("malformed id must be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0["error"], "Invalid ID");
    }
}
