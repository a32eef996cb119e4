use super::repository;
use contracts::domain::a001_use_case::aggregate::{UseCase, UseCaseDto};
use uuid::Uuid;

/// Create a new published record
pub async fn create(dto: UseCaseDto) -> anyhow::Result<Uuid> {
    let mut aggregate = UseCase::new_for_insert(dto.industry.clone(), &dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update an existing record from a submitted form
pub async fn update(dto: UseCaseDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.industry = dto.industry.clone();
    aggregate.apply(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<UseCase>> {
    repository::get_by_id(id).await
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<UseCase>> {
    repository::get_by_slug(slug).await
}

pub async fn list_by_industry(industry: &str) -> anyhow::Result<Vec<UseCase>> {
    repository::list_by_industry(industry).await
}
