use chrono::Utc;
use contracts::domain::a001_use_case::aggregate::{UseCase, UseCaseId};
use contracts::domain::common::EntityMetadata;
use contracts::enums::use_case_category::UseCaseCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_use_case")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub industry: String,
    pub category: String,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content_html: Option<String>,
    pub pdf_url: Option<String>,
    pub date: chrono::NaiveDate,
    pub image: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UseCase {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        // Unknown category codes fall back to the least specific kind
        let category = UseCaseCategory::from_code(&m.category).unwrap_or(UseCaseCategory::Article);

        UseCase {
            id: UseCaseId(uuid),
            industry: m.industry,
            category,
            title: m.title,
            slug: m.slug,
            summary: m.summary,
            content_html: m.content_html,
            pdf_url: m.pdf_url,
            date: m.date,
            image: m.image,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Newest first: publication date, then creation time as tiebreaker.
pub async fn list_by_industry(industry: &str) -> anyhow::Result<Vec<UseCase>> {
    let items = Entity::find()
        .filter(Column::Industry.eq(industry))
        .order_by_desc(Column::Date)
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<UseCase>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<UseCase>> {
    let result = Entity::find()
        .filter(Column::Slug.eq(slug))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &UseCase) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        industry: Set(aggregate.industry.clone()),
        category: Set(aggregate.category.code().to_string()),
        title: Set(aggregate.title.clone()),
        slug: Set(aggregate.slug.clone()),
        summary: Set(aggregate.summary.clone()),
        content_html: Set(aggregate.content_html.clone()),
        pdf_url: Set(aggregate.pdf_url.clone()),
        date: Set(aggregate.date),
        image: Set(aggregate.image.clone()),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &UseCase) -> anyhow::Result<()> {
    let id = aggregate.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        industry: Set(aggregate.industry.clone()),
        category: Set(aggregate.category.code().to_string()),
        title: Set(aggregate.title.clone()),
        slug: Set(aggregate.slug.clone()),
        summary: Set(aggregate.summary.clone()),
        content_html: Set(aggregate.content_html.clone()),
        pdf_url: Set(aggregate.pdf_url.clone()),
        date: Set(aggregate.date),
        image: Set(aggregate.image.clone()),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

/// Hard delete; published content has no recycle bin.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
