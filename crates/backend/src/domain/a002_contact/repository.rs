use contracts::domain::a002_contact::submission::{ContactSubmission, ContactSubmissionId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_contact_submission")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub email: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactSubmission {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        ContactSubmission {
            id: ContactSubmissionId(uuid),
            email: m.email,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<ContactSubmission>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(submission: &ContactSubmission) -> anyhow::Result<Uuid> {
    let uuid = submission.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        email: Set(submission.email.clone()),
        message: Set(submission.message.clone()),
        created_at: Set(submission.created_at),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
