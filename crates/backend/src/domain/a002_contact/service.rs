use super::repository;
use contracts::domain::a002_contact::submission::{ContactRequest, ContactSubmission};
use uuid::Uuid;

use crate::shared::email;

/// Validate, store, then notify.
///
/// Storage is the source of truth; the notification email is best-effort and
/// never turns a stored submission into an error.
pub async fn submit(request: ContactRequest) -> anyhow::Result<Uuid> {
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let submission = ContactSubmission::new(&request);
    let id = repository::insert(&submission).await?;

    // Off the request path; the response never waits on the mail provider
    tokio::spawn(async move {
        email::notify_contact_submission(&submission).await;
    });

    Ok(id)
}

pub async fn list_all() -> anyhow::Result<Vec<ContactSubmission>> {
    repository::list_all().await
}
