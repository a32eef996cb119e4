//! Best-effort contact notifications through the Resend HTTP API.
//!
//! Delivery failures are logged and swallowed: a stored submission must never
//! be reported as an error just because the notification email bounced.

use contracts::domain::a002_contact::submission::ContactSubmission;
use once_cell::sync::OnceCell;
use serde_json::json;

use crate::shared::config::EmailConfig;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

struct Mailer {
    client: reqwest::Client,
    config: EmailConfig,
}

static MAILER: OnceCell<Option<Mailer>> = OnceCell::new();

/// Called once at startup. A missing `[email]` config section disables
/// dispatch entirely.
pub fn initialize_mailer(config: Option<EmailConfig>) {
    match &config {
        Some(cfg) => tracing::info!(
            "Contact notifications enabled, recipient: {}",
            cfg.contact_recipient
        ),
        None => tracing::warn!("No [email] config section, contact notifications disabled"),
    }
    let mailer = config.map(|config| Mailer {
        client: reqwest::Client::new(),
        config,
    });
    if MAILER.set(mailer).is_err() {
        tracing::warn!("Mailer was already initialized");
    }
}

/// Send the notification for a stored submission. Never fails the caller.
pub async fn notify_contact_submission(submission: &ContactSubmission) {
    let Some(Some(mailer)) = MAILER.get() else {
        return;
    };

    let body = json!({
        "from": mailer.config.sender,
        "to": [mailer.config.contact_recipient],
        "reply_to": submission.email,
        "subject": format!("New contact form message from {}", submission.email),
        "text": format!(
            "From: {}\nReceived: {}\n\n{}",
            submission.email,
            submission.created_at.to_rfc3339(),
            submission.message
        ),
    });

    let result = mailer
        .client
        .post(RESEND_ENDPOINT)
        .bearer_auth(&mailer.config.resend_api_key)
        .json(&body)
        .send()
        .await;

    match result {
        Ok(response) if response.status().is_success() => {
            tracing::info!("Contact notification sent for {}", submission.to_string_id());
        }
        Ok(response) => {
            tracing::warn!(
                "Contact notification rejected with status {}",
                response.status()
            );
        }
        Err(e) => {
            tracing::warn!("Contact notification failed: {}", e);
        }
    }
}
