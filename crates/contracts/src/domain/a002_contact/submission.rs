use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactSubmissionId(pub Uuid);

impl ContactSubmissionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ContactSubmissionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ContactSubmissionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A message left through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub email: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ContactSubmission {
    pub fn new(request: &ContactRequest) -> Self {
        Self {
            id: ContactSubmissionId::new_v4(),
            email: request.email.trim().to_string(),
            message: request.message.trim().to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Incoming contact form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub email: String,
    pub message: String,
}

pub const MIN_MESSAGE_LEN: usize = 10;

impl ContactRequest {
    /// Validation shared by the form and the endpoint.
    ///
    /// The email check is a shape test (something@something.something with no
    /// whitespace), not full address parsing.
    pub fn validate(&self) -> Result<(), String> {
        if !is_plausible_email(self.email.trim()) {
            return Err("Please enter a valid email address".into());
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(format!(
                "Message must be at least {} characters",
                MIN_MESSAGE_LEN
            ));
        }
        Ok(())
    }
}

fn is_plausible_email(s: &str) -> bool {
    if s.is_empty() || s.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with something after it
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        let req = request("person@example.com", "I would like a demo, please.");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "not-an-email",
            "@example.com",
            "person@",
            "person@nodot",
            "person@.com",
            "two words@example.com",
            "",
        ] {
            let req = request(email, "A long enough message body.");
            assert!(req.validate().is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn message_length_counts_trimmed_characters() {
        // 9 trimmed chars: rejected
        assert!(request("a@b.co", "  123456789  ").validate().is_err());
        // 10 trimmed chars: accepted
        assert!(request("a@b.co", "  1234567890  ").validate().is_ok());
    }

    #[test]
    fn submission_trims_its_fields() {
        let sub = ContactSubmission::new(&request("  a@b.co  ", "  hello there world  "));
        assert_eq!(sub.email, "a@b.co");
        assert_eq!(sub.message, "hello there world");
    }
}
