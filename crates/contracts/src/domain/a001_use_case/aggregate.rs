use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::use_case_category::UseCaseCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a published use case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UseCaseId(pub Uuid);

impl UseCaseId {
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

impl AggregateId for UseCaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UseCaseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One published piece of content (article, case study, report, whitepaper
/// or webinar) attached to an industry.
///
/// A record with neither `content_html` nor `pdf_url` is valid; public pages
/// render it as "content coming soon".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCase {
    pub id: UseCaseId,

    /// Industry slug this record belongs to (grouping key)
    pub industry: String,

    pub category: UseCaseCategory,

    pub title: String,

    /// URL-safe identifier. Derived from the title unless curated by hand.
    /// Uniqueness is expected but not enforced here.
    pub slug: String,

    pub summary: Option<String>,

    /// Rich-text body. Mutually exclusive with `pdf_url` at the form level.
    #[serde(rename = "contentHtml")]
    pub content_html: Option<String>,

    /// External PDF reference shown instead of rich text when present
    #[serde(rename = "pdfUrl")]
    pub pdf_url: Option<String>,

    /// Publication date shown on cards; list ordering key
    pub date: chrono::NaiveDate,

    /// Hero image URL
    pub image: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl UseCase {
    /// Build a new record for insertion from a submitted form
    pub fn new_for_insert(industry: String, dto: &UseCaseDto) -> Self {
        let mut record = Self {
            id: UseCaseId::new_v4(),
            industry,
            category: dto.category,
            title: String::new(),
            slug: String::new(),
            summary: None,
            content_html: None,
            pdf_url: None,
            date: dto.date,
            image: None,
            metadata: EntityMetadata::new(),
        };
        record.apply(dto);
        record
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Full replace of the editable fields from a submitted form
    pub fn apply(&mut self, dto: &UseCaseDto) {
        self.category = dto.category;
        self.title = dto.title.clone();
        self.slug = dto.slug.clone();
        self.summary = none_if_blank(&dto.summary);
        self.content_html = none_if_blank(&dto.content_html);
        self.pdf_url = none_if_blank(&dto.pdf_url);
        self.date = dto.date;
        self.image = none_if_blank(&dto.image);
    }

    /// Validation run before any persistence call
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.slug.trim().is_empty() {
            return Err("Slug must not be empty".into());
        }
        if self.industry.trim().is_empty() {
            return Err("Industry must not be empty".into());
        }
        Ok(())
    }

    /// Hook run just before writing
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

fn none_if_blank(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload for a use case. `id = None` means create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCaseDto {
    pub id: Option<String>,
    pub industry: String,
    pub category: UseCaseCategory,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    #[serde(rename = "contentHtml")]
    pub content_html: Option<String>,
    #[serde(rename = "pdfUrl")]
    pub pdf_url: Option<String>,
    pub date: chrono::NaiveDate,
    pub image: Option<String>,
}

impl Default for UseCaseDto {
    fn default() -> Self {
        Self {
            id: None,
            industry: String::new(),
            category: UseCaseCategory::CaseStudy,
            title: String::new(),
            slug: String::new(),
            summary: None,
            content_html: None,
            pdf_url: None,
            date: chrono::Utc::now().date_naive(),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(title: &str) -> UseCaseDto {
        UseCaseDto {
            industry: "healthcare".into(),
            title: title.into(),
            slug: crate::shared::slug::slugify(title),
            ..Default::default()
        }
    }

    #[test]
    fn new_for_insert_applies_form_fields() {
        let record = UseCase::new_for_insert("healthcare".into(), &dto("AI in Claims Processing"));
        assert_eq!(record.industry, "healthcare");
        assert_eq!(record.slug, "ai-in-claims-processing");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn blank_optionals_normalize_to_none() {
        let mut d = dto("Title");
        d.summary = Some("   ".into());
        d.image = Some(String::new());
        let record = UseCase::new_for_insert("retail".into(), &d);
        assert_eq!(record.summary, None);
        assert_eq!(record.image, None);
    }

    #[test]
    fn empty_title_fails_validation() {
        let record = UseCase::new_for_insert("retail".into(), &dto(""));
        assert!(record.validate().is_err());
    }

    #[test]
    fn record_without_content_or_pdf_is_valid() {
        // "content coming soon" is a legitimate state, not an error
        let record = UseCase::new_for_insert("retail".into(), &dto("Placeholder"));
        assert_eq!(record.content_html, None);
        assert_eq!(record.pdf_url, None);
        assert!(record.validate().is_ok());
    }
}
