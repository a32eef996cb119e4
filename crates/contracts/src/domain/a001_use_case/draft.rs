//! Transient state of the admin content form.
//!
//! Framework-free so the transition rules can be tested without a UI runtime;
//! the frontend wraps a [`UseCaseDraft`] in a reactive signal.

use super::aggregate::{UseCase, UseCaseDto};
use crate::enums::use_case_category::UseCaseCategory;
use crate::shared::slug::slugify;
use serde::{Deserialize, Serialize};

/// Which body the record carries. Selecting one clears the other's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    RichText,
    Pdf,
}

/// In-memory draft behind the create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct UseCaseDraft {
    /// Present when editing an existing record
    pub editing_id: Option<String>,
    pub category: UseCaseCategory,
    pub title: String,
    pub slug: String,
    /// Once true, title edits stop regenerating the slug
    pub slug_manually_edited: bool,
    pub summary: String,
    pub content_html: String,
    pub pdf_url: String,
    pub content_kind: ContentKind,
    pub date: chrono::NaiveDate,
    pub image: String,
}

impl UseCaseDraft {
    /// Empty draft for "create new": today's date, default category.
    pub fn new_for_create() -> Self {
        Self {
            editing_id: None,
            category: UseCaseCategory::CaseStudy,
            title: String::new(),
            slug: String::new(),
            slug_manually_edited: false,
            summary: String::new(),
            content_html: String::new(),
            pdf_url: String::new(),
            content_kind: ContentKind::RichText,
            date: chrono::Utc::now().date_naive(),
            image: String::new(),
        }
    }

    /// Draft populated from an existing record for editing.
    ///
    /// The slug is marked manually set so a later title edit cannot silently
    /// overwrite a curated slug; the content kind follows whether a PDF
    /// reference is present.
    pub fn from_record(record: &UseCase) -> Self {
        let has_pdf = record.pdf_url.is_some();
        Self {
            editing_id: Some(record.to_string_id()),
            category: record.category,
            title: record.title.clone(),
            slug: record.slug.clone(),
            slug_manually_edited: true,
            summary: record.summary.clone().unwrap_or_default(),
            content_html: record.content_html.clone().unwrap_or_default(),
            pdf_url: record.pdf_url.clone().unwrap_or_default(),
            content_kind: if has_pdf {
                ContentKind::Pdf
            } else {
                ContentKind::RichText
            },
            date: record.date,
            image: record.image.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Title edit: regenerates the slug unless it was manually set.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        if !self.slug_manually_edited {
            self.slug = slugify(title);
        }
    }

    /// Explicit slug edit: marks the slug manual and still sanitizes the
    /// input so it stays well-formed.
    pub fn set_slug(&mut self, raw: &str) {
        self.slug_manually_edited = true;
        self.slug = slugify(raw);
    }

    /// Switch between rich text and PDF, clearing the deselected side.
    pub fn set_content_kind(&mut self, kind: ContentKind) {
        if self.content_kind == kind {
            return;
        }
        self.content_kind = kind;
        match kind {
            ContentKind::RichText => self.pdf_url.clear(),
            ContentKind::Pdf => self.content_html.clear(),
        }
    }

    /// Package the draft into the persistence payload.
    pub fn to_dto(&self, industry: &str) -> UseCaseDto {
        let (content_html, pdf_url) = match self.content_kind {
            ContentKind::RichText => (opt(&self.content_html), None),
            ContentKind::Pdf => (None, opt(&self.pdf_url)),
        };
        UseCaseDto {
            id: self.editing_id.clone(),
            industry: industry.to_string(),
            category: self.category,
            title: self.title.trim().to_string(),
            slug: self.slug.clone(),
            summary: opt(&self.summary),
            content_html,
            pdf_url,
            date: self.date,
            image: opt(&self.image),
        }
    }

    /// Client-side validation mirroring the aggregate's rules.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.slug.trim().is_empty() {
            return Err("URL slug is required");
        }
        Ok(())
    }
}

fn opt(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityMetadata;
    use crate::domain::a001_use_case::aggregate::UseCaseId;

    fn record_with_pdf() -> UseCase {
        UseCase {
            id: UseCaseId::new_v4(),
            industry: "healthcare".into(),
            category: UseCaseCategory::Report,
            title: "Claims automation".into(),
            slug: "claims-automation-2025".into(),
            summary: Some("Short summary".into()),
            content_html: None,
            pdf_url: Some("https://files.example.com/claims.pdf".into()),
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            image: None,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn create_draft_starts_empty_with_today() {
        let draft = UseCaseDraft::new_for_create();
        assert!(!draft.is_edit_mode());
        assert_eq!(draft.category, UseCaseCategory::CaseStudy);
        assert_eq!(draft.date, chrono::Utc::now().date_naive());
        assert!(!draft.slug_manually_edited);
    }

    #[test]
    fn title_edits_track_slug_until_manual_override() {
        let mut draft = UseCaseDraft::new_for_create();
        draft.set_title("AI in Claims Processing");
        assert_eq!(draft.slug, "ai-in-claims-processing");

        draft.set_title("AI in Claims Processing, Part 2");
        assert_eq!(draft.slug, "ai-in-claims-processing-part-2");

        draft.set_slug("Curated Slug!");
        assert_eq!(draft.slug, "curated-slug");

        // Curated slug survives further title edits
        draft.set_title("Completely different title");
        assert_eq!(draft.slug, "curated-slug");
    }

    #[test]
    fn edit_draft_keeps_curated_slug() {
        let draft = UseCaseDraft::from_record(&record_with_pdf());
        assert!(draft.is_edit_mode());
        assert!(draft.slug_manually_edited);
        assert_eq!(draft.content_kind, ContentKind::Pdf);
        assert_eq!(draft.pdf_url, "https://files.example.com/claims.pdf");
    }

    #[test]
    fn content_kind_toggle_clears_the_other_side() {
        let mut draft = UseCaseDraft::new_for_create();
        draft.content_html = "<p>body</p>".into();
        draft.set_content_kind(ContentKind::Pdf);
        assert_eq!(draft.content_html, "");

        draft.pdf_url = "https://example.com/a.pdf".into();
        draft.set_content_kind(ContentKind::RichText);
        assert_eq!(draft.pdf_url, "");
    }

    #[test]
    fn toggle_to_current_kind_is_a_no_op() {
        let mut draft = UseCaseDraft::new_for_create();
        draft.content_html = "<p>kept</p>".into();
        draft.set_content_kind(ContentKind::RichText);
        assert_eq!(draft.content_html, "<p>kept</p>");
    }

    #[test]
    fn dto_carries_only_the_selected_content_kind() {
        let mut draft = UseCaseDraft::new_for_create();
        draft.set_title("Title");
        draft.content_html = "<p>body</p>".into();
        // Stale value left behind deliberately; the DTO must ignore it
        draft.pdf_url = "https://stale.example.com/x.pdf".into();

        let dto = draft.to_dto("retail");
        assert_eq!(dto.content_html.as_deref(), Some("<p>body</p>"));
        assert_eq!(dto.pdf_url, None);
        assert_eq!(dto.industry, "retail");
    }

    #[test]
    fn validation_requires_title_and_slug() {
        let mut draft = UseCaseDraft::new_for_create();
        assert!(draft.validate().is_err());
        draft.set_title("Only a title");
        assert!(draft.validate().is_ok());
    }
}
