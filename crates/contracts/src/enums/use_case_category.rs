use serde::{Deserialize, Serialize};

/// Content categories for published use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseCaseCategory {
    Article,
    CaseStudy,
    Report,
    Whitepaper,
    Webinar,
}

impl UseCaseCategory {
    /// Stable wire/storage code
    pub fn code(&self) -> &'static str {
        match self {
            UseCaseCategory::Article => "article",
            UseCaseCategory::CaseStudy => "case-study",
            UseCaseCategory::Report => "report",
            UseCaseCategory::Whitepaper => "whitepaper",
            UseCaseCategory::Webinar => "webinar",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            UseCaseCategory::Article => "Article",
            UseCaseCategory::CaseStudy => "Case Study",
            UseCaseCategory::Report => "Report",
            UseCaseCategory::Whitepaper => "Whitepaper",
            UseCaseCategory::Webinar => "Webinar",
        }
    }

    /// All categories, in display order
    pub fn all() -> Vec<UseCaseCategory> {
        vec![
            UseCaseCategory::Article,
            UseCaseCategory::CaseStudy,
            UseCaseCategory::Report,
            UseCaseCategory::Whitepaper,
            UseCaseCategory::Webinar,
        ]
    }

    /// Parse from the stable code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "article" => Some(UseCaseCategory::Article),
            "case-study" => Some(UseCaseCategory::CaseStudy),
            "report" => Some(UseCaseCategory::Report),
            "whitepaper" => Some(UseCaseCategory::Whitepaper),
            "webinar" => Some(UseCaseCategory::Webinar),
            _ => None,
        }
    }
}

impl std::fmt::Display for UseCaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for cat in UseCaseCategory::all() {
            assert_eq!(UseCaseCategory::from_code(cat.code()), Some(cat));
        }
        assert_eq!(UseCaseCategory::from_code("podcast"), None);
    }

    #[test]
    fn exactly_five_categories() {
        assert_eq!(UseCaseCategory::all().len(), 5);
    }
}
