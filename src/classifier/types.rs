use crate::config::KeywordsConfig;

/// The two page roles the classifier searches for. `ALL` fixes the
/// evaluation order: features is tested before pricing for every link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Features,
    Pricing,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Features, Category::Pricing];
}

/// Immutable per-category term lists. Built once at startup and handed
/// to the classifier; terms are lowercased on construction so href
/// matching stays a plain substring test.
#[derive(Debug, Clone)]
pub struct KeywordVocabulary {
    features: Vec<String>,
    pricing: Vec<String>,
}

impl KeywordVocabulary {
    pub fn new(features: Vec<String>, pricing: Vec<String>) -> Self {
        let lower = |terms: Vec<String>| {
            terms
                .into_iter()
                .map(|t| t.to_lowercase())
                .collect::<Vec<_>>()
        };
        Self {
            features: lower(features),
            pricing: lower(pricing),
        }
    }

    pub fn from_config(keywords: &KeywordsConfig) -> Self {
        Self::new(keywords.features.clone(), keywords.pricing.clone())
    }

    pub fn terms(&self, category: Category) -> &[String] {
        match category {
            Category::Features => &self.features,
            Category::Pricing => &self.pricing,
        }
    }

    /// True if any term of the category occurs in the lowered href.
    pub fn matches(&self, category: Category, lowered_href: &str) -> bool {
        self.terms(category)
            .iter()
            .any(|term| lowered_href.contains(term.as_str()))
    }
}

/// One extracted anchor: the href as written in the document and its
/// absolute form resolved against the base URL. Lives only within a
/// single classification pass.
#[derive(Debug, Clone)]
pub struct LinkCandidate {
    pub raw_href: String,
    pub resolved_url: String,
}

/// At most one resolved URL per category. Assignments are
/// first-match-wins and never overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub features: Option<String>,
    pub pricing: Option<String>,
}

impl ClassificationResult {
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Features => self.features.as_deref(),
            Category::Pricing => self.pricing.as_deref(),
        }
    }

    pub fn assign(&mut self, category: Category, url: String) {
        let slot = match category {
            Category::Features => &mut self.features,
            Category::Pricing => &mut self.pricing,
        };
        if slot.is_none() {
            *slot = Some(url);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.features.is_some() && self.pricing.is_some()
    }
}
