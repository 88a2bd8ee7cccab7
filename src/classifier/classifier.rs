use crate::classifier::types::{Category, ClassificationResult, KeywordVocabulary, LinkCandidate};
use crate::config::CrawlerConfig;
use crate::errors::FetchError;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Finds a site's features and pricing pages from the anchors of its
/// landing page. One GET per call, no link-following.
pub struct PageClassifier {
    client: Client,
    vocabulary: KeywordVocabulary,
    excluded_url_substrings: Vec<String>,
}

impl PageClassifier {
    pub fn new(crawler: &CrawlerConfig, vocabulary: KeywordVocabulary) -> Self {
        let client = Client::builder()
            .user_agent(crawler.user_agent.as_str())
            .timeout(Duration::from_secs(crawler.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            vocabulary,
            excluded_url_substrings: crawler.excluded_url_substrings.clone(),
        }
    }

    /// Fetches `base_url` and scans its anchors in document order for
    /// features and pricing links. A page without matches is still `Ok`;
    /// only the fetch itself can fail.
    pub async fn classify(&self, base_url: &str) -> Result<ClassificationResult, FetchError> {
        let html = self.fetch_page(base_url).await?;
        Ok(self.classify_document(&html, base_url))
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }

    /// Pure scan over an already-fetched document. Split out from
    /// [`classify`](Self::classify) so the assignment policy is testable
    /// without a server.
    pub fn classify_document(&self, html: &str, base_url: &str) -> ClassificationResult {
        let document = Html::parse_document(html);
        let link_selector = Selector::parse("a[href]").unwrap();
        let mut result = ClassificationResult::default();

        for element in document.select(&link_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if href.is_empty() {
                continue;
            }
            let Some(candidate) = resolve_link(href, base_url) else {
                continue;
            };
            if !self.is_excluded(&candidate.resolved_url) {
                self.assign_categories(&candidate, &mut result);
            }
            if result.is_complete() {
                break;
            }
        }

        result
    }

    /// Tests the lowered raw href (not the resolved URL) against each
    /// category's terms, features first. A still-open category takes the
    /// link's resolved URL; one link may fill both categories.
    fn assign_categories(&self, link: &LinkCandidate, result: &mut ClassificationResult) {
        let href_lower = link.raw_href.to_lowercase();

        for category in Category::ALL {
            if result.get(category).is_some() {
                continue;
            }
            if self.vocabulary.matches(category, &href_lower) {
                result.assign(category, link.resolved_url.clone());
            }
        }
    }

    fn is_excluded(&self, resolved_url: &str) -> bool {
        self.excluded_url_substrings
            .iter()
            .any(|substring| resolved_url.contains(substring.as_str()))
    }
}

/// Resolves an href to its absolute form. Absolute hrefs pass through;
/// relative ones (including protocol-relative) join against the base.
/// Hrefs that resolve to nothing are dropped by the caller.
fn resolve_link(href: &str, base_url: &str) -> Option<LinkCandidate> {
    let resolved = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => Url::parse(base_url).ok()?.join(href).ok()?,
    };

    Some(LinkCandidate {
        raw_href: href.to_string(),
        resolved_url: resolved.to_string(),
    })
}
