pub mod classifier;
pub mod types;

#[cfg(test)]
mod classifier_test;

pub use classifier::PageClassifier;
pub use types::{Category, ClassificationResult, KeywordVocabulary, LinkCandidate};

/// Caller-side precondition on the crawl input. Checked by the CLI
/// before any network call; violations are warned about, not recorded.
pub fn is_valid_input_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
