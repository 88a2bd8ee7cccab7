use tracing::info;

use crate::classifier::{KeywordVocabulary, PageClassifier};
use crate::config::Config;
use crate::models::{CliApp, Result};

#[derive(Debug, Clone)]
pub enum MenuAction {
    StartCrawl,
    ViewResultsFile,
    DeleteResultsFile,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::StartCrawl => {
                write!(f, "🕷️  Crawl a website for features & pricing URLs")
            }
            MenuAction::ViewResultsFile => write!(f, "📄 View a results file"),
            MenuAction::DeleteResultsFile => write!(f, "🗑️  Delete a results file"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let vocabulary = KeywordVocabulary::from_config(&config.keywords);
        info!(
            "Loaded {} features term(s) and {} pricing term(s)",
            config.keywords.features.len(),
            config.keywords.pricing.len()
        );

        let classifier = PageClassifier::new(&config.crawler, vocabulary);

        Ok(Self { config, classifier })
    }
}
