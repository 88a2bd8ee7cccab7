use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Input};
use tracing::{error, info};

use crate::classifier::{is_valid_input_url, ClassificationResult};
use crate::ledger::CsvLedger;
use crate::models::{CliApp, CrawlRecord, CrawlStatus, Result, NOT_FOUND};

impl CliApp {
    pub async fn start_crawl(&self) -> Result<()> {
        let input_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the website URL")
            .interact_text()?;

        let filename: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the output file name")
            .default(self.config.output.default_filename.clone())
            .interact_text()?;

        if input_url.trim().is_empty() || filename.trim().is_empty() {
            println!("⚠️  Please enter a URL and output file name to crawl.");
            return Ok(());
        }
        if !is_valid_input_url(&input_url) {
            println!("⚠️  Invalid URL. Please enter a valid URL starting with http:// or https://.");
            return Ok(());
        }

        println!("\n🕷️  Crawling started...");
        let record = self.run_crawl(&input_url, &filename).await?;

        let ledger = self.ledger_for(&filename);
        match record.status {
            CrawlStatus::Success => {
                println!(
                    "✅ Crawling complete. Results saved to: {}",
                    ledger.path().display()
                );
            }
            _ => {
                println!("❌ No 'features' or 'pricing' URLs found on the page.");
            }
        }
        println!("   Features URL: {}", record.features_url);
        println!("   Pricing URL:  {}", record.pricing_url);

        // Show the accumulated table, matching what was just written.
        match ledger.read_all() {
            Ok(records) => Self::display_records(&records),
            Err(e) => println!("❌ Error reading file '{}': {}", ledger.path().display(), e),
        }

        Ok(())
    }

    /// One crawl: classify the page, derive the status, append the row.
    /// A failed append is logged but does not fail the crawl; the status
    /// was decided before the write and is still reported.
    pub async fn run_crawl(&self, input_url: &str, output_filename: &str) -> Result<CrawlRecord> {
        let (classification, status) = match self.classifier.classify(input_url).await {
            Ok(result) => (result, CrawlStatus::Success),
            Err(e) => {
                error!("Error retrieving the page {}: {}", input_url, e);
                (ClassificationResult::default(), CrawlStatus::NoUrlsFound)
            }
        };

        let record = CrawlRecord {
            input_url: input_url.to_string(),
            features_url: classification
                .features
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            pricing_url: classification
                .pricing
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            status,
        };

        match self.ledger_for(output_filename).append(&record) {
            Ok(()) => info!("Data saved for {} - Status: {}", input_url, record.status),
            Err(e) => error!("Error writing to CSV: {}", e),
        }

        Ok(record)
    }

    pub(crate) fn ledger_for(&self, filename: &str) -> CsvLedger {
        CsvLedger::new(Path::new(&self.config.output.directory).join(filename))
    }
}
