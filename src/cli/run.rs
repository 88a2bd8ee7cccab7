use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n🕷️  Automated Features and Pricing Crawler");
        println!("═══════════════════════════════════════════");

        self.show_results_files()?;

        loop {
            let actions = vec![
                MenuAction::StartCrawl,
                MenuAction::ViewResultsFile,
                MenuAction::DeleteResultsFile,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::StartCrawl => {
                    if let Err(e) = self.start_crawl().await {
                        error!("Crawl failed: {}", e);
                    }
                }
                MenuAction::ViewResultsFile => {
                    if let Err(e) = self.view_results_file() {
                        error!("Failed to view results file: {}", e);
                    }
                }
                MenuAction::DeleteResultsFile => {
                    if let Err(e) = self.delete_results_file() {
                        error!("Failed to delete results file: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using the crawler!");
                    break;
                }
            }
        }

        Ok(())
    }
}
