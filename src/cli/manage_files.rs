use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::models::{CliApp, CrawlRecord, Result};

impl CliApp {
    /// CSV files previously produced into the output directory, sorted
    /// by name. The directory may not exist yet on a fresh install.
    fn list_results_files(&self) -> Result<Vec<String>> {
        let dir = std::path::Path::new(&self.config.output.directory);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(".csv") {
                files.push(name);
            }
        }
        files.sort();
        Ok(files)
    }

    pub fn show_results_files(&self) -> Result<()> {
        let files = self.list_results_files()?;
        if files.is_empty() {
            println!("ℹ️  No previous files found.");
        } else {
            println!("📁 Previous files in {}:", self.config.output.directory);
            for file in &files {
                println!("   {}", file);
            }
        }
        Ok(())
    }

    pub fn view_results_file(&self) -> Result<()> {
        let files = self.list_results_files()?;
        if files.is_empty() {
            println!("ℹ️  No previous files found.");
            return Ok(());
        }

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a file to view")
            .items(&files)
            .interact()?;
        let file = &files[selection];

        let ledger = self.ledger_for(file);
        match ledger.read_all() {
            Ok(records) => {
                println!("\n📄 Contents of {}:", file);
                Self::display_records(&records);
            }
            Err(e) => println!("❌ Error reading file '{}': {}", file, e),
        }

        Ok(())
    }

    pub fn delete_results_file(&self) -> Result<()> {
        let files = self.list_results_files()?;
        if files.is_empty() {
            println!("ℹ️  No previous files found.");
            return Ok(());
        }

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a file to delete")
            .items(&files)
            .interact()?;
        let file = &files[selection];

        if !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete {}?", file))
            .interact()?
        {
            println!("❌ Deletion cancelled");
            return Ok(());
        }

        std::fs::remove_file(self.ledger_for(file).path())?;
        println!("✅ File '{}' has been deleted.", file);

        Ok(())
    }

    pub(crate) fn display_records(records: &[CrawlRecord]) {
        println!(
            "{:<35} {:<45} {:<45} {}",
            "Input URL", "Features URL", "Pricing URL", "Status"
        );
        println!("{}", "─".repeat(140));
        for record in records {
            println!(
                "{:<35} {:<45} {:<45} {}",
                record.input_url, record.features_url, record.pricing_url, record.status
            );
        }
    }
}
