use models::{CliApp, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod classifier;
mod cli;
mod config;
mod errors;
mod ledger;
mod models;


use config::{load_config, Config};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    init_logging(&config)?;

    // Create output directory
    tokio::fs::create_dir_all(&config.output.directory).await?;

    // Initialize and run CLI app
    let app = CliApp::new(config)?;

    // Add graceful shutdown
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}

/// Fetch and write errors go to the process log; when a log file is
/// configured, lines append there so crawl history survives restarts.
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "features_pricing_crawler={},hyper=warn",
            config.logging.level
        ))
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.logging.file.as_deref() {
        Some(path) if !path.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        _ => builder.init(),
    }

    if let Some(path) = &config.logging.file {
        info!("Logging to {}", path);
    }

    Ok(())
}
