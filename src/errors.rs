use std::path::PathBuf;
use thiserror::Error;

/// Failure while fetching the page to classify. No retry is performed;
/// the caller records the crawl with a "No URLs Found" status.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Failure while reading or rewriting the CSV ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("ledger I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("malformed ledger file: {0}")]
    Malformed(String),
}
