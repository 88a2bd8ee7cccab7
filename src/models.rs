use std::fmt;
use std::str::FromStr;

use crate::{classifier::PageClassifier, config::Config};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Sentinel written to the ledger when a category has no matching link.
pub const NOT_FOUND: &str = "Not Found";

/// Outcome of one crawl as recorded in the ledger. `Success` covers any
/// completed classification, even one where nothing matched; only a
/// failed fetch produces `NoUrlsFound`. `Error` is accepted on read but
/// never written by the crawl path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlStatus {
    Success,
    NoUrlsFound,
    Error,
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlStatus::Success => write!(f, "Success"),
            CrawlStatus::NoUrlsFound => write!(f, "No URLs Found"),
            CrawlStatus::Error => write!(f, "Error"),
        }
    }
}

impl FromStr for CrawlStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Success" => Ok(CrawlStatus::Success),
            "No URLs Found" => Ok(CrawlStatus::NoUrlsFound),
            "Error" => Ok(CrawlStatus::Error),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// One ledger row. Absent URLs carry the [`NOT_FOUND`] sentinel rather
/// than an option so the row prints and persists exactly as recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRecord {
    pub input_url: String,
    pub features_url: String,
    pub pricing_url: String,
    pub status: CrawlStatus,
}

pub struct CliApp {
    pub config: Config,
    pub classifier: PageClassifier,
}
