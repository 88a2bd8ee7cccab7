use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::errors::LedgerError;
use crate::models::{CrawlRecord, CrawlStatus};

pub const LEDGER_HEADER: [&str; 4] = ["Input URL", "Features URL", "Pricing URL", "Status"];

/// Append-only CSV record of crawl results. The file is created with
/// its header on first append and only ever grows by whole rows;
/// deleting it is a file-manager action, not a ledger operation.
///
/// Appends are read-modify-write over the whole file, so two writers on
/// the same path can lose a row to each other. The tool runs one crawl
/// per operator action; do not share a ledger file between processes.
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads existing rows back, concatenates the new record, and
    /// rewrites the file. A missing file starts an empty ledger; a
    /// present-but-unreadable one fails the append.
    pub fn append(&self, record: &CrawlRecord) -> Result<(), LedgerError> {
        let mut records = if self.path.exists() {
            self.read_all()?
        } else {
            Vec::new()
        };
        records.push(record.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut content = String::new();
        content.push_str(&LEDGER_HEADER.join(","));
        content.push('\n');
        for record in &records {
            content.push_str(&render_row(record));
            content.push('\n');
        }
        std::fs::write(&self.path, content)?;

        debug!(
            "Ledger now holds {} record(s) at {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Parses header and rows, returning records oldest first.
    pub fn read_all(&self) -> Result<Vec<CrawlRecord>, LedgerError> {
        if !self.path.exists() {
            return Err(LedgerError::Missing(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path)?;

        let mut rows = parse_csv(&content)?;
        if rows.is_empty() {
            return Err(LedgerError::Malformed("missing header row".to_string()));
        }

        let header = rows.remove(0);
        if header != LEDGER_HEADER {
            return Err(LedgerError::Malformed(format!(
                "unexpected header: {}",
                header.join(",")
            )));
        }

        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                parse_record(row)
                    .map_err(|e| LedgerError::Malformed(format!("row {}: {}", i + 1, e)))
            })
            .collect()
    }
}

fn render_row(record: &CrawlRecord) -> String {
    let status = record.status.to_string();
    [
        record.input_url.as_str(),
        record.features_url.as_str(),
        record.pricing_url.as_str(),
        status.as_str(),
    ]
    .map(escape_field)
    .join(",")
}

fn parse_record(row: Vec<String>) -> Result<CrawlRecord, String> {
    let [input_url, features_url, pricing_url, status]: [String; 4] = row
        .try_into()
        .map_err(|row: Vec<String>| format!("expected 4 columns, found {}", row.len()))?;

    Ok(CrawlRecord {
        input_url,
        features_url,
        pricing_url,
        status: CrawlStatus::from_str(&status)?,
    })
}

/// Quotes a field when it contains a comma, quote, or line break;
/// inner quotes are doubled.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn parse_csv(content: &str) -> Result<Vec<Vec<String>>, LedgerError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(LedgerError::Malformed(
            "unterminated quoted field".to_string(),
        ));
    }
    // Final row without a trailing newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}
