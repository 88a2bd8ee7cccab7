use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub keywords: KeywordsConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlerConfig {
    /// Sent as-is on the single GET per crawl. Some sites reject
    /// requests without a browser-like agent string.
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Links whose resolved URL contains any of these substrings are
    /// never classified.
    pub excluded_url_substrings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeywordsConfig {
    pub features: Vec<String>,
    pub pricing: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Log lines append here; stdout when unset.
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub default_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig {
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36"
                    .to_string(),
                timeout_seconds: 10,
                excluded_url_substrings: vec!["example.com".to_string()],
            },
            keywords: KeywordsConfig {
                features: [
                    "feature",
                    "features",
                    "spec",
                    "specification",
                    "overview",
                    "capabilities",
                    "function",
                    "functions",
                    "services",
                    "solutions",
                    "benefits",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
                pricing: [
                    "pricing",
                    "price",
                    "plan",
                    "plans",
                    "subscription",
                    "cost",
                    "rates",
                    "fees",
                    "packages",
                    "billing",
                    "quotes",
                    "quote",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("crawler.log".to_string()),
            },
            output: OutputConfig {
                directory: "out".to_string(),
                default_filename: "features_pricing_crawler_data.csv".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
