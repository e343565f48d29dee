use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One headline and its ordered insight strings. Order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicInsight {
    pub headline: String,
    pub insights: Vec<String>,
}

/// The analysis produced for a single topic. Built fresh on every call,
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicAnalysis {
    pub topics: Vec<TopicInsight>,
}

/// The array-form section representation consumed by presentation layers.
/// `content` keeps the raw section value so nothing is lost in the reshape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingSection {
    pub title: String,
    pub topics: Vec<TopicInsight>,
    pub content: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub url: Option<String>,
    pub title: String,
    pub source: Option<String>,
    pub snippet: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// A complete brand report: the merged sections plus deduplicated news.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandReport {
    pub brand: String,
    pub generated_at: DateTime<Utc>,
    pub logo_url: Option<String>,
    pub sections: Vec<MarketingSection>,
    pub news: Vec<NewsItem>,
}

/// Scheduled-report settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub brand: String,
    pub competitors: Vec<String>,
    pub cadence: ReportCadence,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportCadence {
    Daily,
    Weekly,
    Monthly,
}

impl Default for ReportCadence {
    fn default() -> Self {
        Self::Weekly
    }
}

impl std::str::FromStr for ReportCadence {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(crate::error::Error::Config(format!(
                "Unknown cadence: {}",
                s
            ))),
        }
    }
}
