use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::NewsItem;
use crate::Result;

/// Raw analysis payload returned by a provider: section values keyed by
/// topic title (insertion order significant) plus the news feed, before
/// reshaping and deduplication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandAnalysis {
    pub sections: Map<String, Value>,
    pub news: Vec<NewsItem>,
}

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Returns the name of the analysis backend
    fn name(&self) -> &str;

    /// Run a full brand analysis against this provider
    async fn analyze(&self, brand: &str, competitors: &[String]) -> Result<BrandAnalysis>;

    /// Resolve a logo URL for the brand
    async fn fetch_logo(&self, brand: &str) -> Result<String>;
}
