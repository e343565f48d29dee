use std::fmt;

use serde_json::Map;

use bi_core::{AnalysisProvider, BrandAnalysis, NewsItem, Result};
use bi_insights::Topic;

/// Offline provider that renders the local insight tables. Deterministic,
/// no network; used by tests and as the CLI default.
pub struct CannedProvider;

impl fmt::Debug for CannedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CannedProvider").finish()
    }
}

impl CannedProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CannedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AnalysisProvider for CannedProvider {
    fn name(&self) -> &str {
        "Canned"
    }

    async fn analyze(&self, brand: &str, _competitors: &[String]) -> Result<BrandAnalysis> {
        let mut sections = Map::new();
        for topic in Topic::ALL {
            sections.insert(
                topic.name().to_string(),
                serde_json::to_value(topic.analyze(brand).topics)?,
            );
        }

        let slug = brand.to_lowercase().replace(' ', "-");
        let news = vec![
            NewsItem {
                url: Some(format!("https://news.example.com/{}/launch", slug)),
                title: format!("{} announces new product line", brand),
                source: Some("Example Wire".to_string()),
                snippet: None,
                published_at: None,
            },
            NewsItem {
                url: Some(format!("https://news.example.com/{}/results", slug)),
                title: format!("{} posts quarterly results", brand),
                source: Some("Example Wire".to_string()),
                snippet: None,
                published_at: None,
            },
        ];

        Ok(BrandAnalysis { sections, news })
    }

    async fn fetch_logo(&self, brand: &str) -> Result<String> {
        let slug = brand.to_lowercase().replace(' ', "-");
        Ok(format!("https://logos.example.com/{}.png", slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_provider_covers_all_topics() {
        let provider = CannedProvider::new();
        let analysis = provider.analyze("Acme", &[]).await.unwrap();
        assert_eq!(analysis.sections.len(), 6);
        for topic in Topic::ALL {
            assert!(analysis.sections.contains_key(topic.name()));
        }
        assert!(!analysis.news.is_empty());
    }

    #[tokio::test]
    async fn test_canned_provider_is_deterministic() {
        let provider = CannedProvider::new();
        let a = provider.analyze("Acme", &[]).await.unwrap();
        let b = provider.analyze("Acme", &[]).await.unwrap();
        assert_eq!(a.sections, b.sections);
        assert_eq!(a.news, b.news);
    }

    #[tokio::test]
    async fn test_logo_url_is_slugged() {
        let provider = CannedProvider::new();
        let logo = provider.fetch_logo("Acme Corp").await.unwrap();
        assert_eq!(logo, "https://logos.example.com/acme-corp.png");
    }
}
