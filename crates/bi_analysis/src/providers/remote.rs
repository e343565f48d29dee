use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use bi_core::{AnalysisProvider, BrandAnalysis, Error, NewsItem, Result};

const DEFAULT_BASE_URL: &str = "https://api.brandinsights.dev";

#[derive(Serialize)]
struct AnalyzeRequest {
    brand: String,
    competitors: Vec<String>,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    sections: Map<String, Value>,
    #[serde(default)]
    news: Vec<NewsItem>,
}

#[derive(Deserialize)]
struct LogoResponse {
    logo_url: Option<String>,
}

pub struct RemoteProvider {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for RemoteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RemoteProvider {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key = api_key
            .ok_or_else(|| Error::Service("Analysis API key is required".to_string()))?;
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl AnalysisProvider for RemoteProvider {
    fn name(&self) -> &str {
        "Remote"
    }

    async fn analyze(&self, brand: &str, competitors: &[String]) -> Result<BrandAnalysis> {
        let request = AnalyzeRequest {
            brand: brand.to_string(),
            competitors: competitors.to_vec(),
        };

        let response = self
            .client
            .post(format!("{}/v1/analyze", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .json::<AnalyzeResponse>()
            .await?;

        if response.sections.is_empty() && response.news.is_empty() {
            return Err(Error::Service(
                "analysis service returned no data".to_string(),
            ));
        }

        tracing::debug!(
            "Received {} sections and {} news items for {}",
            response.sections.len(),
            response.news.len(),
            brand
        );
        Ok(BrandAnalysis {
            sections: response.sections,
            news: response.news,
        })
    }

    async fn fetch_logo(&self, brand: &str) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/v1/logo", self.base_url))
            .query(&[("brand", brand)])
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?
            .json::<LogoResponse>()
            .await?;

        response
            .logo_url
            .ok_or_else(|| Error::Service(format!("No logo found for {}", brand)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_requires_api_key() {
        let result = RemoteProvider::new(None, None);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Analysis service error: Analysis API key is required"
        );

        assert!(RemoteProvider::new(Some("test-key".to_string()), None).is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = RemoteProvider::new(Some("secret".to_string()), None).unwrap();
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("secret"));
    }
}
