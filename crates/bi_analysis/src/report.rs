use chrono::Utc;

use bi_core::{AnalysisProvider, BrandReport, Error, Result};
use bi_insights::{dedup_news_by_url, sections_from_value, Topic};

/// Run the full analysis pipeline for a brand: delegate to the provider,
/// fill any topic the service omitted from the local insight tables,
/// reshape into sections, and deduplicate the news feed.
///
/// Provider and network failures propagate unmodified. The logo fetch is
/// best-effort: a missing logo degrades to `None` rather than sinking an
/// otherwise complete report.
pub async fn analyze_brand(
    provider: &dyn AnalysisProvider,
    brand: &str,
    competitors: &[String],
) -> Result<BrandReport> {
    if brand.trim().is_empty() {
        return Err(Error::InvalidBrand(
            "brand name must not be empty".to_string(),
        ));
    }

    tracing::info!("Analyzing {} with {} provider", brand, provider.name());
    let mut analysis = provider.analyze(brand, competitors).await?;

    for topic in Topic::ALL {
        if !analysis.sections.contains_key(topic.name()) {
            tracing::debug!("Filling {} section from local tables", topic);
            analysis.sections.insert(
                topic.name().to_string(),
                serde_json::to_value(topic.analyze(brand).topics)?,
            );
        }
    }

    let logo_url = match provider.fetch_logo(brand).await {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Logo fetch failed for {}: {}", brand, e);
            None
        }
    };

    Ok(BrandReport {
        brand: brand.to_string(),
        generated_at: Utc::now(),
        logo_url,
        sections: sections_from_value(&analysis.sections),
        news: dedup_news_by_url(analysis.news),
    })
}
