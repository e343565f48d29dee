use async_trait::async_trait;

use crate::types::{BrandReport, ReportConfig};
use crate::Result;

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Store a report, replacing any previous report for the same brand
    async fn store_report(&self, report: &BrandReport) -> Result<()>;

    /// Get the last stored report for a brand
    async fn last_report(&self, brand: &str) -> Result<Option<BrandReport>>;

    /// Persist the scheduled-report configuration
    async fn store_config(&self, config: &ReportConfig) -> Result<()>;

    /// Load the scheduled-report configuration, if one was saved
    async fn load_config(&self) -> Result<Option<ReportConfig>>;
}
