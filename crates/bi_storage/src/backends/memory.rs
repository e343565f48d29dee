use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bi_core::{BrandReport, ReportConfig, ReportStore, Result};

#[derive(Default)]
struct MemoryState {
    reports: Vec<BrandReport>,
    config: Option<ReportConfig>,
}

/// In-memory store: the last report per brand plus the scheduled-report
/// configuration. Contents live as long as the process.
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState::default())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn store_report(&self, report: &BrandReport) -> Result<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.reports.iter_mut().find(|r| r.brand == report.brand) {
            *existing = report.clone();
        } else {
            state.reports.push(report.clone());
        }
        Ok(())
    }

    async fn last_report(&self, brand: &str) -> Result<Option<BrandReport>> {
        let state = self.state.read().await;
        Ok(state.reports.iter().find(|r| r.brand == brand).cloned())
    }

    async fn store_config(&self, config: &ReportConfig) -> Result<()> {
        let mut state = self.state.write().await;
        state.config = Some(config.clone());
        Ok(())
    }

    async fn load_config(&self) -> Result<Option<ReportConfig>> {
        let state = self.state.read().await;
        Ok(state.config.clone())
    }
}
