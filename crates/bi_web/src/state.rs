use std::sync::Arc;

use bi_core::{AnalysisProvider, ReportStore};

pub struct AppState {
    pub provider: Arc<dyn AnalysisProvider>,
    pub store: Arc<dyn ReportStore>,
}
