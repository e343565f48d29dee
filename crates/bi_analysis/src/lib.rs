pub mod providers;
pub mod report;

pub use providers::{create_provider, CannedProvider, RemoteProvider};
pub use report::analyze_brand;

pub mod prelude {
    pub use super::report::analyze_brand;
    pub use super::providers::create_provider;
    pub use bi_core::{AnalysisProvider, BrandAnalysis, BrandReport, Error, Result};
}
