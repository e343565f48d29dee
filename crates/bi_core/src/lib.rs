pub mod error;
pub mod provider;
pub mod storage;
pub mod types;

pub use error::Error;
pub use provider::{AnalysisProvider, BrandAnalysis};
pub use storage::ReportStore;
pub use types::{
    BrandReport, MarketingSection, NewsItem, ReportCadence, ReportConfig, TopicAnalysis,
    TopicInsight,
};
pub type Result<T> = std::result::Result<T, Error>;
