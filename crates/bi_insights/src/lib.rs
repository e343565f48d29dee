pub mod dedup;
pub mod sections;
pub mod topics;

pub use dedup::dedup_news_by_url;
pub use sections::{sections_from_entries, sections_from_value, SectionContent};
pub use topics::Topic;

pub mod prelude {
    pub use super::topics::Topic;
    pub use bi_core::{Error, Result, TopicAnalysis, TopicInsight};
}
