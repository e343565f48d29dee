use std::sync::Arc;

use bi_core::{Error, ReportStore, Result};

pub mod backends;

pub use backends::*;

/// Build a store by name. Only the in-memory backend exists today; the
/// name dispatch matches the provider factory so a persistent backend can
/// slot in behind the same flag.
pub fn create_store(kind: &str) -> Result<Arc<dyn ReportStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        _ => Err(Error::Storage(format!("Unknown store backend: {}", kind))),
    }
}

pub mod prelude {
    pub use super::backends::MemoryStore;
    pub use super::create_store;
    pub use bi_core::{ReportStore, Result};
}
