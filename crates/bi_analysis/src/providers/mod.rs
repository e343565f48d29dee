use std::sync::Arc;

use bi_core::{AnalysisProvider, Error, Result};

pub mod canned;
pub mod remote;

pub use canned::CannedProvider;
pub use remote::RemoteProvider;

/// Build a provider by name, as selected on the CLI or in the web binary.
pub fn create_provider(
    kind: &str,
    api_key: Option<String>,
    base_url: Option<String>,
) -> Result<Arc<dyn AnalysisProvider>> {
    match kind {
        "canned" => Ok(Arc::new(CannedProvider::new())),
        "remote" => Ok(Arc::new(RemoteProvider::new(api_key, base_url)?)),
        _ => Err(Error::Service(format!("Unknown provider: {}", kind))),
    }
}
