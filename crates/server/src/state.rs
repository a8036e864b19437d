//! Shared request-handling state.

use std::sync::Arc;

use feedtext_client::{FetchClient, FetchConfig};
use feedtext_core::Error;
use feedtext_core::config::AppConfig;

/// State shared by all handlers.
///
/// The fetch client wraps a connection pool that is safe for concurrent
/// use; everything else is request-scoped.
#[derive(Clone)]
pub struct AppState {
    pub fetch: Arc<FetchClient>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let fetch = FetchClient::new(FetchConfig::from(config))?;
        Ok(Self { fetch: Arc::new(fetch) })
    }
}
