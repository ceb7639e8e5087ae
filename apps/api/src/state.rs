use std::sync::Arc;

use crate::admin::store::MarketplaceStore;
use crate::help::HelpContent;
use crate::llm_client::ModelProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store behind the admin layer. Default: `PgStore`.
    pub store: Arc<dyn MarketplaceStore>,
    /// The process-wide model provider (see `llm_client::provider`).
    pub llm: Arc<dyn ModelProvider>,
    pub help: Arc<HelpContent>,
}
