use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The completion service is held behind `Arc<dyn CompletionService>` so
/// tests can swap in failing or canned backends without touching handlers.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn CompletionService>,
    pub config: Config,
}
