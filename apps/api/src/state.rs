use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::ChatClient;
use crate::search::enrichment::InsightEnricher;
use crate::search::vocab::SignalVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Shared chat client used by the assistant endpoint.
    pub chat: ChatClient,
    /// Pluggable summary enricher. Default: OllamaEnricher; tests substitute
    /// canned or failing backends.
    pub enricher: Arc<dyn InsightEnricher>,
    /// Immutable keyword vocabularies, loaded once at startup.
    pub vocab: Arc<SignalVocabulary>,
    pub config: Config,
}
