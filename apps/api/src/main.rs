mod chat;
mod config;
mod db;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod search;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::ChatClient;
use crate::routes::build_router;
use crate::search::enrichment::OllamaEnricher;
use crate::search::vocab::SignalVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireLens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize the chat model client; enrichment and the assistant share it
    let chat = ChatClient::new(
        &config.model_host_url,
        config.model_name.clone(),
        Duration::from_secs(config.model_timeout_secs),
    );
    info!("Chat model client initialized (model: {})", chat.model());

    // Vocabularies are immutable configuration, loaded once
    let vocab = Arc::new(SignalVocabulary::default());

    // Build app state
    let state = AppState {
        db,
        chat: chat.clone(),
        enricher: Arc::new(OllamaEnricher::new(chat)),
        vocab,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
