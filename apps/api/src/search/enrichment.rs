#![allow(dead_code)]

//! AI Enrichment Adapter — the one optional model call in the search
//! pipeline.
//!
//! The deterministic summary is already computed before this runs; the model
//! may only rephrase it. A reply is accepted when, after think-block
//! stripping, it still contains at least two tier keywords. Everything else
//! (transport error, timeout, empty reply, failed validation) falls back to
//! the deterministic summary. Failures are logged and never surface to the
//! search caller.

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::llm_client::ChatClient;
use crate::search::prompts::{ENRICHMENT_PROMPT_TEMPLATE, ENRICHMENT_SYSTEM};

/// Phrases a valid rephrasing must still contain (at least two of them).
/// Plain substring containment; anything that fails it falls back to the
/// deterministic summary.
const TIER_KEYWORDS: &[&str] = &[
    "excellent match",
    "strong match",
    "moderate match",
    "limited match",
];

const ENRICHMENT_MAX_TOKENS: u32 = 300;

/// Seam for the enrichment backend, carried in `AppState` as
/// `Arc<dyn InsightEnricher>` so tests can substitute a canned or failing
/// backend without a model host.
#[async_trait]
pub trait InsightEnricher: Send + Sync {
    /// Returns either an accepted rephrasing of `summary` or `summary`
    /// itself. Must not error.
    async fn enrich(&self, summary: &str, query: &str, top_n: usize, requested: usize) -> String;
}

/// Ollama-backed enricher. Single attempt, client-level timeout.
pub struct OllamaEnricher {
    client: ChatClient,
}

impl OllamaEnricher {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InsightEnricher for OllamaEnricher {
    async fn enrich(&self, summary: &str, query: &str, top_n: usize, requested: usize) -> String {
        let prompt = ENRICHMENT_PROMPT_TEMPLATE
            .replace("{query}", query)
            .replace("{count}", &requested.to_string())
            .replace("{top_n}", &top_n.to_string())
            .replace("{summary}", summary);

        match self.client.chat(ENRICHMENT_SYSTEM, &prompt, ENRICHMENT_MAX_TOKENS).await {
            Ok(reply) => {
                let cleaned = strip_think_blocks(&reply);
                if is_valid_summary(&cleaned) {
                    debug!("enrichment accepted");
                    cleaned
                } else {
                    warn!("enrichment reply failed tier-keyword validation, using deterministic summary");
                    summary.to_string()
                }
            }
            Err(e) => {
                warn!("enrichment call failed, using deterministic summary: {e}");
                summary.to_string()
            }
        }
    }
}

/// No-op enricher for deployments without a model host. The deterministic
/// summary passes through unchanged.
pub struct PassthroughEnricher;

#[async_trait]
impl InsightEnricher for PassthroughEnricher {
    async fn enrich(&self, summary: &str, _query: &str, _top_n: usize, _requested: usize) -> String {
        summary.to_string()
    }
}

/// A reply is usable when it still carries at least two distinct tier
/// phrases.
fn is_valid_summary(cleaned: &str) -> bool {
    TIER_KEYWORDS
        .iter()
        .filter(|keyword| cleaned.contains(*keyword))
        .count()
        >= 2
}

/// Removes `<think>…</think>` blocks (and an unterminated `<think>` through
/// end of input), collapses runs of blank lines, and trims.
pub fn strip_think_blocks(text: &str) -> String {
    let mut cleaned = text.to_string();
    if let Ok(re) = Regex::new(r"(?is)<think>.*?</think>") {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    if let Ok(re) = Regex::new(r"(?is)<think>.*$") {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    if let Ok(re) = Regex::new(r"\n\s*\n\s*\n") {
        cleaned = re.replace_all(&cleaned, "\n\n").into_owned();
    }
    cleaned.trim().to_string()
}
