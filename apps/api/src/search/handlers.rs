//! Axum route handlers for the candidate search API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::db;
use crate::errors::AppError;
use crate::search::assemble::{assemble, assemble_empty_pool, SearchResponse};
use crate::search::keyword_search::{quick_search, QuickSearchResponse};
use crate::search::query::interpret;
use crate::search::ranking::rank;
use crate::search::scoring::score_candidate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// POST /api/talent/search
///
/// The full ranking pipeline: interpret → score pool → rank → enrich →
/// assemble. Enrichment runs after the deterministic summary exists and can
/// only replace it with an accepted rephrasing; its failures are invisible
/// here.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(AppError::Validation("Search query is required".to_string()));
    }

    let candidates = db::fetch_applicant_candidates(&state.db).await?;
    if candidates.is_empty() {
        return Ok(Json(assemble_empty_pool(query)));
    }

    let signals = interpret(query, &state.vocab);
    debug!(
        "interpreted query: {} skills, {} stack terms, requested {}",
        signals.skills.len(),
        signals.stack.len(),
        signals.requested_count
    );

    let scored = candidates
        .iter()
        .map(|candidate| score_candidate(candidate, &signals, &state.vocab))
        .collect();

    let (top_n, summary) = rank(scored, signals.requested_count);

    let insight = state
        .enricher
        .enrich(&summary, query, top_n.len(), signals.requested_count)
        .await;

    Ok(Json(assemble(query, top_n, summary, insight)))
}

/// POST /api/talent/quick-search
///
/// Keyword relevance mode: no job signals, no enrichment, summary over the
/// whole matched set.
pub async fn handle_quick_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<QuickSearchResponse>, AppError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(AppError::Validation("Search query is required".to_string()));
    }

    let candidates = db::fetch_applicant_candidates(&state.db).await?;
    Ok(Json(quick_search(&candidates, query, &state.vocab)))
}
