pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat_handlers;
use crate::matching::handlers as matching_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate search
        .route("/api/talent/search", post(search_handlers::handle_search))
        .route(
            "/api/talent/quick-search",
            post(search_handlers::handle_quick_search),
        )
        // Assistant chat
        .route(
            "/api/assistant/chat",
            post(chat_handlers::handle_assistant_chat),
        )
        // Job-fit matching
        .route(
            "/api/jobs/:job_id/match",
            post(matching_handlers::handle_match_job),
        )
        .with_state(state)
}
