//! Axum handler for job-fit matching.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::matching::{rank_applications, MatchResponse};
use crate::state::AppState;

/// POST /api/jobs/:job_id/match
///
/// Ranks the job's applications by analyzed-profile skill coverage.
/// Applications without profile data are filtered at the query.
pub async fn handle_match_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<MatchResponse>, AppError> {
    let job = db::fetch_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let applications = db::fetch_job_applications(&state.db, job_id).await?;
    if applications.is_empty() {
        return Ok(Json(MatchResponse {
            success: true,
            message: Some("No applications with profile data found".to_string()),
            matches: vec![],
        }));
    }

    let matches = rank_applications(&applications, &job.skills);

    Ok(Json(MatchResponse {
        success: true,
        message: None,
        matches,
    }))
}
