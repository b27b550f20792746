//! Response Assembler — pure merge of ranked candidates, the deterministic
//! summary, and the (possibly enriched) insight into the API result shape.

use serde::Serialize;

use crate::search::scoring::ScoredCandidate;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results: SearchResults,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub candidates: Vec<RankedCandidate>,
    /// The deterministic tier summary. May be empty when nothing scored
    /// above the lowest tier.
    pub analysis: String,
    /// Equal to `analysis` whenever enrichment was skipped or failed.
    pub ai_insights: String,
    pub total_candidates: usize,
}

/// A candidate as presented to the caller: pool fields plus scoring output.
#[derive(Debug, Serialize)]
pub struct RankedCandidate {
    pub id: uuid::Uuid,
    pub email: String,
    pub resume: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub leetcode_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub relevance_score: u32,
    pub match_reasoning: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

impl From<ScoredCandidate> for RankedCandidate {
    fn from(scored: ScoredCandidate) -> Self {
        let c = scored.candidate;
        Self {
            id: c.id,
            email: c.email,
            resume: c.resume,
            github_url: c.github_url,
            linkedin_url: c.linkedin_url,
            leetcode_url: c.leetcode_url,
            created_at: c.created_at,
            relevance_score: scored.score,
            match_reasoning: scored.reasoning,
            strengths: scored.strengths,
            concerns: scored.concerns,
        }
    }
}

/// Packs the final payload. No I/O; `total_candidates` counts the returned
/// list, not the pool.
pub fn assemble(
    query: &str,
    top_n: Vec<ScoredCandidate>,
    summary: String,
    insight: String,
) -> SearchResponse {
    let candidates: Vec<RankedCandidate> = top_n.into_iter().map(Into::into).collect();
    let total_candidates = candidates.len();
    SearchResponse {
        success: true,
        results: SearchResults {
            query: query.to_string(),
            candidates,
            analysis: summary,
            ai_insights: insight,
            total_candidates,
        },
    }
}

/// The fixed payload for an empty candidate pool: success, not an error.
pub fn assemble_empty_pool(query: &str) -> SearchResponse {
    SearchResponse {
        success: true,
        results: SearchResults {
            query: query.to_string(),
            candidates: vec![],
            analysis: "No candidates found in the database.".to_string(),
            ai_insights: "The database currently has no candidate profiles. Please add some \
                          candidates first."
                .to_string(),
            total_candidates: 0,
        },
    }
}
