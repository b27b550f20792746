use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An applicant row as returned by the candidate pool source.
///
/// Read-only to the search core: scoring never mutates a candidate, it only
/// derives per-request data from the resume text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: Uuid,
    pub email: String,
    /// Free-text resume. The pool query filters out NULL resumes, so this is
    /// always present.
    pub resume: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub leetcode_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
