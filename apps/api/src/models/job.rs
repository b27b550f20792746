#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A posted job, as much of it as matching needs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub skills: Vec<String>,
}

/// An application to a job, joined with the applicant's email and profile
/// links. `profile_data` is the raw JSON emitted by the out-of-process
/// profile analyzer; it is parsed lazily so a malformed payload degrades to a
/// zero score instead of failing the request.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub applicant_id: Uuid,
    pub email: String,
    pub profile_data: Option<String>,
    pub github_url: Option<String>,
    pub leetcode_url: Option<String>,
}
