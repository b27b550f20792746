use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::candidate::Candidate;
use crate::models::job::{ApplicationRow, Job};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// The candidate pool source: every applicant with a resume on file.
/// Ordering is not guaranteed; the scorer treats it as arbitrary.
pub async fn fetch_applicant_candidates(pool: &PgPool) -> Result<Vec<Candidate>, sqlx::Error> {
    sqlx::query_as::<_, Candidate>(
        r#"
        SELECT u.id, u.email, ap.resume, ap.github_url, ap.linkedin_url,
               ap.leetcode_url, ap.created_at
        FROM users u
        JOIN applicant_profiles ap ON u.id = ap.user_id
        WHERE u.role = 'applicant'
          AND ap.resume IS NOT NULL
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_job(pool: &PgPool, job_id: Uuid) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "SELECT id, title, description, requirements, skills FROM jobs WHERE id = $1",
    )
    .bind(job_id)
    .fetch_optional(pool)
    .await
}

/// Applications for a job that carry analyzer output, joined with the
/// applicant's email and profile links.
pub async fn fetch_job_applications(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        SELECT a.id, a.applicant_id, u.email, a.profile_data,
               ap.github_url, ap.leetcode_url
        FROM applications a
        JOIN users u ON a.applicant_id = u.id
        LEFT JOIN applicant_profiles ap ON u.id = ap.user_id
        WHERE a.job_id = $1
          AND a.profile_data IS NOT NULL
        "#,
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}
