//! Job-fit matching — ranks a job's applications by the analyzed profile
//! data attached to each application.
//!
//! `profile_data` is produced by an out-of-process profile analyzer and
//! stored as raw JSON; this module only consumes it. A missing or malformed
//! payload degrades to a zero score, it never fails the request.

pub mod handlers;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

use crate::models::job::ApplicationRow;

/// The slice of the analyzer output that matching reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzedProfile {
    /// Language name → usage stats; only the names are matched.
    #[serde(default)]
    pub languages: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub experience_years: i64,
    #[serde(default)]
    pub overall_score: Option<OverallScore>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverallScore {
    #[serde(default)]
    pub total: f64,
}

/// One ranked application.
#[derive(Debug, Serialize)]
pub struct JobMatch {
    pub application_id: Uuid,
    pub applicant_id: Uuid,
    pub email: String,
    pub match_score: u32,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub matches: Vec<JobMatch>,
}

/// Scores one application against the job's skill list: the share of
/// required skills covered by the analyzed languages, as a 0..=100 integer.
pub fn score_application(application: &ApplicationRow, job_skills: &[String]) -> JobMatch {
    let mut match_score: u32 = 0;
    let mut match_reasons: Vec<String> = Vec::new();

    let profile = application
        .profile_data
        .as_deref()
        .and_then(|raw| match serde_json::from_str::<AnalyzedProfile>(raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(
                    "unparseable profile data on application {}: {e}",
                    application.id
                );
                None
            }
        });

    if let Some(profile) = profile {
        let matching_skills = job_skills
            .iter()
            .filter(|skill| {
                let skill_lower = skill.to_lowercase();
                profile
                    .languages
                    .keys()
                    .any(|lang| lang.to_lowercase().contains(&skill_lower))
            })
            .count();

        let required = job_skills.len().max(1);
        match_score = ((matching_skills as f64 / required as f64) * 100.0).round() as u32;
        match_score = match_score.min(100);

        if matching_skills > 0 {
            match_reasons.push(format!(
                "Candidate has {matching_skills} of {} required skills",
                job_skills.len()
            ));
        }
        if profile.experience_years > 0 {
            match_reasons.push(format!(
                "{} years of coding experience",
                profile.experience_years
            ));
        }
        if let Some(overall) = &profile.overall_score {
            if overall.total > 70.0 {
                match_reasons.push(format!(
                    "Strong overall developer score ({}/100)",
                    overall.total
                ));
            }
        }
    }

    JobMatch {
        application_id: application.id,
        applicant_id: application.applicant_id,
        email: application.email.clone(),
        match_score,
        match_reasons,
    }
}

/// Scores every application and sorts by score descending; equal scores keep
/// input order.
pub fn rank_applications(applications: &[ApplicationRow], job_skills: &[String]) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = applications
        .iter()
        .map(|app| score_application(app, job_skills))
        .collect();
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(profile_data: Option<&str>) -> ApplicationRow {
        ApplicationRow {
            id: Uuid::new_v4(),
            applicant_id: Uuid::new_v4(),
            email: "dev@example.com".to_string(),
            profile_data: profile_data.map(|s| s.to_string()),
            github_url: None,
            leetcode_url: None,
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_skill_coverage_scores_100() {
        let app = application(Some(r#"{"languages": {"Python": {}, "TypeScript": {}}}"#));
        let result = score_application(&app, &skills(&["python", "typescript"]));
        assert_eq!(result.match_score, 100);
        assert_eq!(
            result.match_reasons,
            vec!["Candidate has 2 of 2 required skills"]
        );
    }

    #[test]
    fn test_partial_coverage_rounds_ratio() {
        let app = application(Some(r#"{"languages": {"Python": {}}}"#));
        // 1 of 3 → 33.33… rounds to 33
        let result = score_application(&app, &skills(&["python", "go", "rust"]));
        assert_eq!(result.match_score, 33);
    }

    #[test]
    fn test_language_containment_matches_variants() {
        // job skill "java" matches the analyzed language "JavaScript" by
        // containment, as loose as the analyzer's naming
        let app = application(Some(r#"{"languages": {"JavaScript": {}}}"#));
        let result = score_application(&app, &skills(&["java"]));
        assert_eq!(result.match_score, 100);
    }

    #[test]
    fn test_empty_job_skills_scores_zero_without_division_error() {
        let app = application(Some(r#"{"languages": {"Python": {}}}"#));
        let result = score_application(&app, &skills(&[]));
        assert_eq!(result.match_score, 0);
        assert!(result.match_reasons.is_empty());
    }

    #[test]
    fn test_experience_and_overall_score_reasons() {
        let app = application(Some(
            r#"{"languages": {"Rust": {}}, "experience_years": 6, "overall_score": {"total": 85}}"#,
        ));
        let result = score_application(&app, &skills(&["rust"]));
        assert_eq!(result.match_score, 100);
        assert!(result
            .match_reasons
            .contains(&"6 years of coding experience".to_string()));
        assert!(result
            .match_reasons
            .contains(&"Strong overall developer score (85/100)".to_string()));
    }

    #[test]
    fn test_overall_score_at_70_earns_no_reason() {
        let app = application(Some(
            r#"{"languages": {"Rust": {}}, "overall_score": {"total": 70}}"#,
        ));
        let result = score_application(&app, &skills(&["rust"]));
        assert!(!result
            .match_reasons
            .iter()
            .any(|r| r.contains("overall developer score")));
    }

    #[test]
    fn test_malformed_profile_scores_zero() {
        let result = score_application(&application(Some("not json")), &skills(&["rust"]));
        assert_eq!(result.match_score, 0);
        assert!(result.match_reasons.is_empty());
    }

    #[test]
    fn test_missing_profile_scores_zero() {
        let result = score_application(&application(None), &skills(&["rust"]));
        assert_eq!(result.match_score, 0);
    }

    #[test]
    fn test_ranking_sorts_descending_and_is_stable() {
        let strong = application(Some(r#"{"languages": {"Rust": {}, "Go": {}}}"#));
        let weak_first = application(Some(r#"{"languages": {"Rust": {}}}"#));
        let weak_second = application(Some(r#"{"languages": {"Go": {}}}"#));
        let apps = vec![weak_first.clone(), strong.clone(), weak_second.clone()];

        let ranked = rank_applications(&apps, &skills(&["rust", "go"]));
        assert_eq!(ranked[0].application_id, strong.id);
        assert_eq!(ranked[1].application_id, weak_first.id);
        assert_eq!(ranked[2].application_id, weak_second.id);
    }
}
