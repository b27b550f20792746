//! Candidate Scorer — applies the weighted rubric to one candidate's resume
//! against the interpreted job signals.
//!
//! The rubric is a transparent, auditable rule table, not a model: every
//! point awarded can be traced to a named rule, and scoring the same
//! candidate against the same signals always produces the same output. The
//! fixed rule order exists only to keep the strengths list deterministic;
//! the total is additive and order-independent.

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;
use crate::search::query::{ExperienceLevel, JobSignals};
use crate::search::vocab::SignalVocabulary;

/// Totals above the cap are truncated, never rescaled. Two candidates that
/// both clear the cap are indistinguishable.
pub const MAX_SCORE: u32 = 100;

const TITLE_TOKEN_POINTS: u32 = 15;
const SKILL_POINTS: u32 = 12;
const STACK_POINTS: u32 = 10;
const SENIOR_LEVEL_POINTS: u32 = 8;
const MID_LEVEL_POINTS: u32 = 6;
const JUNIOR_LEVEL_POINTS: u32 = 4;
const GENERAL_KEYWORD_POINTS: u32 = 3;
const EDUCATION_POINTS: u32 = 5;
const LONG_TENURE_POINTS: u32 = 6;
const MID_TENURE_POINTS: u32 = 4;
const SPECIALIZED_SKILL_POINTS: u32 = 8;

/// A candidate with its per-request scoring output attached. Never
/// persisted; assembled fresh on every search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: u32,
    pub reasoning: String,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

/// Applies the rubric. Pure: no I/O, no randomness, candidate is cloned and
/// never mutated in place.
pub fn score_candidate(
    candidate: &Candidate,
    signals: &JobSignals,
    vocab: &SignalVocabulary,
) -> ScoredCandidate {
    let resume = candidate.resume.to_lowercase();
    let mut score: u32 = 0;
    let mut strengths: Vec<String> = Vec::new();
    let mut concerns: Vec<String> = Vec::new();

    // 1. Job title tokens
    if let Some(title) = &signals.title {
        for token in title.to_lowercase().split_whitespace() {
            if resume.contains(token) {
                score += TITLE_TOKEN_POINTS;
            }
        }
    }

    // 2. Explicit / requirement-derived skills
    for skill in &signals.skills {
        if resume.contains(&skill.to_lowercase()) {
            score += SKILL_POINTS;
            strengths.push(format!("{skill} experience"));
        }
    }

    // 3. Stack mentions from the whole query
    for tech in &signals.stack {
        if resume.contains(tech.as_str()) {
            score += STACK_POINTS;
            strengths.push(format!("{tech} proficiency"));
        }
    }

    // 4. Experience level
    match signals.experience_level {
        ExperienceLevel::Senior
            if contains_any(&resume, &["senior", "lead", "principal"]) =>
        {
            score += SENIOR_LEVEL_POINTS;
            strengths.push("Senior level experience".to_string());
        }
        ExperienceLevel::Mid if contains_any(&resume, &["3+", "4+", "5+"]) => {
            score += MID_LEVEL_POINTS;
            strengths.push("Mid-level experience".to_string());
        }
        ExperienceLevel::Junior
            if contains_any(&resume, &["junior", "entry", "graduate"]) =>
        {
            score += JUNIOR_LEVEL_POINTS;
            strengths.push("Junior level experience".to_string());
        }
        _ => {}
    }

    // 5. General keyword pass over the whole query
    for keyword in &signals.keywords {
        if resume.contains(keyword.as_str()) {
            score += GENERAL_KEYWORD_POINTS;
        }
    }

    // 6. Education
    if let Some(term) = signals.education.resume_term() {
        if resume.contains(term) {
            score += EDUCATION_POINTS;
            strengths.push("Relevant education".to_string());
        }
    }

    // 7. Tenure duration. Additive with the experience-level bonus above;
    //    the two branches here are mutually exclusive with each other.
    if contains_any(&resume, &["5+", "6+", "7+"]) {
        score += LONG_TENURE_POINTS;
        strengths.push("Extensive experience".to_string());
    } else if contains_any(&resume, &["3+", "4+"]) {
        score += MID_TENURE_POINTS;
        strengths.push("Good experience".to_string());
    }

    // 8. Specialized skill bonus
    for skill in &vocab.specialized_skills {
        if resume.contains(skill.as_str()) {
            score += SPECIALIZED_SKILL_POINTS;
            strengths.push(format!("{skill} expertise"));
        }
    }

    let reasoning = reasoning_for(score, &mut concerns);

    ScoredCandidate {
        candidate: candidate.clone(),
        score: score.min(MAX_SCORE),
        reasoning,
        strengths: if strengths.is_empty() {
            vec!["Technical background".to_string()]
        } else {
            strengths
        },
        concerns,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Reasoning thresholds run on the pre-clamp total; every threshold sits
/// below the cap so the distinction only matters for readability.
fn reasoning_for(score: u32, concerns: &mut Vec<String>) -> String {
    if score > 50 {
        "Excellent match with strong alignment to job requirements".to_string()
    } else if score > 35 {
        "Strong match with good alignment to job requirements".to_string()
    } else if score > 20 {
        "Moderate match with some relevant skills and experience".to_string()
    } else if score > 10 {
        concerns.push("Limited relevant experience".to_string());
        "Limited match, may require additional training".to_string()
    } else {
        concerns.push("Limited relevant experience".to_string());
        "Poor match, significant training required".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::query::interpret;
    use chrono::Utc;
    use uuid::Uuid;

    fn candidate(resume: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            email: "dev@example.com".to_string(),
            resume: resume.to_string(),
            github_url: None,
            linkedin_url: None,
            leetcode_url: None,
            created_at: Utc::now(),
        }
    }

    fn vocab() -> SignalVocabulary {
        SignalVocabulary::default()
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let vocab = vocab();
        let signals = interpret("top 3 senior react developers", &vocab);
        let c = candidate("senior react developer, 5+ years with aws");
        let first = score_candidate(&c, &signals, &vocab);
        let second = score_candidate(&c, &signals, &vocab);
        assert_eq!(first.score, second.score);
        assert_eq!(first.reasoning, second.reasoning);
        assert_eq!(first.strengths, second.strengths);
        assert_eq!(first.concerns, second.concerns);
    }

    #[test]
    fn test_structured_query_rubric_sum() {
        let vocab = vocab();
        let signals = interpret(
            "Job Title: Senior Backend Engineer\nSkills: Python, AWS\nRequirements: Not specified",
            &vocab,
        );
        let c = candidate("senior python developer with aws experience, 6+ years");
        let scored = score_candidate(&c, &signals, &vocab);

        // title "senior" (+15), skills python/aws (+24), senior level (+8),
        // tenure 6+ (+6), specialized aws (+8) are all guaranteed floors
        assert!(scored.score >= 15 + 12 + 12 + 8 + 6 + 8, "score {}", scored.score);
        assert!(scored.strengths.contains(&"Python experience".to_string()));
        assert!(scored.strengths.contains(&"AWS experience".to_string()));
        assert!(scored.strengths.contains(&"Senior level experience".to_string()));
        assert!(scored.strengths.contains(&"Extensive experience".to_string()));
        // aws contributes through two distinct rules: both entries appear
        assert!(scored.strengths.contains(&"aws expertise".to_string()));
    }

    #[test]
    fn test_no_match_yields_zero_and_placeholders() {
        let vocab = vocab();
        let signals = interpret("top 3 rust developers", &vocab);
        let scored = score_candidate(&candidate("zzz"), &signals, &vocab);
        assert_eq!(scored.score, 0);
        assert_eq!(scored.reasoning, "Poor match, significant training required");
        assert_eq!(scored.strengths, vec!["Technical background".to_string()]);
        assert_eq!(scored.concerns, vec!["Limited relevant experience".to_string()]);
    }

    #[test]
    fn test_score_clamped_at_100() {
        let vocab = vocab();
        let signals = interpret(
            "Job Title: senior principal lead architect engineer developer\n\
             Skills: python, aws, docker, kubernetes, react, java\n\
             senior react python java docker kubernetes aws azure devops blockchain",
            &vocab,
        );
        let scored = score_candidate(
            &candidate(
                "senior principal lead architect engineer developer python aws docker \
                 kubernetes react java azure devops blockchain machine learning ai 5+",
            ),
            &signals,
            &vocab,
        );
        assert_eq!(scored.score, 100);
        // a saturated score still reads as an excellent match
        assert_eq!(
            scored.reasoning,
            "Excellent match with strong alignment to job requirements"
        );
    }

    #[test]
    fn test_limited_band_adds_concern() {
        let vocab = vocab();
        // one stack term (+10) and one keyword (+3) lands in the 11..=20 band
        let signals = interpret("developers with react", &vocab);
        let scored = score_candidate(&candidate("i know react"), &signals, &vocab);
        assert_eq!(scored.score, 13);
        assert_eq!(scored.reasoning, "Limited match, may require additional training");
        assert_eq!(scored.concerns, vec!["Limited relevant experience".to_string()]);
    }

    #[test]
    fn test_tenure_buckets_are_mutually_exclusive() {
        let vocab = vocab();
        let signals = interpret("any engineer", &vocab);
        let long = score_candidate(&candidate("worked 5+ and 3+ years"), &signals, &vocab);
        assert!(long.strengths.contains(&"Extensive experience".to_string()));
        assert!(!long.strengths.contains(&"Good experience".to_string()));

        let mid = score_candidate(&candidate("worked 3+ years"), &signals, &vocab);
        assert!(mid.strengths.contains(&"Good experience".to_string()));
        assert!(!mid.strengths.contains(&"Extensive experience".to_string()));
    }

    #[test]
    fn test_mid_level_bonus_is_additive_with_tenure() {
        let vocab = vocab();
        let signals = interpret("mid level developers", &vocab);
        // mid-level match (+6 via 3+) and tenure (+4 via 3+) both fire,
        // plus "level" keyword (+3, >3 chars)
        let scored = score_candidate(&candidate("3+ years level"), &signals, &vocab);
        assert!(scored.strengths.contains(&"Mid-level experience".to_string()));
        assert!(scored.strengths.contains(&"Good experience".to_string()));
        assert_eq!(scored.score, 6 + 4 + 3);
    }

    #[test]
    fn test_education_match_scores_and_labels() {
        let vocab = vocab();
        let signals = interpret("developers with a bachelor degree in cs", &vocab);
        let scored = score_candidate(
            &candidate("bachelor of science, java developers"),
            &signals,
            &vocab,
        );
        assert!(scored.strengths.contains(&"Relevant education".to_string()));
    }

    #[test]
    fn test_candidate_is_not_mutated() {
        let vocab = vocab();
        let signals = interpret("react developers", &vocab);
        let c = candidate("React and TypeScript");
        let before = c.resume.clone();
        let _ = score_candidate(&c, &signals, &vocab);
        assert_eq!(c.resume, before);
    }
}
