//! Query Interpreter — decomposes a free-text recruiter query into structured
//! job signals: requested result count, title, skills, stack mentions,
//! experience level, and education.
//!
//! Interpretation never fails: a malformed or empty query resolves to
//! all-default signals, not an error.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::search::vocab::SignalVocabulary;

/// Default number of candidates returned when the query names none.
pub const DEFAULT_REQUESTED_COUNT: usize = 5;
/// Upper bound on the requested count; larger captures fall back to default.
pub const MAX_REQUESTED_COUNT: usize = 20;

/// Experience level inferred from the query, first match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    #[default]
    Unspecified,
}

/// Education requirement inferred from the query, first match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Bachelor,
    Master,
    Phd,
    #[default]
    Unspecified,
}

impl EducationLevel {
    /// The substring searched for in resume text when scoring education.
    pub fn resume_term(&self) -> Option<&'static str> {
        match self {
            EducationLevel::Bachelor => Some("bachelor"),
            EducationLevel::Master => Some("master"),
            EducationLevel::Phd => Some("phd"),
            EducationLevel::Unspecified => None,
        }
    }
}

/// Structured decomposition of a search query. Ephemeral: derived per request
/// and discarded with the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSignals {
    pub title: Option<String>,
    /// Explicit skills first, then requirement-derived ones, de-duplicated.
    pub skills: Vec<String>,
    /// Stack mentions scanned from the whole query. Kept separate from
    /// `skills`: explicit skills score higher than inferred mentions.
    pub stack: Vec<String>,
    /// Every query word longer than 3 chars, for the low-weight general pass.
    pub keywords: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub education: EducationLevel,
    /// Always within [1, MAX_REQUESTED_COUNT].
    pub requested_count: usize,
}

/// Parses a free-text query into `JobSignals`.
pub fn interpret(query: &str, vocab: &SignalVocabulary) -> JobSignals {
    let query_lower = query.to_lowercase();

    JobSignals {
        title: extract_title(query),
        skills: extract_skills(query, vocab),
        stack: extract_stack(&query_lower, vocab),
        keywords: general_keywords(&query_lower),
        experience_level: detect_experience_level(&query_lower),
        education: detect_education(&query_lower),
        requested_count: extract_requested_count(&query_lower),
    }
}

/// Extracts the requested candidate count from phrasings like "top 3" or
/// "5 candidates". Ordered pattern attempts; the first match wins, and its
/// capture is used only if it falls within [1, MAX_REQUESTED_COUNT].
pub fn extract_requested_count(query_lower: &str) -> usize {
    let patterns = [
        r"top\s+(\d+)",
        r"(\d+)\s+candidates?",
        r"(\d+)\s+developers?",
        r"(\d+)\s+engineers?",
        r"(\d+)\s+people",
        r"(\d+)\s+professionals?",
    ];

    for pattern in patterns {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        if let Some(caps) = re.captures(query_lower) {
            if let Ok(n) = caps[1].parse::<usize>() {
                if (1..=MAX_REQUESTED_COUNT).contains(&n) {
                    return n;
                }
            }
            return DEFAULT_REQUESTED_COUNT;
        }
    }

    DEFAULT_REQUESTED_COUNT
}

fn extract_title(query: &str) -> Option<String> {
    let re = Regex::new(r"(?i)job title:\s*([^\n]+)").ok()?;
    re.captures(query)
        .map(|caps| caps[1].trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Explicit "Skills:" list first, then technologies found in the
/// "Requirements:" line, skipping duplicates. A literal "Not specified"
/// value means the recruiter left the field blank.
fn extract_skills(query: &str, vocab: &SignalVocabulary) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();

    if let Ok(re) = Regex::new(r"(?i)skills:\s*([^\n]+)") {
        if let Some(caps) = re.captures(query) {
            let list = caps[1].trim();
            if list != "Not specified" {
                skills.extend(
                    list.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty()),
                );
            }
        }
    }

    if let Ok(re) = Regex::new(r"(?i)requirements:\s*([^\n]+)") {
        if let Some(caps) = re.captures(query) {
            let requirements = caps[1].trim();
            if requirements != "Not specified" {
                let requirements_lower = requirements.to_lowercase();
                for tech in &vocab.requirement_tech {
                    if requirements_lower.contains(tech.as_str())
                        && !skills.iter().any(|s| s == tech)
                    {
                        skills.push(tech.clone());
                    }
                }
            }
        }
    }

    skills
}

/// Scans the entire lower-cased query for stack terms, in vocabulary order.
fn extract_stack(query_lower: &str, vocab: &SignalVocabulary) -> Vec<String> {
    vocab
        .stack_terms
        .iter()
        .filter(|term| query_lower.contains(term.as_str()))
        .cloned()
        .collect()
}

fn general_keywords(query_lower: &str) -> Vec<String> {
    query_lower
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .map(|word| word.to_string())
        .collect()
}

/// Ordered (cues, level) chain; the first level with a matching cue wins.
fn detect_experience_level(query_lower: &str) -> ExperienceLevel {
    const CHAIN: &[(&[&str], ExperienceLevel)] = &[
        (&["senior", "lead", "principal"], ExperienceLevel::Senior),
        (&["junior", "entry", "graduate"], ExperienceLevel::Junior),
        (&["mid", "intermediate"], ExperienceLevel::Mid),
    ];

    for (cues, level) in CHAIN {
        if cues.iter().any(|cue| query_lower.contains(cue)) {
            return *level;
        }
    }
    ExperienceLevel::Unspecified
}

/// Ordered (cues, level) chain; the first level with a matching cue wins.
fn detect_education(query_lower: &str) -> EducationLevel {
    const CHAIN: &[(&[&str], EducationLevel)] = &[
        (&["bachelor", "degree"], EducationLevel::Bachelor),
        (&["master", "mba"], EducationLevel::Master),
        (&["phd", "doctorate"], EducationLevel::Phd),
    ];

    for (cues, level) in CHAIN {
        if cues.iter().any(|cue| query_lower.contains(cue)) {
            return *level;
        }
    }
    EducationLevel::Unspecified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SignalVocabulary {
        SignalVocabulary::default()
    }

    #[test]
    fn test_top_n_pattern_wins() {
        assert_eq!(extract_requested_count("top 3 react developers"), 3);
    }

    #[test]
    fn test_count_from_candidates_pattern() {
        assert_eq!(extract_requested_count("find 7 candidates for this role"), 7);
    }

    #[test]
    fn test_count_out_of_range_falls_back_to_default() {
        assert_eq!(extract_requested_count("top 50 engineers"), 5);
        assert_eq!(extract_requested_count("0 candidates"), 5);
    }

    #[test]
    fn test_count_absent_defaults_to_five() {
        assert_eq!(extract_requested_count("react developers in berlin"), 5);
    }

    #[test]
    fn test_count_upper_bound_inclusive() {
        assert_eq!(extract_requested_count("top 20 people"), 20);
    }

    #[test]
    fn test_title_extracted_from_structured_line() {
        let signals = interpret("Job Title: Senior Backend Engineer\nSkills: Python", &vocab());
        assert_eq!(signals.title.as_deref(), Some("Senior Backend Engineer"));
    }

    #[test]
    fn test_skills_explicit_list_parsed() {
        let signals = interpret("Skills: Python, AWS, Rust", &vocab());
        assert_eq!(signals.skills, vec!["Python", "AWS", "Rust"]);
    }

    #[test]
    fn test_skills_not_specified_is_empty() {
        let signals = interpret("Skills: Not specified", &vocab());
        assert!(signals.skills.is_empty());
    }

    #[test]
    fn test_requirements_append_known_tech_without_duplicates() {
        let query = "Skills: python\nRequirements: python and docker experience";
        let signals = interpret(query, &vocab());
        // "python" already listed explicitly; docker appended from requirements
        assert_eq!(signals.skills, vec!["python", "docker"]);
    }

    #[test]
    fn test_stack_scan_covers_whole_query() {
        let signals = interpret("top 3 react developers with kubernetes", &vocab());
        assert!(signals.stack.contains(&"react".to_string()));
        assert!(signals.stack.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_experience_level_senior_beats_mid() {
        // "senior" and "intermediate" both present: senior has priority
        let signals = interpret("senior or intermediate engineer", &vocab());
        assert_eq!(signals.experience_level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_experience_level_junior_beats_mid() {
        let signals = interpret("junior to mid engineer", &vocab());
        assert_eq!(signals.experience_level, ExperienceLevel::Junior);
    }

    #[test]
    fn test_education_first_match_wins() {
        let signals = interpret("bachelor or master degree", &vocab());
        assert_eq!(signals.education, EducationLevel::Bachelor);
    }

    #[test]
    fn test_education_phd() {
        let signals = interpret("phd in computer science", &vocab());
        assert_eq!(signals.education, EducationLevel::Phd);
    }

    #[test]
    fn test_empty_query_yields_defaults() {
        let signals = interpret("", &vocab());
        assert!(signals.title.is_none());
        assert!(signals.skills.is_empty());
        assert!(signals.stack.is_empty());
        assert!(signals.keywords.is_empty());
        assert_eq!(signals.experience_level, ExperienceLevel::Unspecified);
        assert_eq!(signals.education, EducationLevel::Unspecified);
        assert_eq!(signals.requested_count, DEFAULT_REQUESTED_COUNT);
    }

    #[test]
    fn test_general_keywords_skip_short_words() {
        let signals = interpret("top 3 java devs for api work", &vocab());
        assert!(signals.keywords.contains(&"java".to_string()));
        assert!(!signals.keywords.contains(&"top".to_string()));
        assert!(!signals.keywords.contains(&"api".to_string()));
    }

    #[test]
    fn test_smaller_vocabulary_is_honored() {
        let vocab = SignalVocabulary {
            requirement_tech: vec!["cobol".to_string()],
            stack_terms: vec!["cobol".to_string()],
            specialized_skills: vec![],
            summary_skills: vec![],
        };
        let signals = interpret("Requirements: cobol and docker", &vocab);
        assert_eq!(signals.skills, vec!["cobol"]);
        assert_eq!(signals.stack, vec!["cobol"]);
    }
}
