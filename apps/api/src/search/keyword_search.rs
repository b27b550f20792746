//! Keyword relevance mode — free-text candidate search without a job
//! context.
//!
//! Separate from the rubric pipeline, down to the summary scope: the
//! skills/experience summary here covers the ENTIRE matched set, while the
//! rubric pipeline summarizes only the truncated top-N. The two must not be
//! unified.

use serde::Serialize;

use crate::models::candidate::Candidate;
use crate::search::vocab::SignalVocabulary;

/// Hard cap on returned candidates for this mode.
const MAX_RESULTS: usize = 20;

/// Positional weights: full query first, then up to four keyword fragments.
const TERM_WEIGHTS: [u32; 5] = [10, 5, 3, 2, 1];

/// A search term with its positional weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: u32,
}

/// A matched candidate as presented to the caller.
#[derive(Debug, Serialize)]
pub struct QuickMatch {
    pub id: uuid::Uuid,
    pub email: String,
    pub resume: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub leetcode_url: Option<String>,
    pub relevance_score: u32,
    pub profile_created: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuickSearchResults {
    pub query: String,
    pub candidates: Vec<QuickMatch>,
    pub total_candidates: usize,
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct QuickSearchResponse {
    pub success: bool,
    pub results: QuickSearchResults,
}

/// The full lower-cased query at weight 10, then up to four words longer
/// than 2 characters at weights 5/3/2/1.
pub fn build_terms(query: &str) -> Vec<WeightedTerm> {
    let query_lower = query.to_lowercase();
    let mut terms = vec![WeightedTerm {
        term: query_lower.clone(),
        weight: TERM_WEIGHTS[0],
    }];

    let keywords = query_lower
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .take(TERM_WEIGHTS.len() - 1);
    for (i, word) in keywords.enumerate() {
        terms.push(WeightedTerm {
            term: word.to_string(),
            weight: TERM_WEIGHTS[i + 1],
        });
    }

    terms
}

/// Sum of weights whose term occurs in the (lower-cased) resume.
pub fn relevance(resume_lower: &str, terms: &[WeightedTerm]) -> u32 {
    terms
        .iter()
        .filter(|t| resume_lower.contains(t.term.as_str()))
        .map(|t| t.weight)
        .sum()
}

/// Scores the pool, drops zero-relevance candidates, orders by relevance
/// descending then profile recency, and caps at `MAX_RESULTS`.
pub fn rank_by_relevance(candidates: &[Candidate], query: &str) -> Vec<(Candidate, u32)> {
    let terms = build_terms(query);

    let mut matched: Vec<(Candidate, u32)> = candidates
        .iter()
        .map(|c| (c.clone(), relevance(&c.resume.to_lowercase(), &terms)))
        .filter(|(_, score)| *score > 0)
        .collect();

    matched.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then(b.created_at.cmp(&a.created_at)));
    matched.truncate(MAX_RESULTS);
    matched
}

/// Renders the pool-wide analysis sentence over ALL matched candidates.
pub fn search_analysis(query: &str, matched: &[(Candidate, u32)], vocab: &SignalVocabulary) -> String {
    if matched.is_empty() {
        return format!(
            "No candidates found matching \"{query}\". Try broadening your search terms or \
             using different keywords."
        );
    }

    let plural = if matched.len() == 1 { "" } else { "s" };
    let mut analysis = format!(
        "Found {} candidate{plural} matching \"{query}\". ",
        matched.len()
    );

    let skills = top_skills(matched, vocab);
    if !skills.is_empty() {
        let top: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
        analysis.push_str(&format!("Top skills found: {}. ", top.join(", ")));
    }

    let levels = experience_levels(matched);
    if !levels.is_empty() {
        analysis.push_str(&format!("Experience levels: {}. ", levels.join(", ")));
    }

    analysis.push_str("Candidates are ranked by relevance to your search criteria.");
    analysis
}

/// Top five summary skills by resume count, count-descending; ties keep
/// vocabulary order.
fn top_skills(matched: &[(Candidate, u32)], vocab: &SignalVocabulary) -> Vec<String> {
    let mut counts: Vec<(&String, usize)> = vocab
        .summary_skills
        .iter()
        .map(|skill| {
            let count = matched
                .iter()
                .filter(|(c, _)| c.resume.to_lowercase().contains(skill.as_str()))
                .count();
            (skill, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    counts.sort_by(|(_, a), (_, b)| b.cmp(a));
    counts.into_iter().take(5).map(|(skill, _)| skill.clone()).collect()
}

/// Distinct experience levels present in the matched set, first-seen order.
/// Per resume the first matching bucket wins.
fn experience_levels(matched: &[(Candidate, u32)]) -> Vec<String> {
    const BUCKETS: &[(&[&str], &str)] = &[
        (&["senior", "lead", "5+", "6+", "7+"], "Senior"),
        (&["junior", "entry", "0-2", "1-2"], "Junior"),
        (&["mid", "3+", "4+"], "Mid-level"),
    ];

    let mut levels: Vec<String> = Vec::new();
    for (candidate, _) in matched {
        let resume = candidate.resume.to_lowercase();
        let level = BUCKETS
            .iter()
            .find(|(cues, _)| cues.iter().any(|cue| resume.contains(cue)))
            .map(|(_, label)| *label);
        if let Some(level) = level {
            if !levels.iter().any(|l| l == level) {
                levels.push(level.to_string());
            }
        }
    }
    levels
}

/// Assembles the full quick-search payload.
pub fn quick_search(
    candidates: &[Candidate],
    query: &str,
    vocab: &SignalVocabulary,
) -> QuickSearchResponse {
    let matched = rank_by_relevance(candidates, query);
    let analysis = search_analysis(query, &matched, vocab);

    let results: Vec<QuickMatch> = matched
        .into_iter()
        .map(|(c, score)| QuickMatch {
            id: c.id,
            email: c.email,
            resume: c.resume,
            github_url: c.github_url,
            linkedin_url: c.linkedin_url,
            leetcode_url: c.leetcode_url,
            relevance_score: score,
            profile_created: c.created_at,
        })
        .collect();

    let total_candidates = results.len();
    QuickSearchResponse {
        success: true,
        results: QuickSearchResults {
            query: query.to_string(),
            candidates: results,
            total_candidates,
            analysis,
        },
    }
}
