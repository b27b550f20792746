//! Ranking & Summarization — orders scored candidates, truncates to the
//! requested count, and renders the deterministic tier summary.
//!
//! Tier counts are computed over the truncated top-N list only, never the
//! full pool; a high-scoring candidate outside the cut is not counted.

use crate::search::scoring::ScoredCandidate;

/// Tier boundaries on the clamped 0..=100 score. Scores of 10 and below sit
/// in no tier and are omitted from the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub excellent: usize, // > 50
    pub strong: usize,    // 36..=50
    pub moderate: usize,  // 21..=35
    pub limited: usize,   // 11..=20
}

/// Sorts descending by score (stable: equal scores keep pool order),
/// truncates to `requested_count`, and returns the truncated list with its
/// tier summary.
pub fn rank(
    mut scored: Vec<ScoredCandidate>,
    requested_count: usize,
) -> (Vec<ScoredCandidate>, String) {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(requested_count);
    let summary = render_summary(tier_counts(&scored));
    (scored, summary)
}

/// Buckets the (already truncated) list into tiers.
pub fn tier_counts(top_n: &[ScoredCandidate]) -> TierCounts {
    let mut counts = TierCounts::default();
    for candidate in top_n {
        match candidate.score {
            s if s > 50 => counts.excellent += 1,
            s if s > 35 => counts.strong += 1,
            s if s > 20 => counts.moderate += 1,
            s if s > 10 => counts.limited += 1,
            _ => {}
        }
    }
    counts
}

/// Joins non-zero tier phrases with ", ", pluralizing "match" per count.
/// All-zero tiers produce an empty string; callers must tolerate it.
pub fn render_summary(counts: TierCounts) -> String {
    let tiers = [
        (counts.excellent, "excellent"),
        (counts.strong, "strong"),
        (counts.moderate, "moderate"),
        (counts.limited, "limited"),
    ];

    tiers
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, tier)| {
            let plural = if *count > 1 { "es" } else { "" };
            format!("{count} {tier} match{plural}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
