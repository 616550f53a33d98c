use crate::models::ScoredCandidate;
use crate::types::RankedResult;
use crate::utils::dedup_vector_by_key;

/// Ranks scored candidates.
///
/// ### Ranking:
/// - **Deduplication:** keeps the first occurrence of each candidate. Duplicates share the
///   same word statistics, so they carry the same score and nothing is lost.
/// - **Order:** descending score. The sort is stable, so exact ties stay in the order the
///   candidates were first seen in the text.
///
/// No truncation is applied; callers wanting a top-K slice take it themselves.
///
/// ### Example:
/// ```rust
/// use keyword_sniffer::{rank_candidates, ScoredCandidate};
///
/// let ranked = rank_candidates(vec![
///     ScoredCandidate::new("set".to_string(), 1.0),
///     ScoredCandidate::new("natural numbers".to_string(), 4.0),
///     ScoredCandidate::new("systems".to_string(), 1.0),
///     ScoredCandidate::new("set".to_string(), 1.0),
/// ]);
///
/// let candidates: Vec<&str> = ranked.iter().map(|c| c.candidate.as_str()).collect();
/// assert_eq!(candidates, vec!["natural numbers", "set", "systems"]);
/// ```
pub fn rank_candidates(scored_candidates: Vec<ScoredCandidate>) -> RankedResult {
    let mut ranked = dedup_vector_by_key(scored_candidates, |scored| scored.candidate.clone());

    // Scores are finite: every scored word has a frequency of at least 1
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    ranked
}
