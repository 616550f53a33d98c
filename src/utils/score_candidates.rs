use crate::models::{CandidatePhrase, ScoredCandidate, WordStats};
use crate::types::{KeywordScore, WordStatsMap};

/// Scores each phrase as the sum of its words' degree/frequency ratios.
///
/// Output order follows the input phrases; repeated phrases are scored repeatedly (with
/// identical results) and are left for the ranking step to collapse.
pub fn score_candidates(
    phrases: &[CandidatePhrase],
    word_stats: &WordStatsMap,
) -> Vec<ScoredCandidate> {
    phrases
        .iter()
        .map(|phrase| {
            let score: KeywordScore = phrase
                .words()
                .iter()
                .map(|word| {
                    word_stats
                        .get(word)
                        .map_or(0.0, WordStats::degree_to_frequency_ratio)
                })
                .sum();

            ScoredCandidate::new(phrase.text(), score)
        })
        .collect()
}
