use crate::models::CandidatePhrase;
use crate::types::WordStatsMap;

/// Builds per-word frequency and degree counters from candidate phrases.
///
/// Every occurrence of a word adds 1 to its frequency and the phrase length to its degree.
/// Accumulation is order-independent, so partial maps built over disjoint slices of the
/// phrase list can be combined with [`merge_word_stats`].
pub fn collect_word_stats(phrases: &[CandidatePhrase]) -> WordStatsMap {
    let mut word_stats = WordStatsMap::new();

    for phrase in phrases {
        let phrase_len = phrase.len();

        for word in phrase.words() {
            word_stats
                .entry(word.clone())
                .or_default()
                .record_occurrence(phrase_len);
        }
    }

    word_stats
}

/// Merges a partial stats map into `word_stats` using the same accumulation rule.
pub fn merge_word_stats(word_stats: &mut WordStatsMap, partial: &WordStatsMap) {
    for (word, stats) in partial {
        word_stats.entry(word.clone()).or_default().merge(stats);
    }
}
