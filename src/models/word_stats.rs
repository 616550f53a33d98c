use crate::types::KeywordScore;

/// Per-word co-occurrence counters.
///
/// `frequency` counts occurrences across all candidate phrases. `degree` adds, for every
/// occurrence, the length of the phrase it occurred in (the word itself included), so
/// `degree >= frequency` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStats {
    pub frequency: usize,
    pub degree: usize,
}

impl WordStats {
    /// Records one occurrence of the word inside a phrase of `phrase_len` words.
    pub fn record_occurrence(&mut self, phrase_len: usize) {
        self.frequency += 1;
        self.degree += phrase_len;
    }

    /// Folds counters gathered from another partition of the same document into `self`.
    pub fn merge(&mut self, other: &WordStats) {
        self.frequency += other.frequency;
        self.degree += other.degree;
    }

    /// The word's contribution to a candidate score.
    pub fn degree_to_frequency_ratio(&self) -> KeywordScore {
        if self.frequency == 0 {
            return 0.0;
        }

        self.degree as KeywordScore / self.frequency as KeywordScore
    }
}
