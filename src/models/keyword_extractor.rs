use crate::models::{CandidatePhrase, StopWordSet, Tokenizer};
use crate::types::{RankedResult, WordStatsMap};
use crate::utils::{collect_word_stats, rank_candidates, score_candidates};
use crate::DEFAULT_KEYWORD_EXTRACTOR_CONFIG;

use log::debug;

/// Phrase-cutting knobs. The defaults leave plain RAKE behavior untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordExtractorConfig {
    /// Tokens shorter than this (in characters) act as phrase separators.
    pub min_token_chars: usize,
    /// Phrases longer than this are discarded before scoring. `0` means no limit.
    pub max_phrase_words: usize,
    /// Treat purely numeric tokens as phrase separators.
    pub skip_numeric_tokens: bool,
}

impl Default for KeywordExtractorConfig {
    fn default() -> Self {
        *DEFAULT_KEYWORD_EXTRACTOR_CONFIG
    }
}

/// Runs one RAKE pass over a text document.
///
/// The extractor only borrows the stop-word set; every structure built during a pass is
/// local to that call, so a single set can serve any number of concurrent extractions.
pub struct KeywordExtractor<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> KeywordExtractor<'a> {
    pub fn new(config: &KeywordExtractorConfig, stop_words: &'a StopWordSet) -> Self {
        KeywordExtractor {
            tokenizer: Tokenizer::new(config, stop_words),
        }
    }

    /// Extracts unique candidates from the text, sorted by descending score.
    ///
    /// Total over any input: text without content words yields an empty result.
    pub fn process_text_doc(&self, text: &str) -> RankedResult {
        debug!("Splitting candidate phrases...");
        let phrases = self.split_candidate_phrases(text);

        if phrases.is_empty() {
            debug!("No candidate phrases found");
            return RankedResult::new();
        }

        debug!("Collecting word stats for {} phrases...", phrases.len());
        let word_stats = collect_word_stats(&phrases);

        debug!("Scoring candidates over {} distinct words...", word_stats.len());
        let scored_candidates = score_candidates(&phrases, &word_stats);

        debug!("Ranking candidates...");
        rank_candidates(scored_candidates)
    }

    pub fn split_candidate_phrases(&self, text: &str) -> Vec<CandidatePhrase> {
        self.tokenizer.split_candidate_phrases(text)
    }

    /// Word statistics for the text, as used to score its candidates.
    pub fn collect_word_stats(&self, text: &str) -> WordStatsMap {
        collect_word_stats(&self.split_candidate_phrases(text))
    }
}
