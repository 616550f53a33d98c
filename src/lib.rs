mod config;
pub use config::DEFAULT_KEYWORD_EXTRACTOR_CONFIG;
mod constants;
pub use constants::DEFAULT_STOP_WORDS;
pub mod models;
pub use models::{
    CandidatePhrase, Error, KeywordExtractor, KeywordExtractorConfig, ScoredCandidate,
    StopWordSet, Tokenizer, WordStats,
};
#[cfg(feature = "server")]
pub mod server;
pub mod types;
pub use types::{
    CandidateText, KeywordScore, RankedResult, Sentence, Token, TokenRef, WordStatsMap,
};
pub mod utils;
pub use utils::{collect_word_stats, merge_word_stats, rank_candidates, score_candidates};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Extracts ranked keyphrases from the text using the default extractor configuration.
pub fn extract_keywords(text: &str, stop_words: &StopWordSet) -> RankedResult {
    extract_keywords_with_custom_config(DEFAULT_KEYWORD_EXTRACTOR_CONFIG, text, stop_words)
}

pub fn extract_keywords_with_custom_config(
    keyword_extractor_config: &KeywordExtractorConfig,
    text: &str,
    stop_words: &StopWordSet,
) -> RankedResult {
    let keyword_extractor = KeywordExtractor::new(keyword_extractor_config, stop_words);

    keyword_extractor.process_text_doc(text)
}
