pub mod candidate_phrase;
pub use candidate_phrase::CandidatePhrase;

pub mod error;
pub use error::Error;

pub mod keyword_extractor;
pub use keyword_extractor::{KeywordExtractor, KeywordExtractorConfig};

pub mod scored_candidate;
pub use scored_candidate::ScoredCandidate;

pub mod stop_word_set;
pub use stop_word_set::StopWordSet;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_stats;
pub use word_stats::WordStats;
