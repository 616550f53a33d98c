use crate::models::KeywordExtractorConfig;

pub const DEFAULT_KEYWORD_EXTRACTOR_CONFIG: &KeywordExtractorConfig = &KeywordExtractorConfig {
    min_token_chars: 1,
    max_phrase_words: 0,
    skip_numeric_tokens: false,
};
