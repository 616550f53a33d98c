use crate::constants::{SENTENCE_DELIMITERS, WORD_JOINERS};
use crate::models::{CandidatePhrase, KeywordExtractorConfig, StopWordSet};
use crate::types::{Sentence, Token, TokenRef};
use log::debug;

/// Splits text into sentences and sentences into candidate phrases, using stop words and
/// punctuation as boundaries.
pub struct Tokenizer<'a> {
    /// Words which end the current phrase and are then discarded.
    stop_words: &'a StopWordSet,

    /// Tokens with fewer characters than this act as separators.
    min_token_chars: usize,

    /// Phrases with more words than this are dropped. `0` disables the limit.
    max_phrase_words: usize,

    /// Whether purely numeric tokens (e.g. `2021`, `06-13`) act as separators.
    skip_numeric_tokens: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(config: &KeywordExtractorConfig, stop_words: &'a StopWordSet) -> Self {
        Self {
            stop_words,
            min_token_chars: config.min_token_chars,
            max_phrase_words: config.max_phrase_words,
            skip_numeric_tokens: config.skip_numeric_tokens,
        }
    }

    /// Splits the text into sentences of lowercase word tokens.
    ///
    /// Fragments without any word token (e.g. `"..."`) are not emitted.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let chars = Self::merge_line_wrapped_words(text);

        let mut sentences = Vec::new();
        let mut fragment = String::new();

        for (idx, &c) in chars.iter().enumerate() {
            if Self::is_sentence_delimiter(&chars, idx) {
                Self::push_sentence(&mut sentences, &fragment);
                fragment.clear();
            } else {
                fragment.push(c);
            }
        }
        Self::push_sentence(&mut sentences, &fragment);

        sentences
    }

    /// Splits the text into candidate phrases, in source order.
    ///
    /// Every maximal run of non-separator tokens inside a sentence becomes one phrase. Stop
    /// words are not retained in any phrase.
    pub fn split_candidate_phrases(&self, text: &str) -> Vec<CandidatePhrase> {
        let mut phrases = Vec::new();

        for sentence in self.split_sentences(text) {
            let mut words: Vec<Token> = Vec::new();

            for token in sentence {
                if self.is_phrase_separator(&token) {
                    self.push_phrase(&mut phrases, std::mem::take(&mut words));
                } else {
                    words.push(token);
                }
            }

            self.push_phrase(&mut phrases, words);
        }

        phrases
    }

    /// Splits a fragment into lowercase word tokens.
    ///
    /// A token is a run of alphanumeric characters, optionally joined by single internal
    /// hyphens or apostrophes (`state-of-the-art`, `don't`). Typographic apostrophes are folded
    /// into straight ones. Everything else is dropped.
    pub fn tokenize(text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();

        let mut tokens = Vec::new();
        let mut current = Token::new();

        for (idx, &c) in chars.iter().enumerate() {
            if c.is_alphanumeric() {
                current.extend(c.to_lowercase());
            } else if WORD_JOINERS.contains(&c)
                && !current.is_empty()
                && chars.get(idx + 1).map_or(false, |next| next.is_alphanumeric())
            {
                current.push(if c == '\u{2019}' { '\'' } else { c });
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }

    /// Joins words hyphenated across a line break (`implemen-\ntation`). A dash which does
    /// not directly follow a word character is left alone, along with its line break.
    fn merge_line_wrapped_words(text: &str) -> Vec<char> {
        let mut chars: Vec<char> = Vec::with_capacity(text.len());
        let mut iter = text.chars().peekable();

        while let Some(c) = iter.next() {
            if c == '-' && chars.last().map_or(false, |prev| prev.is_alphanumeric()) {
                match iter.peek() {
                    Some('\n') => {
                        iter.next();
                        continue;
                    }
                    Some('\r') => {
                        let mut lookahead = iter.clone();
                        lookahead.next();

                        if lookahead.peek() == Some(&'\n') {
                            iter.next();
                            iter.next();
                            continue;
                        }
                    }
                    _ => {}
                }
            }

            chars.push(c);
        }

        chars
    }

    fn is_sentence_delimiter(chars: &[char], idx: usize) -> bool {
        let c = chars[idx];

        if SENTENCE_DELIMITERS.contains(&c) {
            return true;
        }

        let prev = idx.checked_sub(1).map(|prev_idx| chars[prev_idx]);
        let next = chars.get(idx + 1).copied();

        match c {
            // A dash standing on its own (" - ")
            '-' => {
                prev.map_or(true, |p| p.is_whitespace()) && next.map_or(true, |n| n.is_whitespace())
            }
            // Quotation marks, but not the apostrophe inside "don't"
            '\'' | '\u{2019}' => {
                !(prev.map_or(false, |p| p.is_alphanumeric())
                    && next.map_or(false, |n| n.is_alphanumeric()))
            }
            _ => false,
        }
    }

    fn push_sentence(sentences: &mut Vec<Sentence>, fragment: &str) {
        let tokens = Self::tokenize(fragment);

        if !tokens.is_empty() {
            sentences.push(tokens);
        }
    }

    fn push_phrase(&self, phrases: &mut Vec<CandidatePhrase>, words: Vec<Token>) {
        if words.is_empty() {
            return;
        }

        if self.max_phrase_words > 0 && words.len() > self.max_phrase_words {
            debug!(
                "Dropping {}-word phrase (limit {})",
                words.len(),
                self.max_phrase_words
            );
            return;
        }

        phrases.push(CandidatePhrase::new(words));
    }

    fn is_phrase_separator(&self, token: &TokenRef) -> bool {
        self.stop_words.contains(token)
            || token.chars().count() < self.min_token_chars
            || (self.skip_numeric_tokens && Self::is_numeric(token))
    }

    fn is_numeric(token: &TokenRef) -> bool {
        token.chars().any(|c| c.is_numeric())
            && token
                .chars()
                .all(|c| c.is_numeric() || WORD_JOINERS.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_KEYWORD_EXTRACTOR_CONFIG;

    fn phrase_texts(tokenizer: &Tokenizer, text: &str) -> Vec<String> {
        tokenizer
            .split_candidate_phrases(text)
            .iter()
            .map(|phrase| phrase.text())
            .collect()
    }

    #[test]
    fn test_is_numeric() {
        assert!(Tokenizer::is_numeric("2021"));
        assert!(Tokenizer::is_numeric("2021-06-13"));
        assert!(!Tokenizer::is_numeric("3d"));
        assert!(!Tokenizer::is_numeric("-"));
    }

    #[test]
    fn test_merge_line_wrapped_words() {
        let merged = |text: &str| -> String {
            Tokenizer::merge_line_wrapped_words(text).into_iter().collect()
        };

        assert_eq!(merged("deploy-\r\nment"), "deployment");
        assert_eq!(merged("fast -\nsafe"), "fast -\nsafe");
        assert_eq!(merged("-\nleading"), "-\nleading");
        assert_eq!(merged("trailing-"), "trailing-");
        assert_eq!(merged("stray-\rcarriage"), "stray-\rcarriage");
    }

    #[test]
    fn test_spaced_dash_is_a_sentence_delimiter() {
        let stop_words = StopWordSet::empty();
        let tokenizer = Tokenizer::new(DEFAULT_KEYWORD_EXTRACTOR_CONFIG, &stop_words);

        assert_eq!(
            tokenizer.split_sentences("fast - safe"),
            vec![vec!["fast".to_string()], vec!["safe".to_string()]]
        );
        assert_eq!(
            tokenizer.split_sentences("well-known"),
            vec![vec!["well-known".to_string()]]
        );
    }

    #[test]
    fn test_min_token_chars_separates_short_tokens() {
        let stop_words = StopWordSet::empty();
        let config = KeywordExtractorConfig {
            min_token_chars: 3,
            ..*DEFAULT_KEYWORD_EXTRACTOR_CONFIG
        };
        let tokenizer = Tokenizer::new(&config, &stop_words);

        assert_eq!(
            phrase_texts(&tokenizer, "vector db index"),
            vec!["vector", "index"]
        );
    }

    #[test]
    fn test_max_phrase_words_drops_long_phrases() {
        let stop_words = StopWordSet::english();
        let config = KeywordExtractorConfig {
            max_phrase_words: 2,
            ..*DEFAULT_KEYWORD_EXTRACTOR_CONFIG
        };
        let tokenizer = Tokenizer::new(&config, &stop_words);

        assert_eq!(
            phrase_texts(&tokenizer, "linear diophantine equations and natural numbers"),
            vec!["natural numbers"]
        );
    }

    #[test]
    fn test_skip_numeric_tokens() {
        let stop_words = StopWordSet::english();
        let config = KeywordExtractorConfig {
            skip_numeric_tokens: true,
            ..*DEFAULT_KEYWORD_EXTRACTOR_CONFIG
        };
        let tokenizer = Tokenizer::new(&config, &stop_words);

        assert_eq!(
            phrase_texts(&tokenizer, "released 2021 stable channel"),
            vec!["released", "stable channel"]
        );
    }
}
