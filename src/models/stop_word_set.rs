use crate::constants::DEFAULT_STOP_WORDS;
use crate::types::TokenRef;
use std::collections::HashSet;

/// An immutable set of lowercase words which act as phrase delimiters.
///
/// Built once and shared read-only; nothing mutates a set after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The fixed English list bundled with the crate.
    pub fn english() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS)
    }

    /// Builds a set from arbitrary words.
    ///
    /// Words are trimmed and lowercased, typographic apostrophes are folded into straight
    /// ones, and blank entries are skipped, so lookups line up with `Tokenizer::tokenize`
    /// output.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase().replace('\u{2019}', "'"))
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// A set which contains no words; every token is content.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Expects an already-normalized (lowercase) token.
    pub fn contains(&self, token: &TokenRef) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::english()
    }
}
