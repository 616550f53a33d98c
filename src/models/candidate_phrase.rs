use crate::types::{CandidateText, Token};

/// A maximal run of content words, in source order, taken from a single sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidatePhrase {
    words: Vec<Token>,
}

impl CandidatePhrase {
    pub fn new(words: Vec<Token>) -> Self {
        CandidatePhrase { words }
    }

    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// Number of words in the phrase. This is what each of its words adds to its degree.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Identity (and display text) of the phrase: its words joined by single spaces.
    pub fn text(&self) -> CandidateText {
        self.words.join(" ")
    }
}
