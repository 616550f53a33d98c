use crate::models::{ScoredCandidate, WordStats};
use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word token as an owned, lowercase `String`. Tokens are the basic units used
/// for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// An ordered sequence of word tokens found between two sentence delimiters. Stop words are
/// still present at this stage.
pub type Sentence = Vec<Token>;

/// The lowercase, single-space-joined text of a candidate phrase. This doubles as the
/// identity of the candidate: two phrases with the same text are the same candidate.
pub type CandidateText = String;

/// The RAKE score of a candidate: the sum of its words' degree/frequency ratios.
pub type KeywordScore = f64;

/// Represents a map of distinct words to their co-occurrence statistics within a text document.
pub type WordStatsMap = HashMap<Token, WordStats>;

/// Unique scored candidates, sorted by descending score. Ties keep first-seen order.
pub type RankedResult = Vec<ScoredCandidate>;
