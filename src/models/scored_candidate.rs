use crate::types::{CandidateText, KeywordScore};
use serde::{Deserialize, Serialize};

/// A candidate phrase identity paired with its score from one scoring pass.
///
/// Serializes as `{"candidate": ..., "score": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: CandidateText,
    pub score: KeywordScore,
}

impl ScoredCandidate {
    pub fn new(candidate: CandidateText, score: KeywordScore) -> Self {
        ScoredCandidate { candidate, score }
    }
}
