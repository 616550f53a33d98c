pub mod collect_word_stats;
pub use collect_word_stats::{collect_word_stats, merge_word_stats};

pub mod dedup_vector;
pub use dedup_vector::dedup_vector_by_key;

pub mod rank_candidates;
pub use rank_candidates::rank_candidates;

pub mod score_candidates;
pub use score_candidates::score_candidates;
