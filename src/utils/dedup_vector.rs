use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicates a vector by a derived key while maintaining the original order.
///
/// # Arguments
/// * `vec` - A vector containing elements to deduplicate.
/// * `key` - Derives the identity used to detect duplicates.
///
/// # Returns
/// A new vector with the first occurrence of each key, preserving the original order.
pub fn dedup_vector_by_key<T, K, F>(vec: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    vec.into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
