//! Word and term extraction for relevance scoring
//!
//! Two tokenizers live here:
//! - `significant_words`: whitespace split, lowercase, length filter. Used for
//!   title and description overlap. Punctuation is kept unless `normalize`
//!   is set, so "growth." and "growth" are different words by default.
//! - `split_terms`: split on non-alphanumeric characters. Used by the
//!   token-set keyword matcher.

use std::collections::HashSet;

/// Extract the distinct significant words of a text.
///
/// - Split on whitespace only
/// - Optionally trim non-alphanumeric characters from each word's edges
/// - Keep words of at least `min_len` characters (counted as chars)
/// - Lowercase
/// - Deduplicate, preserving first occurrence order
///
/// # Example
///
/// ```
/// use affinity_search::tokenizer::significant_words;
///
/// let words = significant_words("Mortgage guide: the MORTGAGE basics", 4, false);
/// assert_eq!(words, vec!["mortgage", "guide:", "basics"]);
/// ```
pub fn significant_words(text: &str, min_len: usize, normalize: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .map(|w| {
            if normalize {
                w.trim_matches(|c: char| !c.is_alphanumeric())
            } else {
                w
            }
        })
        .filter(|w| w.chars().count() >= min_len)
        .map(|w| w.to_lowercase())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Split text into lowercase alphanumeric terms.
///
/// # Example
///
/// ```
/// use affinity_search::tokenizer::split_terms;
///
/// assert_eq!(split_terms("Mortgage-Calculator"), vec!["mortgage", "calculator"]);
/// ```
pub fn split_terms(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Count the entries two deduplicated word lists have in common.
pub fn shared_count(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let lookup: HashSet<&str> = b.iter().map(String::as_str).collect();
    a.iter().filter(|w| lookup.contains(w.as_str())).count()
}
