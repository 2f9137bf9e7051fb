//! Keyword matching between post tags and calculator keywords
//!
//! This module provides:
//! - KeywordMatcher trait for pluggable tag/keyword comparison
//! - SubstringMatcher: bidirectional substring test (default)
//! - TokenSetMatcher: term-set containment
//!
//! Both inputs are lowercased by the caller before `matches` is invoked.

use crate::tokenizer::split_terms;
use affinity_core::MatcherKind;
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// KeywordMatcher Trait
// ============================================================================

/// Pluggable tag-to-keyword comparison
///
/// # Thread Safety
///
/// Matchers must be Send + Sync; the engine is shared across threads.
pub trait KeywordMatcher: Send + Sync {
    /// Whether a (lowercased) tag and a (lowercased) keyword are related
    fn matches(&self, tag: &str, keyword: &str) -> bool;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

/// Build the matcher selected in configuration
pub fn matcher_for(kind: MatcherKind) -> Arc<dyn KeywordMatcher> {
    match kind {
        MatcherKind::Substring => Arc::new(SubstringMatcher),
        MatcherKind::TokenSet => Arc::new(TokenSetMatcher),
    }
}

// ============================================================================
// SubstringMatcher
// ============================================================================

/// Bidirectional substring matching
///
/// "mortgage" matches "mortgage-calculator" and vice versa. Short keywords
/// can match unrelated longer words ("tax" matches "syntax"); use
/// `TokenSetMatcher` when that matters. Empty strings never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl KeywordMatcher for SubstringMatcher {
    fn matches(&self, tag: &str, keyword: &str) -> bool {
        if tag.is_empty() || keyword.is_empty() {
            return false;
        }
        tag.contains(keyword) || keyword.contains(tag)
    }

    fn name(&self) -> &str {
        "substring"
    }
}

// ============================================================================
// TokenSetMatcher
// ============================================================================

/// Term-set containment matching
///
/// Tag and keyword are split on non-alphanumeric characters. They match when
/// the terms of one are all present in the other, so "mortgage" matches
/// "mortgage-calculator" but "tax" no longer matches "syntax".
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetMatcher;

impl KeywordMatcher for TokenSetMatcher {
    fn matches(&self, tag: &str, keyword: &str) -> bool {
        let tag_terms: HashSet<String> = split_terms(tag).into_iter().collect();
        let keyword_terms: HashSet<String> = split_terms(keyword).into_iter().collect();
        if tag_terms.is_empty() || keyword_terms.is_empty() {
            return false;
        }
        tag_terms.is_subset(&keyword_terms) || keyword_terms.is_subset(&tag_terms)
    }

    fn name(&self) -> &str {
        "token-set"
    }
}
