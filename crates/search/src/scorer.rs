//! Relevance scoring between content items
//!
//! This module provides:
//! - RelevanceScorer trait for pluggable scoring
//! - OverlapScorer default implementation (category, tag and word overlap)
//!
//! Scores are non-negative integers used only for relative ranking. A score
//! of 0 means "unrelated" and excludes the candidate from scored fallback.

use crate::matcher::{matcher_for, KeywordMatcher, SubstringMatcher};
use crate::tokenizer::{shared_count, significant_words};
use affinity_core::{BlogPostItem, CalculatorItem, EngineConfig, Result, ScoringWeights};
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// RelevanceScorer Trait
// ============================================================================

/// Pluggable relevance interface
///
/// Implementations must be pure: the same pair always yields the same score.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync; the engine is shared across threads.
pub trait RelevanceScorer: Send + Sync {
    /// Score a post as related content for a calculator
    fn score_calculator_to_post(&self, calculator: &CalculatorItem, post: &BlogPostItem) -> u32;

    /// Score a candidate post as related content for a source post
    fn score_post_to_post(&self, source: &BlogPostItem, candidate: &BlogPostItem) -> u32;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// OverlapScorer
// ============================================================================

/// Category, tag and word overlap scorer
///
/// # Calculator to post
///
/// - `calc_category` if categories are equal (case-sensitive)
/// - `calc_tag` per distinct post tag matching any calculator keyword
///
/// # Post to post
///
/// - `post_category` if categories are equal (case-sensitive)
/// - `post_tag` per tag shared by both posts (case-insensitive)
/// - `title_word` per significant word shared by both titles
/// - `description_word` per significant word shared by both descriptions
#[derive(Clone)]
pub struct OverlapScorer {
    weights: ScoringWeights,
    matcher: Arc<dyn KeywordMatcher>,
    normalize_words: bool,
}

impl Default for OverlapScorer {
    fn default() -> Self {
        OverlapScorer {
            weights: ScoringWeights::default(),
            matcher: Arc::new(SubstringMatcher),
            normalize_words: false,
        }
    }
}

impl std::fmt::Debug for OverlapScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlapScorer")
            .field("weights", &self.weights)
            .field("matcher", &self.matcher.name())
            .field("normalize_words", &self.normalize_words)
            .finish()
    }
}

impl OverlapScorer {
    /// Create a scorer with custom weights and the substring matcher
    pub fn new(weights: ScoringWeights) -> Self {
        OverlapScorer {
            weights,
            ..OverlapScorer::default()
        }
    }

    /// Build a scorer from engine configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(OverlapScorer {
            weights: config.weights,
            matcher: matcher_for(config.matcher_kind()?),
            normalize_words: config.normalize_words,
        })
    }

    /// Builder: set keyword matcher
    pub fn with_matcher(mut self, matcher: Arc<dyn KeywordMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Builder: strip punctuation from word edges before comparing
    pub fn with_normalized_words(mut self, normalize: bool) -> Self {
        self.normalize_words = normalize;
        self
    }

    /// Weights in use
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    fn words(&self, text: &str) -> Vec<String> {
        significant_words(text, self.weights.min_word_len, self.normalize_words)
    }
}

/// Lowercase and deduplicate, dropping empty entries
fn folded_set(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_lowercase())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// `count * weight`, clamped to `u32::MAX` for oversized configured weights
fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(weight)
}

impl RelevanceScorer for OverlapScorer {
    fn score_calculator_to_post(&self, calculator: &CalculatorItem, post: &BlogPostItem) -> u32 {
        let mut score = 0u32;

        if calculator.category == post.category {
            score = score.saturating_add(self.weights.calc_category);
        }

        let keywords = folded_set(&calculator.keywords);
        if !keywords.is_empty() {
            let matched_tags = folded_set(&post.tags)
                .iter()
                .filter(|tag| keywords.iter().any(|kw| self.matcher.matches(tag, kw)))
                .count();
            score = score.saturating_add(weighted(matched_tags, self.weights.calc_tag));
        }

        score
    }

    fn score_post_to_post(&self, source: &BlogPostItem, candidate: &BlogPostItem) -> u32 {
        let mut score = 0u32;

        if source.category == candidate.category {
            score = score.saturating_add(self.weights.post_category);
        }

        let shared_tags = shared_count(&folded_set(&source.tags), &folded_set(&candidate.tags));
        score = score.saturating_add(weighted(shared_tags, self.weights.post_tag));

        let shared_title = shared_count(&self.words(&source.title), &self.words(&candidate.title));
        score = score.saturating_add(weighted(shared_title, self.weights.title_word));

        let shared_desc = shared_count(
            &self.words(&source.description),
            &self.words(&candidate.description),
        );
        score = score.saturating_add(weighted(shared_desc, self.weights.description_word));

        score
    }

    fn name(&self) -> &str {
        "overlap"
    }
}

// ============================================================================
// Tests
// ============================================================================
