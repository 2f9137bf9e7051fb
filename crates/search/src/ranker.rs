//! Related-content ranker
//!
//! This module provides:
//! - RelatedContent: the selector that combines editorial picks with
//!   scored fallback
//! - RelatedHit: a ranked result with score and origin
//!
//! # Selection
//!
//! ```text
//!  source item, max_results
//!        │
//!        ▼
//!  ┌─────────────────────┐   resolved in table order,
//!  │ manual affinity     │── stale ids skipped
//!  └─────────┬───────────┘
//!            │ fewer than max_results?
//!            ▼
//!  ┌─────────────────────┐   score > 0 only,
//!  │ scored fallback     │── (score desc, repository index asc)
//!  └─────────┬───────────┘
//!            ▼
//!   manual ++ scored, truncated
//! ```
//!
//! RelatedContent is STATELESS. It holds only `Arc` references to immutable
//! data, so clones are cheap and may be shared across threads.

use crate::affinity::AffinityTable;
use crate::catalog::ContentSource;
use crate::scorer::{OverlapScorer, RelevanceScorer};
use affinity_core::{BlogPostItem, CalculatorItem, EngineConfig, Locale, Result};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, trace};

// ============================================================================
// RelatedHit
// ============================================================================

/// Where a hit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitOrigin {
    /// Editorial pick from the affinity table
    Manual,
    /// Computed relevance fallback
    Scored,
}

/// A ranked related item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedHit<'a, T> {
    /// The recommended item
    pub item: &'a T,
    /// 1-based position in the result list
    pub rank: u32,
    /// Relevance score. For manual hits this is informational only; their
    /// position comes from the table.
    pub score: u32,
    /// Manual pick or scored fallback
    pub origin: HitOrigin,
}

// ============================================================================
// RelatedContent
// ============================================================================

/// Related-content selector
#[derive(Clone)]
pub struct RelatedContent {
    source: Arc<dyn ContentSource>,
    affinity: Arc<AffinityTable>,
    scorer: Arc<dyn RelevanceScorer>,
    default_locale: Locale,
}

impl RelatedContent {
    /// Create a selector with the default scorer and English as default locale
    pub fn new(source: Arc<dyn ContentSource>, affinity: Arc<AffinityTable>) -> Self {
        RelatedContent {
            source,
            affinity,
            scorer: Arc::new(OverlapScorer::default()),
            default_locale: Locale::En,
        }
    }

    /// Create a selector from engine configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(
        source: Arc<dyn ContentSource>,
        affinity: Arc<AffinityTable>,
        config: &EngineConfig,
    ) -> Result<Self> {
        let scorer = OverlapScorer::from_config(config)?;
        Ok(Self::new(source, affinity)
            .with_scorer(Arc::new(scorer))
            .with_default_locale(config.default_locale))
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn RelevanceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: set the locale used for calculator → post recommendations
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Locale used by [`related_posts_for_calculator`](Self::related_posts_for_calculator)
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Content repository in use
    pub fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    /// Editorial affinity table in use
    pub fn affinity(&self) -> &AffinityTable {
        &self.affinity
    }

    // ========================================================================
    // Calculator → posts
    // ========================================================================

    /// Posts related to a calculator, in the default locale
    pub fn related_posts_for_calculator(
        &self,
        calculator: &CalculatorItem,
        max_results: usize,
    ) -> Vec<&BlogPostItem> {
        self.related_posts_for_calculator_in(calculator, max_results, self.default_locale)
    }

    /// Posts related to a calculator, in a given locale
    pub fn related_posts_for_calculator_in(
        &self,
        calculator: &CalculatorItem,
        max_results: usize,
        locale: Locale,
    ) -> Vec<&BlogPostItem> {
        items(self.related_posts_for_calculator_hits(calculator, max_results, locale))
    }

    /// Ranked hits behind [`related_posts_for_calculator_in`](Self::related_posts_for_calculator_in)
    pub fn related_posts_for_calculator_hits(
        &self,
        calculator: &CalculatorItem,
        max_results: usize,
        locale: Locale,
    ) -> Vec<RelatedHit<'_, BlogPostItem>> {
        if max_results == 0 {
            return vec![];
        }

        let manual: Vec<&BlogPostItem> = self
            .affinity
            .posts_for(&calculator.id)
            .filter_map(|slug| {
                let post = self.source.post(locale, slug);
                if post.is_none() {
                    trace!(
                        target: "affinity::ranker",
                        calculator = %calculator.id,
                        slug,
                        %locale,
                        "Skipping affinity post missing from catalog"
                    );
                }
                post
            })
            .collect();

        let hits = select(
            manual,
            self.source.posts(locale),
            |p| p.slug.as_str(),
            None,
            |p| self.scorer.score_calculator_to_post(calculator, p),
            max_results,
        );

        debug!(
            target: "affinity::ranker",
            calculator = %calculator.id,
            %locale,
            scorer = self.scorer.name(),
            manual = count_origin(&hits, HitOrigin::Manual),
            scored = count_origin(&hits, HitOrigin::Scored),
            "Related posts for calculator"
        );
        hits
    }

    // ========================================================================
    // Post → calculators
    // ========================================================================

    /// Calculators related to a post
    pub fn related_calculators_for_post(
        &self,
        post: &BlogPostItem,
        max_results: usize,
    ) -> Vec<&CalculatorItem> {
        items(self.related_calculators_for_post_hits(post, max_results))
    }

    /// Ranked hits behind [`related_calculators_for_post`](Self::related_calculators_for_post)
    pub fn related_calculators_for_post_hits(
        &self,
        post: &BlogPostItem,
        max_results: usize,
    ) -> Vec<RelatedHit<'_, CalculatorItem>> {
        if max_results == 0 {
            return vec![];
        }

        let mut seen = FxHashSet::default();
        let manual: Vec<&CalculatorItem> = self
            .affinity
            .calculators_for(&post.slug)
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| {
                let calc = self.source.calculator(id);
                if calc.is_none() {
                    trace!(
                        target: "affinity::ranker",
                        post = %post.slug,
                        calculator = %id,
                        "Skipping affinity calculator missing from catalog"
                    );
                }
                calc
            })
            .collect();

        let hits = select(
            manual,
            self.source.calculators(),
            |c| c.id.as_str(),
            None,
            |c| self.scorer.score_calculator_to_post(c, post),
            max_results,
        );

        debug!(
            target: "affinity::ranker",
            post = %post.slug,
            scorer = self.scorer.name(),
            manual = count_origin(&hits, HitOrigin::Manual),
            scored = count_origin(&hits, HitOrigin::Scored),
            "Related calculators for post"
        );
        hits
    }

    // ========================================================================
    // Post → posts
    // ========================================================================

    /// Posts of `locale` related to a post, never including the post itself
    pub fn related_posts_for_post(
        &self,
        post: &BlogPostItem,
        max_results: usize,
        locale: Locale,
    ) -> Vec<&BlogPostItem> {
        items(self.related_posts_for_post_hits(post, max_results, locale))
    }

    /// Ranked hits behind [`related_posts_for_post`](Self::related_posts_for_post)
    pub fn related_posts_for_post_hits(
        &self,
        post: &BlogPostItem,
        max_results: usize,
        locale: Locale,
    ) -> Vec<RelatedHit<'_, BlogPostItem>> {
        if max_results == 0 {
            return vec![];
        }

        let hits = select(
            vec![],
            self.source.posts(locale),
            |p| p.slug.as_str(),
            Some(post.slug.as_str()),
            |p| self.scorer.score_post_to_post(post, p),
            max_results,
        );

        debug!(
            target: "affinity::ranker",
            post = %post.slug,
            %locale,
            scorer = self.scorer.name(),
            hits = hits.len(),
            "Related posts for post"
        );
        hits
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Merge manual picks with scored candidates.
///
/// `manual` must already be free of duplicates. Candidates whose key is in
/// `manual` or equals `exclude` are never scored. Scored candidates are
/// ordered by (score desc, repository index asc).
fn select<'a, T>(
    manual: Vec<&'a T>,
    candidates: &'a [T],
    key: impl Fn(&T) -> &str,
    exclude: Option<&str>,
    score: impl Fn(&T) -> u32,
    max_results: usize,
) -> Vec<RelatedHit<'a, T>> {
    let mut hits: Vec<RelatedHit<'a, T>> = manual
        .into_iter()
        .filter(|item| exclude != Some(key(*item)))
        .take(max_results)
        .map(|item| RelatedHit {
            item,
            rank: 0,
            score: score(item),
            origin: HitOrigin::Manual,
        })
        .collect();

    if hits.len() < max_results {
        let taken: FxHashSet<&str> = hits.iter().map(|h| key(h.item)).collect();

        let mut scored: Vec<(usize, u32, &'a T)> = candidates
            .iter()
            .enumerate()
            .filter(|&(_, c)| exclude != Some(key(c)) && !taken.contains(key(c)))
            .map(|(idx, c)| (idx, score(c), c))
            .filter(|&(_, s, _)| s > 0)
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let remaining = max_results - hits.len();
        hits.extend(scored.into_iter().take(remaining).map(|(_, s, item)| RelatedHit {
            item,
            rank: 0,
            score: s,
            origin: HitOrigin::Scored,
        }));
    }

    for (i, hit) in hits.iter_mut().enumerate() {
        hit.rank = (i + 1) as u32;
    }
    hits
}

fn items<T>(hits: Vec<RelatedHit<'_, T>>) -> Vec<&T> {
    hits.into_iter().map(|h| h.item).collect()
}

fn count_origin<T>(hits: &[RelatedHit<'_, T>], origin: HitOrigin) -> usize {
    hits.iter().filter(|h| h.origin == origin).count()
}

// ============================================================================
// Tests
// ============================================================================
