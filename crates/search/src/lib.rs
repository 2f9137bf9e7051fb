//! Related-content selection for the affinity engine
//!
//! This crate provides:
//! - RelevanceScorer trait for pluggable scoring
//! - OverlapScorer default implementation
//! - KeywordMatcher trait with substring and token-set matchers
//! - Whitespace word tokenizer
//! - AffinityTable for editorial post → calculator picks
//! - ContentSource trait and in-memory Catalog
//! - RelatedContent ranker combining manual picks with scored fallback
//! - ContentSourceExt extension trait for a `.related()` accessor
//!
//! # Usage
//!
//! ```ignore
//! use affinity_search::ContentSourceExt;
//!
//! let related = Arc::new(catalog).related(Arc::new(affinity));
//! let posts = related.related_posts_for_post(&post, 3, Locale::En);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod affinity;
pub mod catalog;
pub mod matcher;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

use std::sync::Arc;

// Re-export commonly used types
pub use affinity::{AffinityEntry, AffinityTable};
pub use catalog::{Catalog, CatalogBuilder, ContentSource};
pub use matcher::{matcher_for, KeywordMatcher, SubstringMatcher, TokenSetMatcher};
pub use ranker::{HitOrigin, RelatedContent, RelatedHit};
pub use scorer::{OverlapScorer, RelevanceScorer};
pub use tokenizer::{significant_words, split_terms};

// ============================================================================
// ContentSource Extension
// ============================================================================

/// Extension trait for content repositories
///
/// Adds the `.related()` method to `Arc<C>` for building a ranker over the
/// repository with the default scorer.
pub trait ContentSourceExt {
    /// Build a related-content ranker over this repository
    fn related(&self, affinity: Arc<AffinityTable>) -> RelatedContent;
}

impl<C: ContentSource + 'static> ContentSourceExt for Arc<C> {
    fn related(&self, affinity: Arc<AffinityTable>) -> RelatedContent {
        let source: Arc<dyn ContentSource> = self.clone();
        RelatedContent::new(source, affinity)
    }
}
