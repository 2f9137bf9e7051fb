//! Affinity - cross-content recommendation engine
//!
//! Affinity decides which blog posts to show next to a calculator, which
//! calculators to show next to a blog post, and which other posts of the same
//! locale to show next to a post. Editorial picks from an affinity table come
//! first; a relevance scorer fills the rest.
//!
//! # Quick Start
//!
//! ```ignore
//! use affinity::{AffinityTable, Catalog, ContentSourceExt, Locale};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::from_file(Path::new("content/catalog.toml"))?);
//! let affinity = Arc::new(AffinityTable::from_file(Path::new("content/affinity.toml"))?);
//! let related = catalog.related(affinity);
//!
//! let post = catalog.post(Locale::En, "loan-guide").unwrap();
//! let calculators = related.related_calculators_for_post(post, 3);
//! ```
//!
//! # Architecture
//!
//! - `affinity-core`: content records, locales, configuration, errors
//! - `affinity-search`: scoring, affinity table, catalog, ranker

pub use affinity_core::*;
pub use affinity_search::*;
