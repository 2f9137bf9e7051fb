//! Content repositories
//!
//! This module provides:
//! - ContentSource trait: the read-only view the ranker consumes
//! - Catalog: in-memory implementation with id/slug indexes
//! - CatalogBuilder: validated construction
//!
//! A catalog is built once at start-up and never mutated afterwards.

use affinity_core::{BlogPostItem, CalculatorItem, Error, Locale, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// ContentSource Trait
// ============================================================================

/// Read-only access to calculators and per-locale posts
///
/// Slices are in repository order; that order is the ranking tiebreak.
pub trait ContentSource: Send + Sync {
    /// All calculators in repository order
    fn calculators(&self) -> &[CalculatorItem];

    /// All posts of one locale in repository order
    fn posts(&self, locale: Locale) -> &[BlogPostItem];

    /// Look up a calculator by id
    fn calculator(&self, id: &str) -> Option<&CalculatorItem> {
        self.calculators().iter().find(|c| c.id == id)
    }

    /// Look up a post by locale and slug
    fn post(&self, locale: Locale, slug: &str) -> Option<&BlogPostItem> {
        self.posts(locale).iter().find(|p| p.slug == slug)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// In-memory content repository
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    calculators: Vec<CalculatorItem>,
    posts: BTreeMap<Locale, Vec<BlogPostItem>>,
    calculator_index: FxHashMap<String, usize>,
    post_index: FxHashMap<Locale, FxHashMap<String, usize>>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    calculators: Vec<CalculatorItem>,
    #[serde(default)]
    posts: BTreeMap<String, Vec<BlogPostItem>>,
}

impl Catalog {
    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Parse a catalog from TOML
    ///
    /// ```toml
    /// [[calculators]]
    /// id = "loan-calculator"
    /// name = "Loan Calculator"
    /// category = "Finance"
    /// keywords = ["loan"]
    ///
    /// [[posts.en]]
    /// slug = "loan-guide"
    /// title = "Loan Guide"
    /// category = "Finance"
    /// tags = ["loan"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_catalog_file(file)
    }

    /// Parse a catalog from JSON with the same layout as the TOML form
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_catalog_file(file)
    }

    /// Load a catalog from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "Unsupported catalog format '{}'. Expected .toml or .json.",
                    path.display()
                )))
            }
        };
        tracing::info!(
            target: "affinity::catalog",
            path = %path.display(),
            calculators = catalog.calculators.len(),
            posts_en = catalog.posts(Locale::En).len(),
            posts_tr = catalog.posts(Locale::Tr).len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn from_catalog_file(file: CatalogFile) -> Result<Self> {
        let mut builder = Catalog::builder().calculators(file.calculators);
        for (code, posts) in file.posts {
            builder = builder.posts(Locale::from_str(&code)?, posts);
        }
        builder.build()
    }

    /// Total number of posts across locales
    pub fn post_count(&self) -> usize {
        self.posts.values().map(Vec::len).sum()
    }
}

impl ContentSource for Catalog {
    fn calculators(&self) -> &[CalculatorItem] {
        &self.calculators
    }

    fn posts(&self, locale: Locale) -> &[BlogPostItem] {
        self.posts.get(&locale).map(Vec::as_slice).unwrap_or(&[])
    }

    fn calculator(&self, id: &str) -> Option<&CalculatorItem> {
        self.calculator_index
            .get(id)
            .map(|&i| &self.calculators[i])
    }

    fn post(&self, locale: Locale, slug: &str) -> Option<&BlogPostItem> {
        let idx = *self.post_index.get(&locale)?.get(slug)?;
        self.posts.get(&locale).map(|posts| &posts[idx])
    }
}

// ============================================================================
// CatalogBuilder
// ============================================================================

/// Builder for [`Catalog`]
///
/// Uniqueness of calculator ids and per-locale post slugs is checked in
/// `build`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    calculators: Vec<CalculatorItem>,
    posts: BTreeMap<Locale, Vec<BlogPostItem>>,
}

impl CatalogBuilder {
    /// Append calculators
    pub fn calculators(mut self, calculators: Vec<CalculatorItem>) -> Self {
        self.calculators.extend(calculators);
        self
    }

    /// Append posts for a locale
    pub fn posts(mut self, locale: Locale, posts: Vec<BlogPostItem>) -> Self {
        self.posts.entry(locale).or_default().extend(posts);
        self
    }

    /// Validate and build
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` on a repeated calculator id or a repeated
    /// post slug within one locale.
    pub fn build(self) -> Result<Catalog> {
        let mut calculator_index = FxHashMap::default();
        for (i, calc) in self.calculators.iter().enumerate() {
            if calculator_index.insert(calc.id.clone(), i).is_some() {
                return Err(Error::duplicate("calculator", calc.id.clone()));
            }
        }

        let mut post_index: FxHashMap<Locale, FxHashMap<String, usize>> = FxHashMap::default();
        for (locale, posts) in &self.posts {
            let slugs = post_index.entry(*locale).or_default();
            for (i, post) in posts.iter().enumerate() {
                if slugs.insert(post.slug.clone(), i).is_some() {
                    return Err(Error::duplicate(
                        format!("post ({})", locale),
                        post.slug.clone(),
                    ));
                }
            }
        }

        Ok(Catalog {
            calculators: self.calculators,
            posts: self.posts,
            calculator_index,
            post_index,
        })
    }
}
