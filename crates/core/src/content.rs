//! Content model consumed by the recommendation engine
//!
//! This module defines the read-only records the engine ranks:
//! - CalculatorItem: a calculator widget, identified by `id`
//! - BlogPostItem: a blog article, identified by `slug` within its locale
//!
//! Records are built by the surrounding application (or loaded from data
//! files) and never mutated by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// CalculatorItem
// ============================================================================

/// A calculator widget in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorItem {
    /// Stable unique identifier (e.g. "loan-calculator")
    pub id: String,

    /// Display name
    pub name: String,

    /// Display description
    #[serde(default)]
    pub description: String,

    /// Topical category, compared case-sensitively
    pub category: String,

    /// Matching keywords; order is irrelevant to scoring
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CalculatorItem {
    /// Create a calculator with id, name and category
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        CalculatorItem {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            keywords: vec![],
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

// ============================================================================
// BlogPostItem
// ============================================================================

/// A blog article in one locale edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostItem {
    /// Identifier, unique within its locale
    pub slug: String,

    /// Display title; whitespace-tokenized for word overlap
    pub title: String,

    /// Display description; whitespace-tokenized for word overlap
    #[serde(default)]
    pub description: String,

    /// Topical category, compared case-sensitively
    pub category: String,

    /// Tags, matched case-insensitively
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date. Carried for the page layer; not used in ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl BlogPostItem {
    /// Create a post with slug, title and category
    pub fn new(slug: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        BlogPostItem {
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            tags: vec![],
            date: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set publication date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
