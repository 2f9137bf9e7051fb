//! Engine configuration via `affinity.toml`
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock scoring behavior. To tune weights, edit the file and rebuild the
//! engine.

use crate::error::{Error, Result};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by the host application.
pub const CONFIG_FILE_NAME: &str = "affinity.toml";

/// Keyword matcher used by the calculator-to-post scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    /// Case-insensitive bidirectional substring test
    Substring,
    /// Case-insensitive token-set containment
    TokenSet,
}

// ============================================================================
// ScoringWeights
// ============================================================================

/// Points awarded by each relevance signal.
///
/// Persisted under the `[weights]` section of `affinity.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Calculator and post share a category
    pub calc_category: u32,
    /// Per post tag matching a calculator keyword
    pub calc_tag: u32,
    /// Two posts share a category
    pub post_category: u32,
    /// Per tag shared by two posts
    pub post_tag: u32,
    /// Per significant word shared by two titles
    pub title_word: u32,
    /// Per significant word shared by two descriptions
    pub description_word: u32,
    /// Minimum length in characters for a word to be significant
    pub min_word_len: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            calc_category: 5,
            calc_tag: 3,
            post_category: 10,
            post_tag: 5,
            title_word: 2,
            description_word: 1,
            min_word_len: 4,
        }
    }
}

// ============================================================================
// EngineConfig
// ============================================================================

/// Engine configuration loaded from `affinity.toml`.
///
/// # Example
///
/// ```toml
/// default_locale = "en"
/// matcher = "substring"
/// normalize_words = false
///
/// [weights]
/// post_category = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Locale whose posts are recommended for calculators.
    #[serde(default)]
    pub default_locale: Locale,
    /// Keyword matcher: `"substring"` or `"token-set"`.
    #[serde(default = "default_matcher_str")]
    pub matcher: String,
    /// Strip punctuation from word edges before comparing titles/descriptions.
    #[serde(default)]
    pub normalize_words: bool,
    /// Signal weights.
    #[serde(default)]
    pub weights: ScoringWeights,
}

fn default_matcher_str() -> String {
    "substring".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            matcher: default_matcher_str(),
            normalize_words: false,
            weights: ScoringWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Parse the matcher string into a `MatcherKind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"substring"` or `"token-set"`.
    pub fn matcher_kind(&self) -> Result<MatcherKind> {
        match self.matcher.as_str() {
            "substring" => Ok(MatcherKind::Substring),
            "token-set" => Ok(MatcherKind::TokenSet),
            other => Err(Error::InvalidConfig(format!(
                "Invalid matcher '{}' in affinity.toml. Expected \"substring\" or \"token-set\".",
                other
            ))),
        }
    }

    /// Check every field that can parse but still be unusable.
    pub fn validate(&self) -> Result<()> {
        self.matcher_kind()?;
        if self.weights.min_word_len == 0 {
            return Err(Error::InvalidConfig(
                "weights.min_word_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Affinity recommendation engine configuration
#
# Locale whose posts are recommended on calculator pages: "en" or "tr"
default_locale = "en"

# Keyword matcher for calculator keywords vs post tags:
#   "substring" = bidirectional substring test ("mortgage" ~ "mortgage-calculator")
#   "token-set" = split on punctuation, one token set must contain the other
matcher = "substring"

# Strip leading/trailing punctuation before comparing title and description
# words, so "growth." matches "growth" (default: false)
normalize_words = false

[weights]
calc_category = 5
calc_tag = 3
post_category = 10
post_tag = 5
title_word = 2
description_word = 1
# Words shorter than this many characters are ignored
min_word_len = 4
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            Error::Parse(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
