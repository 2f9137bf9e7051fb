//! Manual affinity table
//!
//! Editorially curated mapping from blog post slug to an ordered list of
//! calculator ids. Entries keep file order: the inverse lookup
//! (calculator → posts) walks the table front to back, so earlier entries
//! rank first.
//!
//! References are not checked against any catalog here; the ranker skips
//! ids and slugs that do not resolve.

use affinity_core::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One editorial entry: a post and the calculators it should surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityEntry {
    /// Blog post slug
    pub post: String,
    /// Calculator ids in editorial priority order
    #[serde(default)]
    pub calculators: Vec<String>,
}

impl AffinityEntry {
    /// Create an entry
    pub fn new<I, S>(post: impl Into<String>, calculators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AffinityEntry {
            post: post.into(),
            calculators: calculators.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct AffinityFile {
    #[serde(default)]
    entries: Vec<AffinityEntry>,
}

/// Ordered post → calculators mapping
#[derive(Debug, Clone, Default)]
pub struct AffinityTable {
    entries: Vec<AffinityEntry>,
    by_post: FxHashMap<String, usize>,
}

impl AffinityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateId` if two entries name the same post.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = AffinityEntry>,
    {
        let mut table = AffinityTable::new();
        for entry in entries {
            if table.by_post.contains_key(&entry.post) {
                return Err(Error::duplicate("affinity post", entry.post));
            }
            table.by_post.insert(entry.post.clone(), table.entries.len());
            table.entries.push(entry);
        }
        Ok(table)
    }

    /// Parse a table from TOML (`[[entries]]` with `post` and `calculators`)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: AffinityFile = toml::from_str(content)?;
        Self::from_entries(file.entries)
    }

    /// Parse a table from JSON (`{"entries": [...]}`)
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: AffinityFile = serde_json::from_str(content)?;
        Self::from_entries(file.entries)
    }

    /// Load a table from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(Error::InvalidConfig(format!(
                    "Unsupported affinity table format '{}'. Expected .toml or .json.",
                    path.display()
                )))
            }
        };
        tracing::info!(
            target: "affinity::catalog",
            path = %path.display(),
            entries = table.len(),
            "Affinity table loaded"
        );
        Ok(table)
    }

    /// Calculator ids declared for a post, in editorial order
    ///
    /// Returns an empty slice for posts without an entry.
    pub fn calculators_for(&self, post_slug: &str) -> &[String] {
        self.by_post
            .get(post_slug)
            .map(|&i| self.entries[i].calculators.as_slice())
            .unwrap_or(&[])
    }

    /// Posts whose entry lists `calculator_id`, in table order
    pub fn posts_for<'a>(&'a self, calculator_id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.calculators.iter().any(|c| c == calculator_id))
            .map(|e| e.post.as_str())
    }

    /// All entries in table order
    pub fn entries(&self) -> &[AffinityEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
