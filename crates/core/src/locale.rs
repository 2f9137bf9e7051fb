//! Locale enumeration
//!
//! The blog is maintained as independent language editions. A locale is a
//! partition key: posts are only ever matched against posts of the same
//! locale, never across editions.
//!
//! | Locale | Code | Edition |
//! |--------|------|---------|
//! | En | `en` | English |
//! | Tr | `tr` | Turkish |

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A blog language edition
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    /// English edition
    #[default]
    En,
    /// Turkish edition
    Tr,
}

impl Locale {
    /// All locales (for iteration)
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// Get all locales as a slice
    pub fn all() -> &'static [Locale] {
        &Self::ALL
    }

    /// Short code used in data files and URLs
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Human-readable name of the edition
    pub const fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Tr => "Turkish",
        }
    }

    /// Parse from short code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "tr" => Some(Locale::Tr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| Error::InvalidLocale(s.to_string()))
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}
