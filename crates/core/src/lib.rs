//! Core types for the affinity recommendation engine
//!
//! This crate defines the foundational types used by the ranking crate:
//! - CalculatorItem / BlogPostItem: read-only content records
//! - Locale: blog edition partition key
//! - EngineConfig / ScoringWeights: `affinity.toml` configuration
//! - Error: error type for loading data and configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod content;
pub mod error;
pub mod locale;

pub use config::{EngineConfig, MatcherKind, ScoringWeights, CONFIG_FILE_NAME};
pub use content::{BlogPostItem, CalculatorItem};
pub use error::{Error, Result};
pub use locale::Locale;
