//! Stemmer configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable selecting the step-2 rule table.
pub const ENV_RULES: &str = "STEMSAGE_RULES";
/// Environment variable holding the memo cache capacity (0 disables it).
pub const ENV_CACHE_SIZE: &str = "STEMSAGE_CACHE_SIZE";

/// Default number of memoized stems kept by the cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;
/// Largest accepted cache capacity.
pub const MAX_CACHE_CAPACITY: usize = 1 << 20;

/// Which step-2 rule table the stemmer applies.
///
/// `Extended` carries two rules that are not in the 1980 paper
/// (`bli -> ble` and `logi -> log`). `Published` drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleVariant {
    #[default]
    Extended,
    Published,
}

impl RuleVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleVariant::Extended => "extended",
            RuleVariant::Published => "published",
        }
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extended" => Ok(RuleVariant::Extended),
            "published" => Ok(RuleVariant::Published),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }
}

/// Top-level stemmer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Step-2 rule table.
    pub variant: RuleVariant,
    /// Memo cache capacity. Zero means no cache.
    pub cache_capacity: usize,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            variant: RuleVariant::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl StemmerConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Unset variables fall back to defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse a JSON document, e.g. `{"variant": "published", "cache_capacity": 0}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the stemmer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity > MAX_CACHE_CAPACITY {
            return Err(Error::Config(format!(
                "cache_capacity {} exceeds the maximum of {}",
                self.cache_capacity, MAX_CACHE_CAPACITY
            )));
        }
        Ok(())
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_RULES) {
            config.variant = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_CACHE_SIZE) {
            config.cache_capacity = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a non-negative integer, got {:?}",
                    ENV_CACHE_SIZE, raw
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}
