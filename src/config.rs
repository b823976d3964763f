//! Configuration for traversal policy and timing thresholds
//!
//! Read from TOML text or a file; every field has a default, so an empty
//! document is a valid config.
//!
//! ```toml
//! [path]
//! policy = "truthy"          # or "presence_only" (default)
//!
//! [timing]
//! min_duration_ms = 250      # omit to report every timed call
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{LangError, Result};
use crate::path::TraversalPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LangConfig {
    /// Path traversal settings
    #[serde(default)]
    pub path: PathConfig,

    /// Timing report settings
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PathConfig {
    #[serde(default)]
    pub policy: TraversalPolicy,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Only report durations above this many milliseconds
    pub min_duration_ms: Option<u64>,
}

impl LangConfig {
    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist.
    /// Returns error if file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn policy(&self) -> TraversalPolicy {
        self.path.policy
    }

    pub fn min_duration(&self) -> Option<Duration> {
        self.timing.min_duration_ms.map(Duration::from_millis)
    }
}
