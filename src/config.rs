//! Parse configuration.

use crate::error::RepodumpError;
use serde::{Deserialize, Serialize};
use std::{fs::read_to_string, path::Path};

/// Default bound on repeating-value indices. Wide enough for the widest
/// repeating attributes real repositories ship, small enough that a hostile
/// index token cannot drive allocation.
pub const DEFAULT_MAX_REPEATING_INDEX: usize = 4096;

/// Tunable bounds for a parse invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Repeating values whose index exceeds this are dropped (with a
    /// warning) instead of growing the sequence.
    pub max_repeating_index: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            max_repeating_index: DEFAULT_MAX_REPEATING_INDEX,
        }
    }
}

impl ParseConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults; a present but malformed file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ParseConfig, RepodumpError> {
        let path = path.as_ref();
        tracing::debug!("Attempting to read parse config from: {:?}", path);
        if !path.exists() {
            tracing::debug!("Config file not found, using defaults.");
            return Ok(ParseConfig::default());
        }
        let content = read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
