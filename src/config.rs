//! Configuration Module
//!
//! Handles loading map configuration from environment variables.

use std::env;

/// Default capacity used when nothing else is configured.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Map configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    /// Maximum number of entries the map can hold
    pub max_entries: usize,
}

impl MapConfig {
    /// Creates a new MapConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum map entries (default: 1000)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
        }
    }

    /// Creates a config with an explicit capacity.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self { max_entries }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}
