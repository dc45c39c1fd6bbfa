use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Configuration for an [`InMemoryVersionedStore`](crate::InMemoryVersionedStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of versions retained per path. Zero is allowed: every
    /// write is accepted and evicted at once, so every read misses.
    pub capacity: usize,
    /// Maximum number of distinct paths. `None` means unbounded.
    pub max_paths: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: 1,
            max_paths: None,
        }
    }
}

impl StoreConfig {
    /// Set the per-path version capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Bound the number of distinct paths.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = Some(max_paths);
        self
    }

    /// Parse a TOML document. Missing keys take their defaults.
    ///
    /// ```toml
    /// capacity = 4
    /// max_paths = 1024
    /// ```
    pub fn from_toml_str(text: &str) -> StoreResult<Self> {
        toml::from_str(text).map_err(|e| StoreError::Config(e.to_string()))
    }
}
