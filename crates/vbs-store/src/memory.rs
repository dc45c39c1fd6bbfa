//! In-memory versioned store.
//!
//! [`InMemoryVersionedStore`] keeps one `BTreeMap<Version, Blob>` history per
//! path inside a `HashMap`, all behind a single `RwLock`. Writers (including
//! the eviction a write triggers) hold the lock exclusively; readers share it.
//! Nothing is persisted; data is lost when the store is dropped.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};
use vbs_types::{validate_path, Version};

use crate::blob::Blob;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::VersionedStore;

/// Retained versions of one path, oldest first.
type History = BTreeMap<Version, Blob>;

/// In-memory, capacity-bounded implementation of [`VersionedStore`].
pub struct InMemoryVersionedStore {
    config: StoreConfig,
    paths: RwLock<HashMap<String, History>>,
}

impl InMemoryVersionedStore {
    /// Create an empty store retaining at most `capacity` versions per path.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(StoreConfig::default().with_capacity(capacity))
    }

    /// Create an empty store from a full configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            paths: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Total number of retained entries across all paths.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_paths()?.values().map(BTreeMap::len).sum())
    }

    /// Returns `true` if no entries are retained.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_paths()?.is_empty())
    }

    /// Number of paths with at least one retained entry.
    pub fn path_count(&self) -> StoreResult<usize> {
        Ok(self.read_paths()?.len())
    }

    /// Sorted list of paths with at least one retained entry.
    pub fn paths(&self) -> StoreResult<Vec<String>> {
        let map = self.read_paths()?;
        let mut paths: Vec<String> = map.keys().cloned().collect();
        paths.sort();
        Ok(paths)
    }

    /// Total payload bytes across all retained entries.
    pub fn total_bytes(&self) -> StoreResult<u64> {
        Ok(self
            .read_paths()?
            .values()
            .flat_map(BTreeMap::values)
            .map(|blob| blob.len() as u64)
            .sum())
    }

    /// Drop every entry of every path.
    pub fn clear(&self) -> StoreResult<()> {
        self.write_paths()?.clear();
        Ok(())
    }

    /// Drop the whole history of `path`. Returns how many entries it held.
    pub fn remove_path(&self, path: &str) -> StoreResult<usize> {
        let removed = self
            .write_paths()?
            .remove(path)
            .map_or(0, |history| history.len());
        if removed > 0 {
            debug!(path, removed, "removed path history");
        }
        Ok(removed)
    }

    fn read_paths(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, History>>> {
        self.paths
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write_paths(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, History>>> {
        self.paths
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    /// Pop the smallest versions until `history` fits in `capacity`.
    fn evict_oldest(&self, path: &str, history: &mut History) -> usize {
        let mut evicted = 0;
        while history.len() > self.config.capacity {
            let Some((version, _)) = history.pop_first() else {
                break;
            };
            debug!(path, %version, "evicted version");
            evicted += 1;
        }
        evicted
    }
}

impl Default for InMemoryVersionedStore {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}

impl VersionedStore for InMemoryVersionedStore {
    fn create(&self, version: &str, path: &str, blob: &Blob) -> StoreResult<()> {
        let version = Version::parse(version).map_err(StoreError::InvalidVersion)?;
        validate_path(path).map_err(StoreError::InvalidPath)?;

        let mut map = self.write_paths()?;
        if let Some(limit) = self.config.max_paths {
            if !map.contains_key(path) && map.len() >= limit {
                return Err(StoreError::PathLimitExceeded { limit });
            }
        }

        let history = map.entry(path.to_string()).or_default();
        if history.contains_key(&version) {
            return Err(StoreError::DuplicateVersion {
                path: path.to_string(),
                version,
            });
        }

        history.insert(version, blob.clone());
        let evicted = self.evict_oldest(path, history);
        let retained = history.len();
        if retained == 0 {
            map.remove(path);
        }

        debug!(path, %version, evicted, retained, "created version");
        Ok(())
    }

    fn get_into(&self, version: &str, path: &str, out: &mut Blob) -> StoreResult<()> {
        let version = Version::parse(version).map_err(StoreError::InvalidVersion)?;
        let map = self.read_paths()?;
        let blob = map
            .get(path)
            .and_then(|history| history.get(&version))
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_string(),
                version,
            })?;
        trace!(path, %version, len = blob.len(), "read version");
        out.clone_from(blob);
        Ok(())
    }

    fn contains(&self, version: &str, path: &str) -> StoreResult<bool> {
        let version = Version::parse(version).map_err(StoreError::InvalidVersion)?;
        let map = self.read_paths()?;
        Ok(map
            .get(path)
            .is_some_and(|history| history.contains_key(&version)))
    }

    fn versions(&self, path: &str) -> StoreResult<Vec<Version>> {
        let map = self.read_paths()?;
        Ok(map
            .get(path)
            .map(|history| history.keys().copied().collect())
            .unwrap_or_default())
    }

    fn latest(&self, path: &str) -> StoreResult<Option<(Version, Blob)>> {
        let map = self.read_paths()?;
        Ok(map
            .get(path)
            .and_then(|history| history.last_key_value())
            .map(|(version, blob)| (*version, blob.clone())))
    }

    fn capacity(&self) -> usize {
        self.config.capacity
    }
}

impl std::fmt::Debug for InMemoryVersionedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InMemoryVersionedStore");
        s.field("capacity", &self.config.capacity);
        match self.paths.read() {
            Ok(map) => {
                let entries: usize = map.values().map(BTreeMap::len).sum();
                s.field("path_count", &map.len())
                    .field("entry_count", &entries);
            }
            Err(_) => {
                s.field("paths", &"<poisoned>");
            }
        }
        s.finish()
    }
}
