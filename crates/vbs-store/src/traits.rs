use vbs_types::Version;

use crate::blob::Blob;
use crate::error::StoreResult;

/// Bounded per-path version history of blobs.
///
/// All implementations must satisfy these invariants:
/// - Within a path, no two retained entries share a version.
/// - A path never retains more than [`capacity`](Self::capacity) versions.
///   Inserting past capacity evicts the numerically smallest versions of
///   that path, and only that path.
/// - An evicted version is a miss, indistinguishable from one never written.
/// - Payloads are copied on the way in and on the way out.
/// - Reads never mutate state or reorder entries.
///
/// Versions arrive as text and are parsed with [`Version::parse`]; an
/// unparseable version fails with `StoreError::InvalidVersion` before any
/// lookup happens.
pub trait VersionedStore: Send + Sync {
    /// Register `blob` as `version` of `path`.
    ///
    /// Fails with `DuplicateVersion` if the pair is already retained, leaving
    /// the store untouched. On success the entry may already be gone if it
    /// was the oldest of an over-full history (always so at capacity zero).
    fn create(&self, version: &str, path: &str, blob: &Blob) -> StoreResult<()>;

    /// Copy the blob stored as `version` of `path` into `out`.
    ///
    /// `*out` is replaced wholesale, so it takes the stored blob's length.
    /// On any error `out` is left as it was.
    fn get_into(&self, version: &str, path: &str, out: &mut Blob) -> StoreResult<()>;

    /// Return a copy of the blob stored as `version` of `path`.
    fn get(&self, version: &str, path: &str) -> StoreResult<Blob> {
        let mut out = Blob::default();
        self.get_into(version, path, &mut out)?;
        Ok(out)
    }

    /// Check whether `version` of `path` is currently retained.
    fn contains(&self, version: &str, path: &str) -> StoreResult<bool>;

    /// Retained versions of `path` in ascending order. Empty for an
    /// unknown path.
    fn versions(&self, path: &str) -> StoreResult<Vec<Version>>;

    /// The newest retained entry of `path`, if any.
    fn latest(&self, path: &str) -> StoreResult<Option<(Version, Blob)>>;

    /// Maximum number of versions retained per path.
    fn capacity(&self) -> usize;
}
