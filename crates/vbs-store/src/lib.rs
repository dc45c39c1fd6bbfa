//! Bounded-capacity versioned blob storage.
//!
//! This crate keeps, for every logical path, the most recent `capacity`
//! versions of a fixed-length byte payload. Older versions are evicted as
//! newer ones arrive; lookups of evicted versions miss exactly like lookups
//! of versions that were never written.
//!
//! # Types
//!
//! - [`Blob`] -- fixed-length, zero-initialized byte payload
//! - [`StoreConfig`] -- capacity and path-limit settings
//!
//! # Storage Backends
//!
//! All backends implement the [`VersionedStore`] trait:
//!
//! - [`InMemoryVersionedStore`] -- `HashMap` of per-path `BTreeMap` histories
//!
//! # Design Rules
//!
//! 1. Within a path, a version is stored at most once; re-creating it fails.
//! 2. A path never retains more than `capacity` versions; the numerically
//!    smallest versions go first.
//! 3. Eviction is per path. Writing to one path never disturbs another.
//! 4. The store copies payloads in and out. Callers keep full ownership of
//!    the blobs they pass and receive.
//! 5. Reads never reorder entries. Recency is version order, not access order.
//! 6. Errors are returned to the caller, never logged or retried.

pub mod blob;
pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use blob::Blob;
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryVersionedStore;
pub use traits::VersionedStore;
pub use vbs_types::Version;
