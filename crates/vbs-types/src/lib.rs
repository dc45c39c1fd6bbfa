//! Foundation types for the versioned blob store (VBS).
//!
//! Every other VBS crate depends on `vbs-types`. Identifiers arrive from
//! callers as strings; this crate parses them once at the boundary so the
//! store only ever compares typed values.
//!
//! # Key Types
//!
//! - [`Version`] — Totally ordered numeric version identifier
//! - [`validate_path`] — Acceptance check for logical blob paths

pub mod error;
pub mod path;
pub mod version;

pub use error::TypeError;
pub use path::validate_path;
pub use version::Version;
