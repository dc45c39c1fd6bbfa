//! Logical path validation.
//!
//! Paths are opaque keys chosen by callers (`"a.idx"`, `"layers/3/weights"`).
//! The store never splits or normalizes them; two paths are the same key only
//! if they are byte-for-byte equal.

use crate::error::TypeError;

/// Check that `path` is acceptable as a store key.
///
/// A path must be non-empty and must not contain a NUL byte.
pub fn validate_path(path: &str) -> Result<(), TypeError> {
    if path.is_empty() {
        return Err(TypeError::InvalidPath("path must not be empty".into()));
    }
    if path.contains('\0') {
        return Err(TypeError::InvalidPath(format!(
            "path {path:?} contains a NUL byte"
        )));
    }
    Ok(())
}
