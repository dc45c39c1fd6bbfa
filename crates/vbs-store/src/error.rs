use vbs_types::{TypeError, Version};

/// Errors from versioned store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The `(path, version)` pair is already among the retained entries.
    #[error("version {version} already exists for {path}")]
    DuplicateVersion { path: String, version: Version },

    /// The `(path, version)` pair is not retained. Unknown paths, unknown
    /// versions and evicted versions all report this.
    #[error("version {version} not found for {path}")]
    NotFound { path: String, version: Version },

    /// Blob access outside its fixed length.
    #[error("index {index} out of range for blob of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The version identifier could not be parsed.
    #[error(transparent)]
    InvalidVersion(TypeError),

    /// The path is not an acceptable store key.
    #[error(transparent)]
    InvalidPath(TypeError),

    /// Creating a new path would exceed the configured path limit.
    #[error("path limit of {limit} reached")]
    PathLimitExceeded { limit: usize },

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// The store configuration could not be loaded.
    #[error("invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns `true` for a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for a rejected duplicate write.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateVersion { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
