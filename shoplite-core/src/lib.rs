/// Boxed error type used across the repository seams. Storage
/// implementations propagate their underlying errors through this without
/// translation; the lifecycle layer decides what a caller gets to see.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error taxonomy for the order core. Each variant carries the
/// client-facing message; internal errors are logged in full at the HTTP
/// boundary and replaced with a generic message there.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Wrap a storage-layer failure. The detail stays on the variant for
    /// logging; it is never emitted to a client verbatim.
    pub fn storage(err: BoxError) -> Self {
        Self::Internal(err.to_string())
    }
}
