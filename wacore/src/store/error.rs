use thiserror::Error;

/// Failure reported by a [`ChatStore`](super::ChatStore) backend.
///
/// Backends wrap their own error type; callers only propagate it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, StoreError>;
