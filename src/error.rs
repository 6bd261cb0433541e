use thiserror::Error;

/// Faults surfaced by the storage layer and the repositories built on it.
///
/// Read paths never produce `Unavailable`; a missing storage context degrades
/// to an empty collection and only writes are refused.
#[derive(Debug, Error)]
pub enum Error {
    #[error("storage is not available in this context")]
    Unavailable,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("malformed record in storage: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
