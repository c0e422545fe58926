use thiserror::Error;

/// Core error type shared across Prodgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Store failure while creating, loading, or deleting records.
    #[error("store error: {0}")]
    Store(String),
    /// The catalog schema violates internal invariants.
    #[error("invalid catalog schema: {0}")]
    InvalidSchema(String),
}

/// Convenience alias for results returned by Prodgen crates.
pub type Result<T> = std::result::Result<T, Error>;
