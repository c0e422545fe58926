use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),
    #[error(transparent)]
    Core(#[from] prodgen_core::Error),
}
