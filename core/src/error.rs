use thiserror::Error;

/// Result type specialized for reconstruction operations.
pub type ReconstructResult<T> = std::result::Result<T, ReconstructError>;

/// Result type specialized for share ingestion.
pub type IngestResult<T> = std::result::Result<T, IngestError>;

/// Errors that can arise while searching for a consistent reconstruction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    #[error("invalid threshold: {0}")]
    InvalidThreshold(usize),
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("no subset of shares yields a consistent integer secret")]
    NoConsistentReconstruction,
}

/// Errors produced while decoding share documents and value literals.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("unsupported base {0}, expected 2..=36")]
    UnsupportedBase(u32),
    #[error("share {index} is missing or has a malformed `{field}` field")]
    MissingField { index: usize, field: &'static str },
    #[error("document is missing or has a malformed `{0}` key")]
    MissingKey(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
