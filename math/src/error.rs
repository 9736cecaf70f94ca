use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = RationalError> = core::result::Result<T, E>;

/// Errors produced by rational construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RationalError {
    #[error("division by zero")]
    DivisionByZero,
}
