use odekit_core::GridError;
use thiserror::Error;

use crate::fixed_step::Method;

/// Errors that can occur when comparing methods or analyzing errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{0} was not solved on the same grid as the other methods")]
    GridMismatch(Method),

    #[error("no trajectory for reference method {0}")]
    MissingReference(Method),

    #[error("no errors to summarize")]
    EmptyErrors,
}
