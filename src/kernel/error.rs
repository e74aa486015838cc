use serde::Serialize;
use thiserror::Error;

use crate::math::scalar::Scalar;

/// The first output element that failed validation.
///
/// This never propagates as an `Err` out of the kernel: a mismatch turns the
/// outcome into [`Outcome::Fail`](crate::kernel::Outcome::Fail) and is kept
/// alongside it for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("element {index} is {actual}, expected {expected}")]
pub struct ValidationMismatch<T: Scalar> {
    pub index: usize,
    pub expected: T,
    pub actual: T,
}

/// Errors raised by the checked kernel entry points.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("buffer length mismatch: input has {input} elements, output has {output}")]
    LengthMismatch { input: usize, output: usize },

    #[error("invalid kernel config: {0}")]
    InvalidConfig(String),

    #[error("failed to encode run report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type KernelResult<T> = Result<T, KernelError>;
