use serde::Serialize;

use crate::kernel::error::{KernelResult, ValidationMismatch};
use crate::kernel::outcome::Outcome;
use crate::math::scalar::Scalar;
use crate::run::config::KernelConfig;

/// Summary of one completed kernel run, as returned by [`run`](crate::run::run).
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<T: Scalar> {
    /// Parameters the run was started with.
    pub config: KernelConfig<T>,
    pub outcome: Outcome,
    /// First failing element; `None` on success.
    pub mismatch: Option<ValidationMismatch<T>>,
    /// Transform passes actually executed.
    pub passes: usize,
    /// Wall-clock time spent in the transform passes, in milliseconds.
    pub elapsed_ms: u64,
}

impl<T: Scalar> RunReport<T> {
    /// Compact single-line JSON, suitable for a log field.
    pub fn to_json(&self) -> KernelResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
