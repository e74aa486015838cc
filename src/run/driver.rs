use std::time::Instant;

use tracing::{debug, warn};

use crate::kernel::error::KernelResult;
use crate::math::scalar::Scalar;
use crate::run::config::KernelConfig;
use crate::run::report::RunReport;
use crate::run::workspace::Initialized;

/// Executes one full run: initialize, `config.repetitions` transform passes,
/// then validation against `config.expected()`.
///
/// A failed validation is reported through `RunReport::outcome`, not as an
/// error. The only error is an invalid `config`.
pub fn run<T: Scalar>(config: &KernelConfig<T>) -> KernelResult<RunReport<T>> {
    config.validate()?;

    let workspace = Initialized::from_config(config);

    let t_start = Instant::now();
    let transformed = workspace
        .transform(config.alpha)
        .transform_repeated(config.alpha, config.repetitions - 1);
    let elapsed_ms = u64::try_from(t_start.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(passes = transformed.passes(), elapsed_ms, "transform passes complete");

    let validation = transformed.validate(config.expected());
    if let Some(ref mismatch) = validation.mismatch {
        warn!(
            index = mismatch.index,
            expected = %mismatch.expected,
            actual = %mismatch.actual,
            "validation failed"
        );
    }

    Ok(RunReport {
        config: config.clone(),
        outcome: validation.outcome,
        mismatch: validation.mismatch,
        passes: validation.passes,
        elapsed_ms,
    })
}
