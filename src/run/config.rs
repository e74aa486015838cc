use serde::Serialize;

use crate::kernel::error::{KernelError, KernelResult};
use crate::math::scalar::Scalar;

/// Buffer length used by the driver.
pub const DEFAULT_LEN: usize = 512;
/// Back-to-back transform passes made by the integer driver.
pub const DEFAULT_REPETITIONS: usize = 100_000;
/// Back-to-back transform passes made by the `f32` variant.
pub const FLOAT_REPETITIONS: usize = 5_000;

/// Parameters of one kernel run.
///
/// # Fields
/// - `len`         — number of elements in both buffers
/// - `x_fill`      — value every input element is initialized to
/// - `y_fill`      — sentinel every output element is initialized to
/// - `alpha`       — scalar coefficient of the transform
/// - `repetitions` — transform passes before validation; must be at least 1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KernelConfig<T> {
    pub len: usize,
    pub x_fill: T,
    pub y_fill: T,
    pub alpha: T,
    pub repetitions: usize,
}

impl<T: Scalar> KernelConfig<T> {
    /// The value every output element must hold after a transform pass.
    pub fn expected(&self) -> T {
        T::scale(self.alpha, self.x_fill)
    }

    pub fn validate(&self) -> KernelResult<()> {
        if self.repetitions == 0 {
            return Err(KernelError::InvalidConfig(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KernelConfig<i32> {
    fn default() -> Self {
        KernelConfig {
            len: DEFAULT_LEN,
            x_fill: 450,
            y_fill: -1,
            alpha: 2,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl KernelConfig<f32> {
    /// Single-precision run: zeroed output, 5,000 passes.
    pub fn float_default() -> Self {
        KernelConfig {
            len: DEFAULT_LEN,
            x_fill: 450.0,
            y_fill: f32::ZERO,
            alpha: 2.0,
            repetitions: FLOAT_REPETITIONS,
        }
    }
}
