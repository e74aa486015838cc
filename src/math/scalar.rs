use std::fmt::{Debug, Display};

use serde::Serialize;

/// Element types the transform kernel can operate on.
///
/// - `i32` — fixed-width arithmetic: `scale` wraps on overflow and `matches`
///   is exact equality.
/// - `f32` — IEEE arithmetic: `matches` rejects only values more than
///   [`F32_TOLERANCE`] away from the expected one. A `NaN` difference is
///   never greater than the tolerance, so it matches.
pub trait Scalar: Copy + PartialEq + Debug + Display + Serialize {
    /// Additive identity, used to zero-fill buffers.
    const ZERO: Self;

    /// `alpha * x` under this type's arithmetic.
    fn scale(alpha: Self, x: Self) -> Self;

    /// Whether `actual` is an acceptable result where `expected` was computed.
    fn matches(actual: Self, expected: Self) -> bool;
}

/// Absolute tolerance used when validating `f32` results.
pub const F32_TOLERANCE: f32 = 0.01;

impl Scalar for i32 {
    const ZERO: Self = 0;

    fn scale(alpha: Self, x: Self) -> Self {
        alpha.wrapping_mul(x)
    }

    fn matches(actual: Self, expected: Self) -> bool {
        actual == expected
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    fn scale(alpha: Self, x: Self) -> Self {
        alpha * x
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn matches(actual: Self, expected: Self) -> bool {
        !((actual - expected).abs() > F32_TOLERANCE)
    }
}
