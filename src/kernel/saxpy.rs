use crate::kernel::error::ValidationMismatch;
use crate::kernel::outcome::Outcome;
use crate::kernel::transform::transform_into;
use crate::math::buffer::Buffer;
use crate::math::scalar::Scalar;

/// Resets both buffers: every `x[i]` to `x_fill`, every `y[i]` to `y_fill`.
pub fn initialize<T: Scalar>(x: &mut Buffer<T>, y: &mut Buffer<T>, x_fill: T, y_fill: T) {
    x.fill(x_fill);
    y.fill(y_fill);
}

/// One transform pass: `y[i] = alpha * x[i]` for every index.
///
/// Idempotent for fixed `alpha` and `x`. Integer products wrap on overflow.
///
/// # Panics
/// Panics if `x` and `y` differ in length.
pub fn saxpy<T: Scalar>(alpha: T, x: &Buffer<T>, y: &mut Buffer<T>) {
    transform_into(x, y, |v| T::scale(alpha, v));
}

/// First index whose element does not match `expected`, if any.
pub fn find_mismatch<T: Scalar>(y: &Buffer<T>, expected: T) -> Option<ValidationMismatch<T>> {
    y.iter()
        .position(|&actual| !T::matches(actual, expected))
        .map(|index| ValidationMismatch { index, expected, actual: y[index] })
}

/// `Success` iff every element of `y` matches `expected`.
/// An empty buffer is valid.
pub fn validate<T: Scalar>(y: &Buffer<T>, expected: T) -> Outcome {
    Outcome::from_valid(find_mismatch(y, expected).is_none())
}

/// First index where `y[i]` does not match `alpha * x[i]`, if any.
///
/// # Panics
/// Panics if `x` and `y` differ in length.
pub fn find_mismatch_against<T: Scalar>(
    alpha: T,
    x: &Buffer<T>,
    y: &Buffer<T>,
) -> Option<ValidationMismatch<T>> {
    assert_eq!(x.len(), y.len(), "input and output buffers must have equal length");
    x.iter()
        .zip(y.iter())
        .enumerate()
        .find_map(|(index, (&input, &actual))| {
            let expected = T::scale(alpha, input);
            (!T::matches(actual, expected))
                .then_some(ValidationMismatch { index, expected, actual })
        })
}

/// `Success` iff every `y[i]` matches `alpha * x[i]`.
pub fn validate_against<T: Scalar>(alpha: T, x: &Buffer<T>, y: &Buffer<T>) -> Outcome {
    Outcome::from_valid(find_mismatch_against(alpha, x, y).is_none())
}
