//! Element-wise transform primitives.
//!
//! Every helper here writes into a caller-owned output buffer in index order
//! and takes the per-element function as a generic `Fn`, so each call site
//! is monomorphized.

use crate::kernel::error::{KernelError, KernelResult};
use crate::math::buffer::Buffer;

/// `y[i] = f(x[i])` for every index, overwriting `y` in place.
///
/// # Panics
/// Panics if `x` and `y` differ in length. Use [`try_transform_into`] to get
/// an error instead.
pub fn transform_into<T, F>(x: &Buffer<T>, y: &mut Buffer<T>, f: F)
where
    T: Copy,
    F: Fn(T) -> T,
{
    assert_eq!(
        x.len(),
        y.len(),
        "input and output buffers must have equal length"
    );
    for (out, &value) in y.as_mut_slice().iter_mut().zip(x.as_slice()) {
        *out = f(value);
    }
}

/// Checked form of [`transform_into`]; `y` is untouched on error.
pub fn try_transform_into<T, F>(x: &Buffer<T>, y: &mut Buffer<T>, f: F) -> KernelResult<()>
where
    T: Copy,
    F: Fn(T) -> T,
{
    if x.len() != y.len() {
        return Err(KernelError::LengthMismatch { input: x.len(), output: y.len() });
    }
    transform_into(x, y, f);
    Ok(())
}

/// `out[i] = f(a[i], b[i])` for every index, overwriting `out` in place.
///
/// # Panics
/// Panics unless all three buffers have the same length.
pub fn zip_into<T, F>(a: &Buffer<T>, b: &Buffer<T>, out: &mut Buffer<T>, f: F)
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    assert!(
        a.len() == b.len() && b.len() == out.len(),
        "zip buffers must have equal length"
    );
    for ((o, &lhs), &rhs) in out.as_mut_slice().iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
        *o = f(lhs, rhs);
    }
}
