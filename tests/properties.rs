//! Property-based tests for the transform kernel.

use proptest::prelude::*;
use ferrite_saxpy::kernel::saxpy::find_mismatch;
use ferrite_saxpy::{saxpy, validate, validate_against, Buffer, Outcome};

fn buffer_strategy(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_len)
}

proptest! {
    // Property: a second pass with the same inputs changes nothing
    #[test]
    fn saxpy_is_idempotent(alpha in any::<i32>(), data in buffer_strategy(256)) {
        let x = Buffer::from_data(data);
        let mut y = Buffer::filled(x.len(), -1);
        saxpy(alpha, &x, &mut y);
        let once = y.clone();
        saxpy(alpha, &x, &mut y);
        prop_assert_eq!(once, y);
    }

    // Property: products wrap like fixed-width integer arithmetic
    #[test]
    fn saxpy_wraps(alpha in any::<i32>(), data in buffer_strategy(64)) {
        let x = Buffer::from_data(data);
        let mut y = Buffer::filled(x.len(), 0);
        saxpy(alpha, &x, &mut y);
        for (out, input) in y.iter().zip(x.iter()) {
            prop_assert_eq!(*out, alpha.wrapping_mul(*input));
        }
        prop_assert_eq!(validate_against(alpha, &x, &y), Outcome::Success);
    }

    // Property: a constant buffer validates against its own constant
    #[test]
    fn constant_buffer_validates(value in any::<i32>(), len in 0usize..512) {
        let y = Buffer::filled(len, value);
        prop_assert_eq!(validate(&y, value), Outcome::Success);
    }

    // Property: the reported index is the first corrupted one
    #[test]
    fn mismatch_is_first_corruption(
        len in 2usize..512,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..8)
    ) {
        let mut y = Buffer::filled(len, 900);
        let indices: Vec<usize> = picks.iter().map(|p| p.index(len)).collect();
        for &i in &indices {
            y[i] = 0;
        }
        let first = *indices.iter().min().unwrap();
        let mismatch = find_mismatch(&y, 900).unwrap();
        prop_assert_eq!(mismatch.index, first);
        prop_assert_eq!(validate(&y, 900), Outcome::Fail);
    }
}
