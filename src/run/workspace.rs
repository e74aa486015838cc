//! Typestate wrapper around one kernel run.
//!
//! `Initialized` -> `Transformed` -> `Validation`. Each step consumes the
//! previous state, so a run can only move forward and cannot be validated
//! before at least one transform pass.

use tracing::debug;

use crate::kernel::error::ValidationMismatch;
use crate::kernel::outcome::Outcome;
use crate::kernel::saxpy::{find_mismatch, find_mismatch_against, initialize, saxpy};
use crate::math::buffer::Buffer;
use crate::math::scalar::Scalar;
use crate::run::config::KernelConfig;

/// Both buffers allocated and filled; no transform has run yet.
#[derive(Debug)]
pub struct Initialized<T> {
    x: Buffer<T>,
    y: Buffer<T>,
}

/// At least one transform pass has run.
#[derive(Debug)]
pub struct Transformed<T> {
    x: Buffer<T>,
    y: Buffer<T>,
    passes: usize,
}

/// Terminal state: the validated output and its outcome.
#[derive(Debug)]
pub struct Validation<T: Scalar> {
    pub outcome: Outcome,
    pub mismatch: Option<ValidationMismatch<T>>,
    pub passes: usize,
    pub output: Buffer<T>,
}

impl<T: Scalar> Initialized<T> {
    pub fn new(len: usize, x_fill: T, y_fill: T) -> Initialized<T> {
        let mut x = Buffer::filled(len, T::ZERO);
        let mut y = Buffer::filled(len, T::ZERO);
        initialize(&mut x, &mut y, x_fill, y_fill);
        debug!(len, "buffers initialized");
        Initialized { x, y }
    }

    pub fn from_config(config: &KernelConfig<T>) -> Initialized<T> {
        Initialized::new(config.len, config.x_fill, config.y_fill)
    }

    pub fn input(&self) -> &Buffer<T> {
        &self.x
    }

    pub fn output(&self) -> &Buffer<T> {
        &self.y
    }

    /// Runs the first transform pass.
    pub fn transform(self, alpha: T) -> Transformed<T> {
        let Initialized { x, mut y } = self;
        saxpy(alpha, &x, &mut y);
        Transformed { x, y, passes: 1 }
    }
}

impl<T: Scalar> Transformed<T> {
    pub fn transform(mut self, alpha: T) -> Transformed<T> {
        saxpy(alpha, &self.x, &mut self.y);
        self.passes += 1;
        self
    }

    /// Runs `count` further passes with the same coefficient.
    pub fn transform_repeated(mut self, alpha: T, count: usize) -> Transformed<T> {
        for _ in 0..count {
            saxpy(alpha, &self.x, &mut self.y);
        }
        self.passes += count;
        self
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn input(&self) -> &Buffer<T> {
        &self.x
    }

    pub fn output(&self) -> &Buffer<T> {
        &self.y
    }

    /// Direct access to the output, e.g. to inject a corrupted element.
    pub fn output_mut(&mut self) -> &mut Buffer<T> {
        &mut self.y
    }

    /// Checks every output element against one constant.
    pub fn validate(self, expected: T) -> Validation<T> {
        let mismatch = find_mismatch(&self.y, expected);
        self.finish(mismatch)
    }

    /// Checks every output element against `alpha * x[i]`.
    pub fn validate_against(self, alpha: T) -> Validation<T> {
        let mismatch = find_mismatch_against(alpha, &self.x, &self.y);
        self.finish(mismatch)
    }

    fn finish(self, mismatch: Option<ValidationMismatch<T>>) -> Validation<T> {
        Validation {
            outcome: Outcome::from_valid(mismatch.is_none()),
            mismatch,
            passes: self.passes,
            output: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pass_overwrites_sentinel() {
        let init = Initialized::new(4, 450, -1);
        assert!(init.output().iter().all(|&v| v == -1));
        let done = init.transform(2);
        assert_eq!(done.passes(), 1);
        assert!(done.output().iter().all(|&v| v == 900));
    }

    #[test]
    fn repeated_passes_are_counted() {
        let done = Initialized::new(4, 450, -1)
            .transform(2)
            .transform(2)
            .transform_repeated(2, 10);
        assert_eq!(done.passes(), 12);
    }

    #[test]
    fn corrupted_output_fails_validation() {
        let mut done = Initialized::new(8, 450, -1).transform(2);
        done.output_mut()[5] = 0;
        let validation = done.validate(900);
        assert_eq!(validation.outcome, Outcome::Fail);
        assert_eq!(validation.mismatch.map(|m| m.index), Some(5));
    }

    #[test]
    fn validate_against_uses_input() {
        let validation = Initialized::new(8, 450.0f32, 0.0)
            .transform(2.0)
            .validate_against(2.0);
        assert!(validation.outcome.is_success());
        assert_eq!(validation.output.len(), 8);
    }
}
