use rand::distributions::uniform::SampleUniform;
use rand::prelude::*;
use serde::Serialize;
use std::ops::{Index, IndexMut};

/// An owned, fixed-length sequence of elements.
///
/// A `Buffer` is sized once when it is created and never grows or shrinks;
/// the kernels only ever overwrite elements in place. Memory is released when
/// the buffer is dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Buffer<T> {
    data: Vec<T>,
}

impl<T: Copy> Buffer<T> {
    /// A buffer of `len` elements, every one set to `value`.
    pub fn filled(len: usize, value: T) -> Buffer<T> {
        Buffer { data: vec![value; len] }
    }

    pub fn from_data(data: Vec<T>) -> Buffer<T> {
        Buffer { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Allocating element-wise map; `self` is left untouched.
    pub fn map<F>(&self, functor: F) -> Buffer<T>
    where
        F: Fn(T) -> T,
    {
        Buffer::from_data(self.data.iter().map(|&x| functor(x)).collect())
    }
}

impl<T: Copy + SampleUniform + PartialOrd> Buffer<T> {
    /// A buffer of `len` elements drawn uniformly from `[low, high)`.
    ///
    /// # Panics
    /// Panics if `low >= high`.
    pub fn random(len: usize, low: T, high: T) -> Buffer<T> {
        let mut rng = rand::thread_rng();
        Buffer {
            data: (0..len).map(|_| rng.gen_range(low..high)).collect(),
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Buffer { data: vec![] }
    }
}

impl<T> Index<usize> for Buffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Buffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}
