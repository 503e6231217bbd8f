use std::ops::{Deref, DerefMut};

/// Heap buffer whose capacity always equals its length.
///
/// The storage is only replaced by an explicit `resize` to a different
/// length; resizing to the current length is a no-op.
#[derive(Debug, Clone)]
pub struct ExactBuffer<T> {
    data: Box<[T]>,
    reallocations: usize,
}

impl<T: Clone + Default> ExactBuffer<T> {
    pub fn new() -> Self {
        Self {
            data: Box::default(),
            reallocations: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of times the storage has been replaced.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Returns `true` if the storage was reallocated.
    pub fn resize(&mut self, len: usize) -> bool {
        if len == self.data.len() {
            return false;
        }

        self.data = vec![T::default(); len].into_boxed_slice();
        self.reallocations += 1;
        true
    }
}

impl<T: Clone + Default> Default for ExactBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ExactBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for ExactBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
