//! Generic dense square matrix over a flat row-major buffer.

use serde::{Deserialize, Serialize};

/// A dense `n x n` matrix stored row-major in one contiguous allocation.
///
/// Cells are addressed as `row * n + column`. Rows are exposed as slices so
/// the solver can hand disjoint rows to parallel workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareMatrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Creates an `n x n` matrix with every cell set to `value`.
    #[must_use]
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Returns the dimension `n`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.n && col < self.n);
        self.data[row * self.n + col]
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.n && col < self.n);
        self.data[row * self.n + col] = value;
    }

    /// Returns row `row` as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Returns row `row` as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row * self.n..(row + 1) * self.n]
    }

    /// Copies column `col` into a fresh vector.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<T> {
        (0..self.n).map(|row| self.get(row, col)).collect()
    }

    /// Returns the backing buffer as one flat mutable slice.
    ///
    /// Rows occupy disjoint `n`-cell chunks, which is what parallel row
    /// partitioning slices on.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
