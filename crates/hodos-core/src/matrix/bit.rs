//! Bit-packed boolean square matrix.
//!
//! The transitive-closure recurrence `reach[i][j] |= reach[i][k] && reach[k][j]`
//! collapses, for a fixed `i` and `k` with `reach[i][k]` set, to OR-ing row
//! `k` into row `i`. Packing rows into u64 words turns that inner loop into
//! `n / 64` word operations.

use serde::{Deserialize, Serialize};

/// A dense `n x n` boolean matrix, one bit per cell, rows padded to whole
/// u64 words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitMatrix {
    n: usize,
    words_per_row: usize,
    words: Vec<u64>,
}

impl BitMatrix {
    /// Creates an `n x n` matrix with every cell false.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let words_per_row = n.div_ceil(64);
        Self {
            n,
            words_per_row,
            words: vec![0; n * words_per_row],
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
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.n && col < self.n);
        let word = self.words[row * self.words_per_row + col / 64];
        word & (1 << (col % 64)) != 0
    }

    /// Sets the cell at `(row, col)` to true.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.n && col < self.n);
        self.words[row * self.words_per_row + col / 64] |= 1 << (col % 64);
    }

    /// ORs row `src` into row `dst` word-wise. A no-op when `dst == src`.
    pub fn or_row(&mut self, dst: usize, src: usize) {
        if dst == src {
            return;
        }
        let wpr = self.words_per_row;
        let (dst_row, src_row) = if dst < src {
            let (head, tail) = self.words.split_at_mut(src * wpr);
            (&mut head[dst * wpr..(dst + 1) * wpr], &tail[..wpr])
        } else {
            let (head, tail) = self.words.split_at_mut(dst * wpr);
            (&mut tail[..wpr], &head[src * wpr..(src + 1) * wpr])
        };
        for (d, s) in dst_row.iter_mut().zip(src_row) {
            *d |= *s;
        }
    }

    /// Counts the set cells in row `row`.
    #[must_use]
    pub fn row_count(&self, row: usize) -> usize {
        self.words[row * self.words_per_row..(row + 1) * self.words_per_row]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }
}
