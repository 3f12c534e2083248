//! Lazy k-subset enumeration.
//!
//! [`Combinations`] yields every k-sized subset of a slice in lexicographic
//! order of positions, the same order a choose-then-skip recursion produces.
//! Elements are told apart by position only, so equal values at different
//! positions count as different elements.
//!
//! ```
//! use poker_eval::combinations::{Combinations, combination_count};
//!
//! let subsets: Vec<Vec<u8>> = Combinations::new(&[1, 2, 3], 2).collect();
//! assert_eq!(subsets, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
//! assert_eq!(combination_count(7, 5), 21);
//! ```

/// Iterator over the k-subsets of a slice.
///
/// Holds only a borrow of the input and a cursor of k positions, so creating
/// a new iterator over the same slice always restarts from the first subset.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    remaining: usize,
}

impl<'a, T: Clone> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            remaining: combination_count(items.len(), k),
        }
    }

    /// Moves the cursor to the next subset in lexicographic order.
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        // Rightmost slot that can still move right while leaving room for
        // the slots after it.
        let Some(slot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return;
        };

        self.indices[slot] += 1;
        for i in slot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let subset = self
            .indices
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();

        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Combinations<'_, T> {}

/// Returns the binomial coefficient `n` choose `k`, 0 when `k > n`.
pub fn combination_count(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // Multiplying before dividing keeps every partial result an integer.
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
