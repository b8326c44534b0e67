use std::{
    cmp::Ordering,
    ops::{Add, Index, Sub},
};

use log::{debug, trace};

use crate::{
    error::FenwickError,
    util::{ensure_index, lowest_set_bit},
};

/// A binary indexed tree over a fixed-length sequence of numbers
///
/// Supports setting a single value and querying the sum over any inclusive range of indices, both in
/// O(log n). `T::default()` is treated as zero. Unsigned element types are supported: lowering a value
/// subtracts the difference instead of adding a negative delta.
///
/// Internally, `tree[i]` (1-indexed, slot 0 unused) holds the sum of the `lowest_set_bit(i)` values ending at
/// `values[i - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FenwickTree<T> {
    values: Vec<T>,
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    /// Constructs a new `FenwickTree` from a provided `Vec` in O(n log n)
    pub fn new(values: Vec<T>) -> Self {
        let len = values.len();
        let mut fenwick = Self {
            values,
            tree: vec![T::default(); len + 1],
        };

        // The accumulators start at zero, so each value is its own delta
        for ix in 0..len {
            let value = fenwick.values[ix];
            fenwick.propagate(ix, value);
        }

        debug!("built fenwick tree over {} values", len);
        fenwick
    }

    /// Constructs a `FenwickTree` of `len` zeros
    pub fn zeroed(len: usize) -> Self {
        Self {
            values: vec![T::default(); len],
            tree: vec![T::default(); len + 1],
        }
    }

    /// Returns the number of values stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values are stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the current value at `index`, or `None` if out of bounds
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Get a slice view of the current values
    pub fn view(&self) -> &[T] {
        &self.values
    }

    /// Set the value at `index` to `value`
    ///
    /// Fails with [`IndexOutOfRange`](FenwickError::IndexOutOfRange) before touching any state if
    /// `index >= len`
    pub fn point_update(&mut self, index: usize, value: T) -> Result<(), FenwickError> {
        ensure_index!(index, self.len());
        let old = self.values[index];
        self.values[index] = value;
        if value >= old {
            self.propagate(index, value - old);
        } else {
            self.propagate_sub(index, old - value);
        }
        Ok(())
    }

    /// Add `delta` to the value at `index`
    pub fn add(&mut self, index: usize, delta: T) -> Result<(), FenwickError> {
        ensure_index!(index, self.len());
        self.values[index] = self.values[index] + delta;
        self.propagate(index, delta);
        Ok(())
    }

    /// Get the sum of `values[0..=index]`
    pub fn prefix_sum(&self, index: usize) -> Result<T, FenwickError> {
        ensure_index!(index, self.len());
        Ok(self.accumulate(index + 1))
    }

    /// Get the sum of the first `len` values, where `prefix_len(0)` is zero
    pub fn prefix_len(&self, len: usize) -> Result<T, FenwickError> {
        if len > self.len() {
            debug!("rejected prefix length {} for length {}", len, self.len());
            return Err(FenwickError::IndexOutOfRange {
                index: len,
                len: self.len(),
            });
        }
        Ok(self.accumulate(len))
    }

    /// Get the sum of `values[from..=to]`
    ///
    /// ### Errors
    /// - [`InvalidRange`](FenwickError::InvalidRange) if `from > to`
    /// - [`IndexOutOfRange`](FenwickError::IndexOutOfRange) if `to >= len`
    pub fn range_sum(&self, from: usize, to: usize) -> Result<T, FenwickError> {
        if from > to {
            debug!("rejected range {}..={}", from, to);
            return Err(FenwickError::InvalidRange { from, to });
        }
        let upper = self.prefix_sum(to)?;
        if from == 0 {
            Ok(upper)
        } else {
            Ok(upper - self.accumulate(from))
        }
    }

    /// Get the sum of all values stored
    pub fn total(&self) -> T {
        self.accumulate(self.len())
    }

    /// Find the first index `i` where the sum of the values from 0 to `i` is at least `target`
    ///
    /// Only meaningful when every stored value is non-negative, so that prefix sums are monotonic.
    ///
    /// ### Returns
    /// - `None` if the tree is empty, `target` is NaN, or the sum of all values is below `target`
    /// - `Some(i)` otherwise
    pub fn find(&self, target: T) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        // Unordered targets such as NaN are never reached
        match target.partial_cmp(&self.total()) {
            Some(Ordering::Less | Ordering::Equal) => {}
            _ => return None,
        }

        // Binary lifting: `pos` is the longest prefix whose sum is still below `target`
        let mut pos = 0;
        let mut remaining = target;
        let mut step = 1 << len.ilog2();
        while step > 0 {
            let next = pos + step;
            if next <= len && self.tree[next] < remaining {
                pos = next;
                remaining = remaining - self.tree[next];
            }
            step >>= 1;
        }

        (pos < len).then_some(pos)
    }

    /// Add `delta` to every accumulator covering `values[ix]`
    fn propagate(&mut self, ix: usize, delta: T) {
        let len = self.len();
        let mut pos = ix + 1;
        let mut touched = 0;
        while pos <= len {
            self.tree[pos] = self.tree[pos] + delta;
            pos += lowest_set_bit(pos);
            touched += 1;
        }
        trace!("propagated update at index {} through {} accumulators", ix, touched);
    }

    /// Subtract `amount` from every accumulator covering `values[ix]`
    ///
    /// Each covering accumulator holds at least the old value, so unsigned types never underflow
    fn propagate_sub(&mut self, ix: usize, amount: T) {
        let len = self.len();
        let mut pos = ix + 1;
        let mut touched = 0;
        while pos <= len {
            self.tree[pos] = self.tree[pos] - amount;
            pos += lowest_set_bit(pos);
            touched += 1;
        }
        trace!("retracted update at index {} through {} accumulators", ix, touched);
    }

    /// Sum of the first `len` values, `len` must be in bounds
    fn accumulate(&self, len: usize) -> T {
        let mut pos = len;
        let mut sum = T::default();
        while pos > 0 {
            sum = sum + self.tree[pos];
            pos -= lowest_set_bit(pos);
        }
        sum
    }
}

impl<T> From<Vec<T>> for FenwickTree<T>
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for FenwickTree<T>
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for FenwickTree<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}
