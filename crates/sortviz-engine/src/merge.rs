//! Bottom-up merge sort as a flat, resumable state machine.
//!
//! The recursive algorithm is replaced by cursor fields on [`MergeSort`]:
//!
//! - `width`: length of the sorted runs being merged (1, 2, 4, ...).
//! - `left`: start of the segment pair `[left, right)` currently merged.
//! - `i1`, `i2`: read cursors into the scratch copy of the left half
//!   `[left, mid)` and right half `[mid, right)`.
//! - `k`: write cursor into the working array.
//! - `merging`: whether the scratch copy of the current pair is live.
//!
//! Each [`step()`](Stepper::step) either loads one segment pair into
//! scratch (no visible change) or writes exactly one element back. Closing
//! out a finished pair is bookkeeping only, so the same call goes on to
//! load the next pair or report that the sort is done.
//!
//! # Example
//!
//! ```
//! use sortviz_core::{StepEffect, Stepper};
//! use sortviz_engine::MergeSort;
//!
//! let mut sort = MergeSort::new(vec![4, 3, 2, 1]);
//! assert_eq!(sort.step(), StepEffect::Loaded { left: 0, right: 2 });
//! assert_eq!(sort.step(), StepEffect::Wrote { index: 0 });
//! assert_eq!(sort.snapshot(), &[3, 3, 2, 1]);
//! sort.run_to_completion();
//! assert_eq!(sort.snapshot(), &[1, 2, 3, 4]);
//! ```

use std::fmt;

use sortviz_core::{StepEffect, Stepper};

use crate::metrics::StepMetrics;

/// Step-wise bottom-up merge sort over an owned array.
///
/// Stable: on equal keys the element from the left run is written first.
/// Arrays with fewer than two elements are done on construction.
/// Stepping a finished sort is a no-op returning [`StepEffect::Idle`].
pub struct MergeSort<T> {
    arr: Vec<T>,
    buf: Vec<T>,
    width: usize,
    left: usize,
    i1: usize,
    i2: usize,
    k: usize,
    merging: bool,
    metrics: StepMetrics,
}

impl<T: Ord + Clone> MergeSort<T> {
    /// Take ownership of `data` and prepare to sort it.
    pub fn new(data: Vec<T>) -> Self {
        // Scratch contents are irrelevant until the first load; cloning
        // avoids requiring `T: Default`.
        let buf = data.clone();
        Self {
            arr: data,
            buf,
            width: 1,
            left: 0,
            i1: 0,
            i2: 0,
            k: 0,
            merging: false,
            metrics: StepMetrics::default(),
        }
    }
}

impl<T> MergeSort<T> {
    /// Current run length being merged.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether a segment pair is loaded and partially written back.
    pub fn is_merging(&self) -> bool {
        self.merging
    }

    /// Counters accumulated since construction.
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// Give back the working array in whatever state it is in.
    pub fn into_inner(self) -> Vec<T> {
        self.arr
    }

    /// `(mid, right)` for the segment pair starting at `left`.
    fn bounds(&self) -> (usize, usize) {
        let n = self.arr.len();
        let mid = (self.left + self.width).min(n - 1);
        let right = (self.left + 2 * self.width).min(n);
        (mid, right)
    }
}

impl<T: Ord + Clone> MergeSort<T> {
    fn load(&mut self, mid: usize, right: usize) -> StepEffect {
        let left = self.left;
        self.buf[left..right].clone_from_slice(&self.arr[left..right]);
        self.i1 = left;
        self.i2 = mid;
        self.k = left;
        self.merging = true;
        self.metrics.loads += 1;
        self.metrics.steps += 1;
        StepEffect::Loaded { left, right }
    }

    fn write_from(&mut self, src: usize) -> StepEffect {
        let index = self.k;
        self.arr[index] = self.buf[src].clone();
        self.k += 1;
        self.metrics.writes += 1;
        self.metrics.steps += 1;
        StepEffect::Wrote { index }
    }
}

impl<T: Ord + Clone> Stepper<T> for MergeSort<T> {
    fn step(&mut self) -> StepEffect {
        if self.is_done() {
            return StepEffect::Idle;
        }
        let n = self.arr.len();
        loop {
            if self.left + 1 >= n {
                self.left = 0;
                self.width *= 2;
                self.metrics.passes += 1;
            }
            if self.width >= n {
                return StepEffect::Idle;
            }

            let (mid, right) = self.bounds();
            if !self.merging {
                return self.load(mid, right);
            }

            debug_assert!(
                self.left <= self.i1
                    && self.i1 <= mid
                    && mid <= self.i2
                    && self.i2 <= right
                    && right <= n,
                "cursor order violated: left={} i1={} mid={} i2={} right={} n={}",
                self.left,
                self.i1,
                mid,
                self.i2,
                right,
                n,
            );
            debug_assert_eq!(self.k + mid, self.i1 + self.i2, "write cursor out of step");

            let left_live = self.i1 < mid;
            let right_live = self.i2 < right;
            let src = if left_live && right_live {
                self.metrics.comparisons += 1;
                if self.buf[self.i1] > self.buf[self.i2] {
                    self.i2 += 1;
                    self.i2 - 1
                } else {
                    self.i1 += 1;
                    self.i1 - 1
                }
            } else if left_live {
                self.i1 += 1;
                self.i1 - 1
            } else if right_live {
                self.i2 += 1;
                self.i2 - 1
            } else {
                // Pair fully merged: advance to the next one in this call.
                self.merging = false;
                self.left += 2 * self.width;
                continue;
            };
            return self.write_from(src);
        }
    }

    fn is_done(&self) -> bool {
        self.width >= self.arr.len()
    }

    fn snapshot(&self) -> &[T] {
        &self.arr
    }
}

impl<T> fmt::Debug for MergeSort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSort")
            .field("len", &self.arr.len())
            .field("width", &self.width)
            .field("left", &self.left)
            .field("merging", &self.merging)
            .field("i1", &self.i1)
            .field("i2", &self.i2)
            .field("k", &self.k)
            .finish()
    }
}
