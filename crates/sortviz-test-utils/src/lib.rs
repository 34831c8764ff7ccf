//! Test utilities and fixtures for sortviz development.
//!
//! Provides data builders ([`descending`], [`ascending`]), slice checks
//! ([`is_sorted`], [`changed_indices`]), a key-only-ordered element for
//! stability tests ([`Tagged`]), and a scripted [`Stepper`] mock
//! ([`ScriptedStepper`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ScriptedStepper, Tagged};

/// `n, n-1, ..., 1`.
pub fn descending(n: u32) -> Vec<u32> {
    (1..=n).rev().collect()
}

/// `1, 2, ..., n`.
pub fn ascending(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

/// Whether `items` is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// Indices at which `before` and `after` differ.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn changed_indices<T: PartialEq>(before: &[T], after: &[T]) -> Vec<usize> {
    assert_eq!(before.len(), after.len(), "snapshot length changed");
    before
        .iter()
        .zip(after)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders() {
        assert_eq!(descending(3), vec![3, 2, 1]);
        assert_eq!(ascending(3), vec![1, 2, 3]);
        assert!(descending(0).is_empty());
    }

    #[test]
    fn sortedness() {
        assert!(is_sorted::<u32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn diff_reports_positions() {
        assert_eq!(changed_indices(&[1, 2, 3], &[1, 5, 3]), vec![1]);
        assert!(changed_indices(&[1, 2], &[1, 2]).is_empty());
    }
}
