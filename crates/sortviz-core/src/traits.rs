//! The [`Stepper`] contract and the [`Steps`] iterator adapter.

use std::marker::PhantomData;

use crate::effect::StepEffect;

/// A sorting algorithm that advances one primitive operation per call.
///
/// # Contract
///
/// - `step()` performs a bounded unit of work and changes at most one
///   element of the array returned by `snapshot()`.
/// - Once `is_done()` returns `true`, `step()` is a no-op returning
///   [`StepEffect::Idle`].
/// - `snapshot()` never mutates and is valid at every suspension point,
///   including in the middle of a merge.
/// - All progress lives in fields of the implementor. There is no hidden
///   call stack; dropping the stepper is the only cancellation.
///
/// # Object safety
///
/// This trait is object-safe; drivers store the current algorithm as
/// `Box<dyn Stepper<T> + Send>`.
///
/// # Examples
///
/// A trivial stepper that walks the array once and is then done:
///
/// ```
/// use sortviz_core::{StepEffect, Stepper};
///
/// struct Walk {
///     data: Vec<u32>,
///     cursor: usize,
/// }
///
/// impl Stepper<u32> for Walk {
///     fn step(&mut self) -> StepEffect {
///         if self.is_done() {
///             return StepEffect::Idle;
///         }
///         self.cursor += 1;
///         StepEffect::Loaded { left: self.cursor - 1, right: self.cursor }
///     }
///
///     fn is_done(&self) -> bool {
///         self.cursor >= self.data.len()
///     }
///
///     fn snapshot(&self) -> &[u32] {
///         &self.data
///     }
/// }
///
/// let mut walk = Walk { data: vec![3, 1, 2], cursor: 0 };
/// assert_eq!(walk.run_to_completion(), 3);
/// assert!(walk.is_done());
/// assert_eq!(walk.step(), StepEffect::Idle);
/// ```
pub trait Stepper<T> {
    /// Perform one bounded unit of work.
    fn step(&mut self) -> StepEffect;

    /// Whether further `step()` calls would leave the array unchanged.
    fn is_done(&self) -> bool;

    /// Current (possibly partially sorted) array.
    fn snapshot(&self) -> &[T];

    /// Number of elements being sorted.
    fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether there are no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `step()` until `is_done()`. Returns the number of steps that
    /// did work.
    fn run_to_completion(&mut self) -> u64 {
        let mut taken = 0;
        while !self.is_done() {
            if !self.step().is_idle() {
                taken += 1;
            }
        }
        taken
    }

    /// Iterate over the effects of the remaining steps.
    fn steps(&mut self) -> Steps<'_, T, Self>
    where
        Self: Sized,
    {
        Steps::new(self)
    }
}

/// Iterator yielding one [`StepEffect`] per step until the stepper is done.
///
/// Never yields [`StepEffect::Idle`].
pub struct Steps<'a, T, S: ?Sized> {
    inner: &'a mut S,
    _elem: PhantomData<fn() -> T>,
}

impl<'a, T, S: Stepper<T> + ?Sized> Steps<'a, T, S> {
    /// Wrap a stepper, including an unsized one behind a `Box<dyn ..>`.
    pub fn new(inner: &'a mut S) -> Self {
        Self {
            inner,
            _elem: PhantomData,
        }
    }
}

impl<T, S: Stepper<T> + ?Sized> Iterator for Steps<'_, T, S> {
    type Item = StepEffect;

    fn next(&mut self) -> Option<StepEffect> {
        if self.inner.is_done() {
            return None;
        }
        match self.inner.step() {
            StepEffect::Idle => None,
            effect => Some(effect),
        }
    }
}
