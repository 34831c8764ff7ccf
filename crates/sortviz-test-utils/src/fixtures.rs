//! Reusable fixtures.
//!
//! - [`Tagged`]: ordered by key only, so equal keys expose stability.
//! - [`ScriptedStepper`]: replays a fixed list of writes, one per step.

use std::cmp::Ordering;
use std::collections::VecDeque;

use sortviz_core::{StepEffect, Stepper};

/// An element compared by `key` alone; `tag` rides along untouched.
///
/// Two values with equal keys and different tags compare `Equal`, which is
/// what lets a test observe whether a sort preserved their input order.
#[derive(Clone, Copy, Debug)]
pub struct Tagged<K, G> {
    pub key: K,
    pub tag: G,
}

impl<K, G> Tagged<K, G> {
    pub fn new(key: K, tag: G) -> Self {
        Self { key, tag }
    }
}

impl<K: PartialEq, G> PartialEq for Tagged<K, G> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, G> Eq for Tagged<K, G> {}

impl<K: PartialOrd, G> PartialOrd for Tagged<K, G> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, G> Ord for Tagged<K, G> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// A [`Stepper`] that applies a scripted list of `(index, value)` writes.
///
/// Done once the script is exhausted. Counts every `step()` call,
/// including idle ones, so tests can check how often a driver polled it.
pub struct ScriptedStepper {
    data: Vec<u32>,
    script: VecDeque<(usize, u32)>,
    pub calls: usize,
}

impl ScriptedStepper {
    pub fn new(data: Vec<u32>, script: impl IntoIterator<Item = (usize, u32)>) -> Self {
        Self {
            data,
            script: script.into_iter().collect(),
            calls: 0,
        }
    }

    /// Remaining scripted writes.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Stepper<u32> for ScriptedStepper {
    fn step(&mut self) -> StepEffect {
        self.calls += 1;
        match self.script.pop_front() {
            Some((index, value)) => {
                self.data[index] = value;
                StepEffect::Wrote { index }
            }
            None => StepEffect::Idle,
        }
    }

    fn is_done(&self) -> bool {
        self.script.is_empty()
    }

    fn snapshot(&self) -> &[u32] {
        &self.data
    }
}
