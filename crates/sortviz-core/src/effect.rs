//! The [`StepEffect`] returned by every [`Stepper::step`](crate::Stepper::step).

/// What a single step did to the engine's visible state.
///
/// Drivers use this to highlight the bar that just moved; tests use it to
/// check that no step touches more than one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepEffect {
    /// The segment `[left, right)` was copied into scratch storage.
    ///
    /// No element of the working array changed.
    Loaded {
        /// First index of the segment pair.
        left: usize,
        /// One past the last index of the segment pair.
        right: usize,
    },
    /// Exactly one element of the working array was written.
    Wrote {
        /// Index of the written element.
        index: usize,
    },
    /// The engine is done; nothing changed.
    Idle,
}

impl StepEffect {
    /// Index written by this step, if any.
    pub fn written_index(&self) -> Option<usize> {
        match self {
            Self::Wrote { index } => Some(*index),
            _ => None,
        }
    }

    /// Whether this step did any work at all.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
