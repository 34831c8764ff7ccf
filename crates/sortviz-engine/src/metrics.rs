//! Step counters for engines and the driver.
//!
//! [`StepMetrics`] is kept by each [`MergeSort`](crate::MergeSort) and
//! describes the algorithm's own work. [`DriverMetrics`] is kept by the
//! [`LockstepDriver`](crate::LockstepDriver) and counts what happened per
//! tick across reshuffles.

/// Work done by one engine since construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Calls to `step()` that did work (loads plus writes).
    pub steps: u64,
    /// Segment pairs copied into scratch storage.
    pub loads: u64,
    /// Elements written back into the working array.
    pub writes: u64,
    /// Key comparisons between the two halves of a pair.
    pub comparisons: u64,
    /// Completed passes (width doublings).
    pub passes: u64,
}

/// Per-tick tallies kept by the driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverMetrics {
    /// Ticks executed, including idle ones.
    pub ticks: u64,
    /// Ticks that moved nothing (engine already done, or final close-out).
    pub idle_ticks: u64,
    /// Load steps observed across all engines.
    pub loads: u64,
    /// Write steps observed across all engines.
    pub writes: u64,
    /// Engines rebuilt from a reshuffled dataset.
    pub reshuffles: u64,
    /// Engines that ran to completion.
    pub completions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.loads, 0);
        assert_eq!(m.writes, 0);
        assert_eq!(m.comparisons, 0);
        assert_eq!(m.passes, 0);

        let d = DriverMetrics::default();
        assert_eq!(d.ticks, 0);
        assert_eq!(d.idle_ticks, 0);
        assert_eq!(d.loads, 0);
        assert_eq!(d.writes, 0);
        assert_eq!(d.reshuffles, 0);
        assert_eq!(d.completions, 0);
    }
}
