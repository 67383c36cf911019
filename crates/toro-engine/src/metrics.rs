//! Per-tick performance metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and population data for a single
//! generation, for logging and benchmarks.

/// Timing and population metrics collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time spent computing the next generation, in microseconds.
    pub step_us: u64,
    /// Number of live cells in the computed generation.
    pub population: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.step_us, 0);
        assert_eq!(m.population, 0);
    }
}
