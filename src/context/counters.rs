use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of every failure analysis made.
    pub failing_analyses: usize,

    /// The number of failed assumptions found by the most recent failure analysis.
    pub failed_assumptions: usize,

    /// A count of conflicts found when asserting assumptions.
    pub assumption_conflicts: usize,

    /// The total time taken during failure analysis.
    pub analysis_time: Duration,
}
