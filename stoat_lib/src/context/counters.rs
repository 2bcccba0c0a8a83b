use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Debug, Clone)]
pub struct Counters {
    /// A count of all decisions made --- splits on a variable, not forced assignments.
    pub decisions: usize,

    /// A count of unit clauses settled during a solve.
    pub propagations: usize,

    /// A count of pure choice variables settled during a solve.
    pub eliminations: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            decisions: 0,
            propagations: 0,
            eliminations: 0,

            time: Duration::from_secs(0),
        }
    }
}
