use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters of one run of the search.
    EngineStatistics {
        /// The number of decisions taken by the solver
        num_decisions: u64,
        /// The number of times propagation emptied a domain
        num_failures: u64,
        /// The number of times the solver restored a search node to try its refutation
        num_backtracks: u64,
        /// The number of propagator invocations
        num_propagations: u64,
        /// The largest number of open search nodes at any point
        peak_depth: u64,
        /// The amount of time which is spent in the solver, in milliseconds
        time_spent_in_solver: u64,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_start_at_zero() {
        let statistics = EngineStatistics::default();

        assert_eq!(0, statistics.num_decisions);
        assert_eq!(0, statistics.peak_depth);
    }
}
