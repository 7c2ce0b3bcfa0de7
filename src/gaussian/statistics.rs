/// Counters describing the work the checker has done so far.
///
/// Purely observational; the checker updates them as it runs and the caller
/// can read them at any point between invocations.
#[derive(Debug, Default, Clone, Copy)]
pub struct GaussStatistics {
    /// The number of times the checker has been invoked.
    pub num_checks: u64,
    /// How many invocations ended in a contradiction.
    pub num_contradictions: u64,
    /// How many of those contradictions were found while building the matrix,
    /// before any elimination took place.
    pub num_immediate_contradictions: u64,
    /// The largest rank any elimination has produced.
    pub max_rank: usize,
}
