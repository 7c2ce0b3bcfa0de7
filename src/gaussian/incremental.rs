/// Lifecycle hooks through which a decision-level-aware search procedure will
/// eventually drive the checker incrementally.
///
/// The default implementations do nothing, and [`XorChecker`] deliberately
/// does not override them: the current algorithm is a full recomputation per
/// invocation, so there is no per-level state to initialise, cancel, or
/// re-establish at the root. Callers may already invoke these hooks at the
/// appropriate points of their search loop; the no-op contract must be kept
/// until incremental support lands.
///
/// [`XorChecker`]: crate::gaussian::XorChecker
pub trait IncrementalGaussian {
    /// Prepare internal state for a sequence of checks. Returns whether the
    /// engine is usable; the full-recomputation engine always is.
    fn init(&mut self) -> bool {
        true
    }

    /// Called when the search procedure backtracks.
    fn cancel(&mut self) {}

    /// Called when the search procedure returns to the root decision level.
    fn run_top_level(&mut self) {}
}
