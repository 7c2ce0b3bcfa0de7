/// The verdict of one invocation of the checker.
///
/// All three outcomes are ordinary values. In particular,
/// [`CheckStatus::Contradiction`] is an expected, frequently-occurring result
/// which the caller uses to trigger backtracking; it is deliberately not
/// modelled as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// There is no XOR system to check: either no constraints are registered,
    /// or every constraint folded away to a tautology under the current
    /// assignment. Distinct from [`CheckStatus::Consistent`] so a caller can
    /// tell "not applicable" apart from "satisfiable so far".
    Nothing,
    /// Elimination completed without exposing a contradiction; the XOR system
    /// is satisfiable under the current partial assignment.
    Consistent,
    /// A row reduced to an empty left-hand side with a true right-hand side,
    /// i.e. the unsatisfiable equation `0 = 1`.
    Contradiction,
}

impl CheckStatus {
    /// Whether the verdict is [`CheckStatus::Contradiction`].
    pub fn is_contradiction(self) -> bool {
        matches!(self, CheckStatus::Contradiction)
    }
}
