use log::trace;

use crate::containers::BitVec;
use crate::engine::AssignmentOracle;
use crate::engine::TruthValue;
use crate::gaussian::XorConstraint;

/// One stored constraint projected onto the currently-unassigned variables: a
/// bit per unassigned variable plus the right-hand side that remains after
/// folding the assigned variables into it.
///
/// Rows only live for the duration of a single check; nothing is cached
/// across invocations.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub(crate) lhs: BitVec,
    pub(crate) rhs: bool,
}

impl Row {
    /// Whether this row reads `0 = 1`.
    pub(crate) fn is_contradiction(&self) -> bool {
        self.rhs && self.lhs.is_zero()
    }
}

/// The outcome of projecting the constraint set onto the current assignment.
#[derive(Debug)]
pub(crate) enum MatrixBuildResult {
    /// The non-trivial rows, in constraint order. May be empty if every
    /// constraint folded away to `0 = 0`.
    Matrix(Vec<Row>),
    /// Some constraint folded to `0 = 1` on its own; no elimination is
    /// needed.
    Contradiction,
}

/// The working matrix width: one past the largest variable identifier
/// mentioned by any constraint, or zero for an empty constraint set.
pub(crate) fn matrix_width(constraints: &[XorConstraint]) -> usize {
    constraints
        .iter()
        .flat_map(|constraint| constraint.variables())
        .map(|variable| variable.index() + 1)
        .max()
        .unwrap_or(0)
}

/// Project every constraint onto the unassigned variables.
///
/// Assigned variables are folded into the right-hand side: a true variable
/// flips the parity, a false one contributes nothing. Rows whose left-hand
/// side ends up empty are either dropped (parity false, a tautology) or
/// short-circuit the whole build (parity true, a `0 = 1` row).
pub(crate) fn build_matrix(
    constraints: &[XorConstraint],
    assignment: &impl AssignmentOracle,
    width: usize,
) -> MatrixBuildResult {
    let mut rows = Vec::with_capacity(constraints.len());

    for constraint in constraints {
        let mut lhs = BitVec::zeroed(width);
        let mut parity = constraint.rhs();

        for &variable in constraint.variables() {
            match assignment.value_of(variable) {
                TruthValue::Unassigned => lhs.toggle(variable.index()),
                TruthValue::True => parity = !parity,
                TruthValue::False => {}
            }
        }

        if lhs.is_zero() {
            if parity {
                trace!("constraint '{constraint}' folded to 0 = 1");
                return MatrixBuildResult::Contradiction;
            }

            trace!("constraint '{constraint}' folded to a tautology, dropped");
            continue;
        }

        rows.push(Row { lhs, rhs: parity });
    }

    MatrixBuildResult::Matrix(rows)
}
