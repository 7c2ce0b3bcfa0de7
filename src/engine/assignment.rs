use crate::engine::TruthValue;
use crate::engine::XorVariable;

/// The partial assignment maintained by the surrounding search procedure.
///
/// The checker only ever borrows an oracle for the duration of a single
/// invocation; it never stores one, because the assignment changes
/// out-of-band between calls and every check rebuilds its matrix from
/// scratch.
///
/// Implementations must answer in O(1) and must not change their answers
/// while a single invocation is in progress.
pub trait AssignmentOracle {
    /// The value of `variable` under the current partial assignment.
    fn value_of(&self, variable: XorVariable) -> TruthValue;
}

/// A trivial growable [`AssignmentOracle`] backed by a `Vec`.
///
/// Useful for tests and for driving the checker standalone; a real search
/// procedure will implement [`AssignmentOracle`] on its own trail instead.
#[derive(Debug, Clone, Default)]
pub struct VecAssignment {
    values: Vec<TruthValue>,
}

impl VecAssignment {
    /// Add a fresh unassigned variable and return its handle.
    pub fn new_variable(&mut self) -> XorVariable {
        let variable = XorVariable::new(self.values.len() as u32);
        self.values.push(TruthValue::Unassigned);
        variable
    }

    /// The number of variables handed out so far.
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Give `variable` the given truth value.
    pub fn assign(&mut self, variable: XorVariable, value: bool) {
        self.values[variable.index()] = TruthValue::from(value);
    }

    /// Remove the value of `variable` again.
    pub fn unassign(&mut self, variable: XorVariable) {
        self.values[variable.index()] = TruthValue::Unassigned;
    }
}

impl AssignmentOracle for VecAssignment {
    fn value_of(&self, variable: XorVariable) -> TruthValue {
        self.values
            .get(variable.index())
            .copied()
            .unwrap_or(TruthValue::Unassigned)
    }
}
