use crate::engine::XorVariable;

/// An equation asserting that the parity of a set of boolean variables equals
/// a fixed right-hand side.
///
/// The variables are stored exactly as given: they are neither sorted nor
/// deduplicated. A variable which occurs twice toggles its matrix bit twice
/// and cancels, which is the correct GF(2) reading of `x xor x = 0`.
#[derive(Debug, Clone)]
pub struct XorConstraint {
    variables: Box<[XorVariable]>,
    rhs: bool,
}

impl XorConstraint {
    pub(crate) fn new(variables: impl IntoIterator<Item = XorVariable>, rhs: bool) -> XorConstraint {
        XorConstraint {
            variables: variables.into_iter().collect(),
            rhs,
        }
    }

    /// The variables whose parity is constrained.
    pub fn variables(&self) -> &[XorVariable] {
        &self.variables
    }

    /// The parity the variables must sum to.
    pub fn rhs(&self) -> bool {
        self.rhs
    }
}

impl std::fmt::Display for XorConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, variable) in self.variables.iter().enumerate() {
            if index > 0 {
                write!(f, " xor ")?;
            }
            write!(f, "{variable}")?;
        }
        write!(f, " = {}", self.rhs)
    }
}
