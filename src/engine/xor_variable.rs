/// A boolean variable of the surrounding search procedure, identified by a
/// non-negative index into the assignment oracle's domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct XorVariable {
    id: u32,
}

impl XorVariable {
    /// Create a variable with the given identifier.
    pub fn new(id: u32) -> XorVariable {
        XorVariable { id }
    }

    /// The variable's index into the working matrix.
    pub fn index(self) -> usize {
        self.id as usize
    }
}

impl std::fmt::Display for XorVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for XorVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
