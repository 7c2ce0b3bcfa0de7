/// The value the assignment oracle reports for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruthValue {
    /// The variable is assigned false.
    False,
    /// The variable is assigned true.
    True,
    /// The variable has no value under the current partial assignment.
    Unassigned,
}

impl TruthValue {
    /// Whether the variable has a value.
    pub fn is_assigned(self) -> bool {
        !matches!(self, TruthValue::Unassigned)
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> TruthValue {
        if value {
            TruthValue::True
        } else {
            TruthValue::False
        }
    }
}
