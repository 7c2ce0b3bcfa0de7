use thiserror::Error;

use crate::engine::XorVariable;

/// Errors which can occur when registering an XOR constraint with the checker.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// The constraint mentions a variable outside the checker's domain. The
    /// working matrix is sized from the variables the constraints mention, so
    /// an identifier the assignment oracle cannot answer for is rejected at
    /// registration time rather than corrupting a later check.
    #[error("variable {variable} is outside the checker domain of {num_variables} variables")]
    VariableOutOfRange {
        /// The offending variable.
        variable: XorVariable,
        /// The size of the checker's variable domain.
        num_variables: usize,
    },
}
