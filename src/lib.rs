//! # parity-gauss
//! A consistency checker for systems of XOR constraints, based on Gaussian
//! elimination over GF(2). It is meant to be driven by an external
//! boolean-satisfiability search procedure: the search supplies a partial
//! assignment through the [`AssignmentOracle`] interface, and the checker
//! reports whether the registered XOR system is still satisfiable under that
//! assignment or has become contradictory (a derived `0 = 1` row).
//!
//! The checker performs a full recomputation on every call: each stored
//! constraint is projected onto the currently-unassigned variables, the
//! resulting word-packed bit matrix is reduced, and any row with an empty
//! left-hand side and a true right-hand side yields a contradiction.
//!
//! # Using the checker
//! Variables are handed out by the assignment; the checker is constructed over
//! that domain and rejects constraints which mention variables outside of it.
//! ```rust
//! use parity_gauss::CheckStatus;
//! use parity_gauss::VecAssignment;
//! use parity_gauss::XorChecker;
//!
//! let mut assignment = VecAssignment::default();
//! let x = assignment.new_variable();
//! let y = assignment.new_variable();
//! let z = assignment.new_variable();
//!
//! let mut checker = XorChecker::new(assignment.num_variables());
//! assert!(checker.add_xor_clause([x, y], true));
//! assert!(checker.add_xor_clause([y, z], true));
//!
//! // All three variables are unassigned; the system has rank 2 and is
//! // satisfiable.
//! assert_eq!(CheckStatus::Consistent, checker.run_check(&assignment));
//!
//! // Fixing x and y to true makes `x xor y = true` fold to `0 = 1`.
//! assignment.assign(x, true);
//! assignment.assign(y, true);
//! assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));
//! ```
//!
//! The contradiction verdict is an ordinary, frequently-occurring value, not
//! an error: the caller is expected to consume it to trigger backtracking.

pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod gaussian;

pub use crate::basic_types::CheckStatus;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::engine::AssignmentOracle;
pub use crate::engine::TruthValue;
pub use crate::engine::VecAssignment;
pub use crate::engine::XorVariable;
pub use crate::gaussian::GaussStatistics;
pub use crate::gaussian::IncrementalGaussian;
pub use crate::gaussian::XorChecker;
pub use crate::gaussian::XorConstraint;
