use log::debug;

use crate::basic_types::CheckStatus;
use crate::basic_types::ConstraintOperationError;
use crate::engine::AssignmentOracle;
use crate::engine::XorVariable;
use crate::gaussian::elimination::eliminate;
use crate::gaussian::matrix::build_matrix;
use crate::gaussian::matrix::matrix_width;
use crate::gaussian::matrix::MatrixBuildResult;
use crate::gaussian::GaussStatistics;
use crate::gaussian::IncrementalGaussian;
use crate::gaussian::XorConstraint;

/// The XOR consistency checker.
///
/// Owns an append-only set of [`XorConstraint`]s and, on every invocation of
/// [`XorChecker::run_check`], decides whether that system is still
/// satisfiable under the partial assignment reported by the caller's
/// [`AssignmentOracle`]. Each invocation rebuilds its working matrix from
/// scratch; no row state survives between calls, so the oracle is free to
/// report a completely different assignment every time.
///
/// The checker is single-threaded and non-reentrant. Taking `&mut self`
/// together with a shared borrow of the oracle already rules out registering
/// constraints while an elimination is in progress.
#[derive(Debug, Clone)]
pub struct XorChecker {
    xors: Vec<XorConstraint>,
    num_variables: usize,
    statistics: GaussStatistics,
}

impl XorChecker {
    /// Create a checker over a domain of `num_variables` variables. Only
    /// variables with an index below `num_variables` may appear in
    /// constraints; the assignment oracle must be able to answer for all of
    /// them.
    pub fn new(num_variables: usize) -> XorChecker {
        XorChecker {
            xors: Vec::new(),
            num_variables,
            statistics: GaussStatistics::default(),
        }
    }

    /// The number of registered constraints.
    pub fn num_constraints(&self) -> usize {
        self.xors.len()
    }

    /// The registered constraints, in registration order.
    pub fn constraints(&self) -> &[XorConstraint] {
        &self.xors
    }

    /// The counters accumulated over all invocations so far.
    pub fn statistics(&self) -> &GaussStatistics {
        &self.statistics
    }

    /// Register the XOR constraint `variables_1 xor ... xor variables_n =
    /// rhs`. Returns whether the constraint was accepted; see
    /// [`XorChecker::try_add_xor_clause`] for the rejection rule.
    ///
    /// Variables are stored exactly as given. Duplicates are not an error:
    /// they cancel pairwise during matrix construction, so `x xor x = true`
    /// is the (unsatisfiable) equation `0 = 1`.
    pub fn add_xor_clause(
        &mut self,
        variables: impl IntoIterator<Item = XorVariable>,
        rhs: bool,
    ) -> bool {
        match self.try_add_xor_clause(variables, rhs) {
            Ok(()) => true,
            Err(error) => {
                debug!("rejected XOR clause: {error}");
                false
            }
        }
    }

    /// Register an XOR constraint, reporting the typed error on rejection.
    ///
    /// A constraint mentioning a variable at or beyond the checker's domain
    /// size is rejected and not stored. Enforcing the bound here keeps the
    /// word-packed matrix code free of per-access checks.
    pub fn try_add_xor_clause(
        &mut self,
        variables: impl IntoIterator<Item = XorVariable>,
        rhs: bool,
    ) -> Result<(), ConstraintOperationError> {
        let constraint = XorConstraint::new(variables, rhs);

        if let Some(&variable) = constraint
            .variables()
            .iter()
            .find(|variable| variable.index() >= self.num_variables)
        {
            return Err(ConstraintOperationError::VariableOutOfRange {
                variable,
                num_variables: self.num_variables,
            });
        }

        self.xors.push(constraint);
        Ok(())
    }

    /// Decide whether the registered XOR system is satisfiable under the
    /// partial assignment reported by `assignment`.
    ///
    /// The oracle is only borrowed for the duration of this call. The check
    /// is a full recomputation: constraints are projected onto the
    /// currently-unassigned variables, then the resulting matrix is reduced
    /// until a `0 = 1` row appears or none can.
    pub fn run_check(&mut self, assignment: &impl AssignmentOracle) -> CheckStatus {
        self.statistics.num_checks += 1;

        if self.xors.is_empty() {
            debug!("no XOR constraints registered, nothing to check");
            return CheckStatus::Nothing;
        }

        let width = matrix_width(&self.xors);

        let mut rows = match build_matrix(&self.xors, assignment, width) {
            MatrixBuildResult::Contradiction => {
                self.statistics.num_contradictions += 1;
                self.statistics.num_immediate_contradictions += 1;
                debug!("contradiction while folding the assignment into a constraint");
                return CheckStatus::Contradiction;
            }
            MatrixBuildResult::Matrix(rows) => rows,
        };

        if rows.is_empty() {
            debug!("every constraint folded away, nothing to check");
            return CheckStatus::Nothing;
        }

        let elimination = eliminate(&mut rows, width);

        self.statistics.max_rank = self.statistics.max_rank.max(elimination.rank);
        if elimination.status.is_contradiction() {
            self.statistics.num_contradictions += 1;
        }

        debug!(
            "elimination of {} rows finished with rank {}: {:?}",
            rows.len(),
            elimination.rank,
            elimination.status
        );

        elimination.status
    }
}

impl IncrementalGaussian for XorChecker {}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::TruthValue;
    use crate::engine::VecAssignment;

    fn variables(assignment: &mut VecAssignment, count: usize) -> Vec<XorVariable> {
        (0..count).map(|_| assignment.new_variable()).collect()
    }

    #[test]
    fn empty_system_reports_nothing() {
        let assignment = VecAssignment::default();
        let mut checker = XorChecker::new(0);

        assert_eq!(CheckStatus::Nothing, checker.run_check(&assignment));
    }

    #[test]
    fn fully_assigned_disagreement_is_an_immediate_contradiction() {
        let mut assignment = VecAssignment::default();
        let x = assignment.new_variable();
        let y = assignment.new_variable();
        assignment.assign(x, true);
        assignment.assign(y, false);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([x, y], false));

        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));
        assert_eq!(1, checker.statistics().num_immediate_contradictions);
    }

    #[test]
    fn unassigned_chain_is_consistent() {
        let mut assignment = VecAssignment::default();
        let vars = variables(&mut assignment, 3);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([vars[0], vars[1]], true));
        assert!(checker.add_xor_clause([vars[1], vars[2]], true));

        assert_eq!(CheckStatus::Consistent, checker.run_check(&assignment));
        assert_eq!(2, checker.statistics().max_rank);
    }

    #[test]
    fn redundant_constraint_does_not_change_the_verdict() {
        let mut assignment = VecAssignment::default();
        let vars = variables(&mut assignment, 2);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([vars[0], vars[1]], true));
        let once = checker.run_check(&assignment);

        assert!(checker.add_xor_clause([vars[0], vars[1]], true));
        let twice = checker.run_check(&assignment);

        assert_eq!(once, twice);
    }

    #[test]
    fn derived_contradiction_requires_elimination() {
        let mut assignment = VecAssignment::default();
        let vars = variables(&mut assignment, 3);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([vars[0], vars[1]], true));
        assert!(checker.add_xor_clause([vars[1], vars[2]], true));
        assert!(checker.add_xor_clause([vars[0], vars[2]], false));

        // No single constraint is contradictory on its own; only the sum of
        // all three has an empty left-hand side with parity true.
        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));
        assert_eq!(0, checker.statistics().num_immediate_contradictions);
    }

    #[test]
    fn duplicate_variable_cancels_to_a_contradiction() {
        let mut assignment = VecAssignment::default();
        let x = assignment.new_variable();

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([x, x], true));

        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));
    }

    #[test]
    fn duplicate_variable_with_false_rhs_is_a_tautology() {
        let mut assignment = VecAssignment::default();
        let x = assignment.new_variable();

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([x, x], false));

        assert_eq!(CheckStatus::Nothing, checker.run_check(&assignment));
    }

    #[test]
    fn checking_is_idempotent() {
        let mut assignment = VecAssignment::default();
        let vars = variables(&mut assignment, 3);
        assignment.assign(vars[2], true);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([vars[0], vars[1], vars[2]], true));
        assert!(checker.add_xor_clause([vars[0], vars[1]], false));

        let first = checker.run_check(&assignment);
        let second = checker.run_check(&assignment);

        assert_eq!(first, second);
    }

    #[test]
    fn assignment_changes_are_picked_up_between_calls() {
        let mut assignment = VecAssignment::default();
        let x = assignment.new_variable();

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([x], true));

        assert_eq!(CheckStatus::Consistent, checker.run_check(&assignment));

        assignment.assign(x, false);
        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));

        assignment.unassign(x);
        assert_eq!(CheckStatus::Consistent, checker.run_check(&assignment));
    }

    #[test]
    fn out_of_range_variables_are_rejected() {
        let assignment = VecAssignment::default();
        let mut checker = XorChecker::new(2);

        let stray = XorVariable::new(5);
        assert!(!checker.add_xor_clause([stray], true));
        assert_eq!(
            Err(ConstraintOperationError::VariableOutOfRange {
                variable: stray,
                num_variables: 2,
            }),
            checker.try_add_xor_clause([stray], true)
        );

        // The rejected constraint was not stored.
        assert_eq!(0, checker.num_constraints());
        assert_eq!(CheckStatus::Nothing, checker.run_check(&assignment));
    }

    #[test]
    fn partial_assignment_folds_into_the_matrix() {
        let mut assignment = VecAssignment::default();
        let vars = variables(&mut assignment, 3);
        assignment.assign(vars[2], false);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([vars[0], vars[1], vars[2]], true));
        assert!(checker.add_xor_clause([vars[0], vars[1]], false));

        // With vars[2] = false the first constraint becomes `x0 xor x1 =
        // true`, clashing with the second.
        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));
    }

    #[test]
    fn contradictions_are_detected_beyond_the_first_word() {
        let mut assignment = VecAssignment::default();
        let vars = variables(&mut assignment, 70);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([vars[3], vars[69]], true));
        assert!(checker.add_xor_clause([vars[69], vars[5]], true));
        assert!(checker.add_xor_clause([vars[3], vars[5]], false));

        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));
    }

    #[test]
    fn lifecycle_hooks_are_no_ops() {
        let mut assignment = VecAssignment::default();
        let vars = variables(&mut assignment, 2);

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([vars[0], vars[1]], true));

        assert!(checker.init());
        let before = checker.run_check(&assignment);

        checker.cancel();
        checker.run_top_level();

        assert_eq!(before, checker.run_check(&assignment));
    }

    #[test]
    fn statistics_track_checks_and_contradictions() {
        let mut assignment = VecAssignment::default();
        let x = assignment.new_variable();

        let mut checker = XorChecker::new(assignment.num_variables());
        assert!(checker.add_xor_clause([x, x], true));

        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));
        assert_eq!(CheckStatus::Contradiction, checker.run_check(&assignment));

        let statistics = checker.statistics();
        assert_eq!(2, statistics.num_checks);
        assert_eq!(2, statistics.num_contradictions);
        assert_eq!(2, statistics.num_immediate_contradictions);
    }

    /// Enumerates every completion of the partial assignment and reports
    /// whether one satisfies all constraints.
    fn has_satisfying_completion(
        assignment: &VecAssignment,
        variables: &[XorVariable],
        constraints: &[(Vec<XorVariable>, bool)],
    ) -> bool {
        'candidates: for candidate in 0_u32..(1 << variables.len()) {
            for (index, &variable) in variables.iter().enumerate() {
                let bit = candidate & (1 << index) != 0;
                match assignment.value_of(variable) {
                    TruthValue::True if !bit => continue 'candidates,
                    TruthValue::False if bit => continue 'candidates,
                    _ => {}
                }
            }

            let satisfied = constraints.iter().all(|(vars, rhs)| {
                let parity = vars
                    .iter()
                    .fold(false, |parity, v| parity ^ (candidate & (1 << v.index()) != 0));
                parity == *rhs
            });

            if satisfied {
                return true;
            }
        }

        false
    }

    #[test]
    fn elimination_agrees_with_brute_force() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let num_variables = rng.gen_range(1..=10);
            let num_constraints = rng.gen_range(0..=8);

            let mut assignment = VecAssignment::default();
            let vars = variables(&mut assignment, num_variables);

            let mut checker = XorChecker::new(num_variables);
            let mut constraints = Vec::new();

            for _ in 0..num_constraints {
                let len = rng.gen_range(1..=4);
                let clause: Vec<XorVariable> = (0..len)
                    .map(|_| vars[rng.gen_range(0..num_variables)])
                    .collect();
                let rhs = rng.gen_bool(0.5);

                assert!(checker.add_xor_clause(clause.clone(), rhs));
                constraints.push((clause, rhs));
            }

            for &variable in &vars {
                match rng.gen_range(0..3) {
                    0 => assignment.assign(variable, false),
                    1 => assignment.assign(variable, true),
                    _ => {}
                }
            }

            let status = checker.run_check(&assignment);

            if has_satisfying_completion(&assignment, &vars, &constraints) {
                assert_ne!(
                    CheckStatus::Contradiction,
                    status,
                    "checker contradicted a satisfiable system: {constraints:?}"
                );
            } else {
                assert_eq!(
                    CheckStatus::Contradiction,
                    status,
                    "checker missed a contradiction: {constraints:?}"
                );
            }
        }
    }
}
