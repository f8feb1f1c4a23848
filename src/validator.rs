//! Independent re-check of a candidate solution against the original system.

use crate::equation::SimplificationResult;
use crate::solver::Solution;
use crate::system::EquationSystem;

/// Wraps a clone of the original (pre-solve) system so a [`Solution`] can be
/// checked without disturbing the solver's working copy.
pub struct Validator {
    original: EquationSystem,
}

impl Validator {
    pub fn new(original: EquationSystem) -> Self {
        Validator { original }
    }

    /// Substitutes every assignment into a fresh clone of the original
    /// system and checks that it collapses entirely to `0 = 0`.
    pub fn is_valid_solution(&self, solution: &Solution) -> bool {
        let mut system = self.original.clone();
        for assignment in &solution.assignments {
            system.substitute_assignment(assignment.variable, &assignment.value);
        }
        matches!(system.simplify(), Ok(SimplificationResult::IsEmpty))
    }
}
