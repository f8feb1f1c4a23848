/*!

The main solve loop: pick-equation, deduce, substitute, repeat; then
back-propagate the stack of deduced equations into concrete assignments.

*/

use log::debug;

use crate::bigint::BigInt;
use crate::deduced_equation::DeducedEquation;
use crate::equation::SimplificationResult;
use crate::error::Result;
use crate::system::EquationSystem;
use crate::variable::VariableId;

/// A value pinned to a variable, the terminal form of a [`DeducedEquation`]
/// once its right-hand side has fully reduced to a constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub variable: VariableId,
    pub value: BigInt,
}

/// The solution to a system: one [`Assignment`] per original variable
/// (id < the system's variable count as declared by the input, before any
/// auxiliary variables were minted).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub assignments: Vec<Assignment>,
}

impl Solution {
    pub fn get(&self, variable: VariableId) -> Option<&BigInt> {
        self.assignments
            .iter()
            .find(|a| a.variable == variable)
            .map(|a| &a.value)
    }
}

/// Drives an [`EquationSystem`] to a [`Solution`] or a proof of
/// unsolvability, one instance per solve.
pub struct Solver {
    system: EquationSystem,
    original_variable_count: usize,
    deduced: Vec<DeducedEquation>,
    assignments: Vec<Assignment>,
}

impl Solver {
    pub fn new(system: EquationSystem) -> Self {
        let original_variable_count = system.variable_count();
        Solver {
            system,
            original_variable_count,
            deduced: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Runs the main loop to completion. `None` means the system has no
    /// integer solution.
    ///
    /// `poll` is called once per outer-loop iteration (after step 5, before
    /// the next simplify); if it ever returns `false`, the solve stops early
    /// and this returns `Ok(None)`. No caller in this crate passes one, but
    /// the hook is here so an embedder can wire up cancellation without
    /// forking the loop.
    pub fn solve(&mut self) -> Result<Option<Solution>> {
        self.solve_with_poll(|| true)
    }

    pub fn solve_with_poll(&mut self, mut poll: impl FnMut() -> bool) -> Result<Option<Solution>> {
        let mut iteration = 0usize;
        loop {
            match self.system.simplify()? {
                SimplificationResult::Conflict => return Ok(None),
                SimplificationResult::IsEmpty => break,
                SimplificationResult::Ok => {}
            }

            debug!(
                "iteration {iteration}: {} equation(s) remaining",
                self.system.equations().len()
            );
            iteration += 1;

            let pivot_index = pick_equation_index(&self.system);

            let fresh_variable = {
                let equation = &self.system.equations()[pivot_index];
                let lowest = equation
                    .lowest_coefficient_term()
                    .expect("a non-empty equation has a nonzero term after simplify");
                if lowest.coefficient.abs() > BigInt::from(1i64) {
                    Some(self.system.add_new_variable())
                } else {
                    None
                }
            };

            let equation = &mut self.system.equations_mut()[pivot_index];
            let t = equation
                .lowest_coefficient_term()
                .expect("a non-empty equation has a nonzero term after simplify")
                .clone();
            let t = if t.coefficient.is_negative() {
                equation.invert()?;
                equation
                    .lowest_coefficient_term()
                    .expect("inverting doesn't empty the equation")
                    .clone()
            } else {
                t
            };

            let deduced = if let Some(fresh_variable) = fresh_variable {
                equation.eliminate(&t, fresh_variable)?
            } else {
                equation.solve_for(&t, true)
            };

            if deduced.right_side_terms.terms().is_empty() {
                let assignment = Assignment {
                    variable: deduced.target,
                    value: deduced.right_side_constant.clone(),
                };
                self.system
                    .substitute_assignment(assignment.variable, &assignment.value);
                self.assignments.push(assignment);
            } else {
                self.system.substitute_deduced(&deduced);
                self.deduced.push(deduced);
            }

            if !poll() {
                return Ok(None);
            }
        }

        self.back_propagate();
        Ok(Some(self.extract_solution()))
    }

    fn back_propagate(&mut self) {
        while let Some(mut deduced) = self.deduced.pop() {
            for assignment in &self.assignments {
                deduced.substitute_assignment(assignment.variable, &assignment.value);
            }

            let leftover: Vec<VariableId> = deduced
                .right_side_terms
                .terms()
                .iter()
                .filter(|t| !t.is_zero())
                .map(|t| t.variable)
                .collect();
            for variable in leftover {
                self.assignments.push(Assignment { variable, value: BigInt::zero() });
            }

            self.assignments.push(Assignment {
                variable: deduced.target,
                value: deduced.right_side_constant.clone(),
            });
        }
    }

    fn extract_solution(&self) -> Solution {
        let assignments = self
            .assignments
            .iter()
            .filter(|a| a.variable.index() < self.original_variable_count)
            .cloned()
            .collect();
        Solution { assignments }
    }
}

/// If any equation is a single term, pick it; otherwise pick the equation
/// whose lowest-coefficient term has minimum `|coefficient|` system-wide.
fn pick_equation_index(system: &EquationSystem) -> usize {
    if let Some(index) = system
        .equations()
        .iter()
        .position(|e| e.left_side().terms().iter().filter(|t| !t.is_zero()).count() == 1)
    {
        return index;
    }

    system
        .equations()
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.lowest_coefficient_term().map(|t| (i, t.coefficient.abs())))
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
        .expect("simplify leaves only equations with at least one nonzero term")
}
