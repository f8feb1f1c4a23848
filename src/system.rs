/*!

A system of [`Equation`]s sharing a common variable pool. Owns variable
allocation (original variables from the problem file, plus the fresh ones
[`Equation::eliminate`] introduces along the way) and the two operations
that apply uniformly across every equation: [`EquationSystem::simplify`]
and [`EquationSystem::substitute_deduced`].

*/

use std::fmt;

use crate::bigint::BigInt;
use crate::deduced_equation::DeducedEquation;
use crate::equation::{Equation, SimplificationResult};
use crate::error::Result;
use crate::variable::VariableId;

/// A collection of equations over a shared, growable variable pool.
#[derive(Clone, Debug, Default)]
pub struct EquationSystem {
    variable_count: usize,
    equations: Vec<Equation>,
}

impl EquationSystem {
    pub fn new(variable_count: usize, equations: Vec<Equation>) -> Self {
        EquationSystem { variable_count, equations }
    }

    pub fn empty() -> Self {
        EquationSystem { variable_count: 0, equations: Vec::new() }
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn equations_mut(&mut self) -> &mut [Equation] {
        &mut self.equations
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn push_equation(&mut self, equation: Equation) {
        self.equations.push(equation);
    }

    /// Allocates a fresh variable id, bumping the pool's size, and returns
    /// it. Used whenever [`Equation::eliminate`] needs somewhere to put the
    /// part of a coefficient that didn't fit in `{-1, 0, 1}`.
    pub fn add_new_variable(&mut self) -> VariableId {
        let id = VariableId(self.variable_count);
        self.variable_count += 1;
        id
    }

    /// Simplifies every equation in place. `Conflict` on any one equation
    /// makes the whole system unsolvable; equations that simplify to
    /// `IsEmpty` are dropped since they carry no further information. Once
    /// the list drains to nothing, either because every equation was
    /// trivial or because the solver has whittled the system down to
    /// equations already folded into deduced equations, the system as a
    /// whole reports `IsEmpty` so the solver's main loop knows to stop.
    pub fn simplify(&mut self) -> Result<SimplificationResult> {
        let mut index = 0;
        while index < self.equations.len() {
            match self.equations[index].simplify()? {
                SimplificationResult::Conflict => return Ok(SimplificationResult::Conflict),
                SimplificationResult::IsEmpty => {
                    self.equations.remove(index);
                }
                SimplificationResult::Ok => {
                    index += 1;
                }
            }
        }
        if self.equations.is_empty() {
            Ok(SimplificationResult::IsEmpty)
        } else {
            Ok(SimplificationResult::Ok)
        }
    }

    /// Folds `deduced` into every remaining equation, eliminating its target
    /// variable system-wide.
    pub fn substitute_deduced(&mut self, deduced: &DeducedEquation) {
        for equation in &mut self.equations {
            equation.substitute_deduced(deduced);
        }
    }

    /// Folds a known value for `variable` into every remaining equation.
    pub fn substitute_assignment(&mut self, variable: VariableId, value: &BigInt) {
        for equation in &mut self.equations {
            equation.substitute_assignment(variable, value);
        }
    }
}

impl fmt::Display for EquationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for equation in &self.equations {
            writeln!(f, "{equation}")?;
        }
        Ok(())
    }
}
