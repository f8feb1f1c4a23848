//! A solved form produced while eliminating variables.

use std::fmt;

use crate::bigint::BigInt;
use crate::error::Result;
use crate::sum::Sum;
use crate::term::Term;
use crate::variable::VariableId;

/// `x[target] = right_side_terms + right_side_constant`.
///
/// Produced only by [`crate::Equation::solve_for`] and
/// [`crate::Equation::eliminate`]; `target` never changes once a
/// `DeducedEquation` exists, even as substitution zeroes out terms on its
/// right-hand side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeducedEquation {
    pub target: VariableId,
    pub right_side_terms: Sum,
    pub right_side_constant: BigInt,
}

impl DeducedEquation {
    pub fn new(target: VariableId, right_side_terms: Sum, right_side_constant: BigInt) -> Self {
        DeducedEquation { target, right_side_terms, right_side_constant }
    }

    pub fn add_term(&mut self, term: Term) {
        self.right_side_terms.add_term(term);
    }

    pub fn coefficients_modulo(&mut self, modulus: &BigInt) -> Result<()> {
        self.right_side_terms.coefficients_modulo(modulus)
    }

    /// Folds a known value for `variable` into the constant, zeroing its
    /// term on the right-hand side if present.
    pub fn substitute_assignment(&mut self, variable: VariableId, value: &BigInt) {
        if let Some(coefficient) = self
            .right_side_terms
            .set_coefficient_of_variable_to_zero(variable)
        {
            self.right_side_constant += &(&coefficient * value);
        }
    }
}

impl fmt::Display for DeducedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} + {}", self.target, self.right_side_terms, self.right_side_constant)
    }
}
