//! A single (coefficient, variable) pair.

use std::fmt;

use crate::bigint::BigInt;
use crate::error::Result;
use crate::variable::VariableId;

/// One summand of a [`crate::Sum`]: `coefficient * x[variable]`.
///
/// The uniqueness-of-variable and ascending-order invariants are owned by
/// `Sum`, not by `Term` itself -- a lone `Term` has no way to violate them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    pub coefficient: BigInt,
    pub variable: VariableId,
}

impl Term {
    pub fn new(coefficient: BigInt, variable: VariableId) -> Self {
        Term { coefficient, variable }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn divide_coefficient_by(&mut self, divisor: &BigInt) -> Result<()> {
        self.coefficient = self.coefficient.checked_div(divisor)?;
        Ok(())
    }

    pub fn coefficient_modulo(&mut self, modulus: &BigInt) -> Result<()> {
        self.coefficient = self.coefficient.sym_mod(modulus)?;
        Ok(())
    }

    pub fn set_coefficient_to_zero(&mut self) {
        self.coefficient = BigInt::zero();
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})*{}", self.coefficient, self.variable)
    }
}
