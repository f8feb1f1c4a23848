/*!

`left_side = right_side`, with `left_side` a [`Sum`] and `right_side` a
[`BigInt`] constant. This module carries the five operations the
[`crate::Solver`]'s main loop is built from: `simplify`, `invert`,
`solve_for`, `eliminate`, and the two `substitute` overloads.

*/

use std::fmt;

use crate::bigint::BigInt;
use crate::deduced_equation::DeducedEquation;
use crate::error::Result;
use crate::sum::Sum;
use crate::term::Term;
use crate::variable::VariableId;

/// Outcome of simplifying a single equation (or, in aggregate, a whole
/// system): either it's still a live constraint, it collapsed to the
/// trivially-true `0 = 0`, or it proved the system unsolvable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimplificationResult {
    Ok,
    /// The equation reduced to `0 = 0` and carries no information.
    IsEmpty,
    /// The equation reduced to `0 = c` for nonzero `c`, or its coefficient
    /// gcd does not divide the right side -- the system has no solution.
    Conflict,
}

/// `left_side = right_side`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    left_side: Sum,
    right_side: BigInt,
}

impl Equation {
    pub fn new(left_side: Sum, right_side: BigInt) -> Self {
        Equation { left_side, right_side }
    }

    pub fn left_side(&self) -> &Sum {
        &self.left_side
    }

    pub fn right_side(&self) -> &BigInt {
        &self.right_side
    }

    pub fn lowest_coefficient_term(&self) -> Option<&Term> {
        self.left_side.lowest_coefficient_term()
    }

    pub fn highest_coefficient_term(&self) -> Option<&Term> {
        self.left_side.highest_coefficient_term()
    }

    /// Divides both sides by the gcd of the left side's coefficients.
    pub fn simplify(&mut self) -> Result<SimplificationResult> {
        let Some(gcd) = self.left_side.simplify() else {
            return Ok(if self.right_side.is_zero() {
                SimplificationResult::IsEmpty
            } else {
                SimplificationResult::Conflict
            });
        };

        if !self.right_side.is_divisible_by(&gcd)? {
            return Ok(SimplificationResult::Conflict);
        }

        self.right_side = self.right_side.checked_div(&gcd)?;
        Ok(SimplificationResult::Ok)
    }

    /// Multiplies both sides by -1, used to normalize the pivot's sign.
    pub fn invert(&mut self) -> Result<()> {
        let minus_one = BigInt::from(-1i64);
        self.left_side.divide_coefficients_by(&minus_one)?;
        self.right_side = &self.right_side * &minus_one;
        Ok(())
    }

    /// Reshapes `left_side = right_side` into a solved form for `term`'s
    /// variable, assuming `|term.coefficient| == 1`.
    ///
    /// When `do_normal_inversion` is true (the default path, pivot
    /// coefficient exactly `+-1`), moving the remaining terms across the
    /// equals sign flips their sign whenever the pivot itself was positive.
    /// `eliminate` calls this with `do_normal_inversion = false` because it
    /// immediately re-derives the correct sign via modular reduction instead.
    pub fn solve_for(&self, term: &Term, do_normal_inversion: bool) -> DeducedEquation {
        let mut new_terms: Vec<Term> = self
            .left_side
            .terms()
            .iter()
            .filter(|t| t.variable != term.variable)
            .cloned()
            .collect();

        let coefficient_positive = !term.coefficient.is_negative();
        let do_coefficient_inversion = do_normal_inversion && coefficient_positive;

        if do_coefficient_inversion {
            let minus_one = BigInt::from(-1i64);
            for t in &mut new_terms {
                t.divide_coefficient_by(&minus_one)
                    .expect("dividing by -1 never fails");
            }
        }

        let do_constant_inversion = !do_normal_inversion || coefficient_positive;
        let new_right = if do_constant_inversion {
            self.right_side.clone()
        } else {
            -&self.right_side
        };

        DeducedEquation::new(term.variable, Sum::new(new_terms), new_right)
    }

    /// Solves for `term`'s variable while introducing `fresh_variable` to
    /// absorb the part of the coefficient that doesn't fit in `{-1, 0, 1}`.
    /// Precondition: `|term.coefficient| >= 2`.
    ///
    /// Every coefficient the result carries on its right side has magnitude
    /// at most `(|term.coefficient| + 1) / 2`, strictly smaller than
    /// `|term.coefficient|` -- this is what keeps the outer solve loop
    /// terminating.
    pub fn eliminate(&self, term: &Term, fresh_variable: VariableId) -> Result<DeducedEquation> {
        let modulus = &term.coefficient + &BigInt::from(1i64);

        let mut deduced = self.solve_for(term, false);
        deduced.coefficients_modulo(&modulus)?;
        deduced.add_term(Term::new(-&modulus, fresh_variable));
        deduced.right_side_constant = -deduced.right_side_constant.sym_mod(&modulus)?;

        Ok(deduced)
    }

    /// Folds a deduced equation into this one, eliminating
    /// `deduced.target` from `left_side` by merging in its right-hand sum
    /// (scaled by the coefficient `deduced.target` had here).
    pub fn substitute_deduced(&mut self, deduced: &DeducedEquation) {
        let Some(scale) = self
            .left_side
            .set_coefficient_of_variable_to_zero(deduced.target)
        else {
            return;
        };

        self.left_side = self.left_side.merge_scaled(&deduced.right_side_terms, &scale);
        self.right_side -= &(&scale * &deduced.right_side_constant);
    }

    /// Folds a known value for `variable` into this equation.
    pub fn substitute_assignment(&mut self, variable: VariableId, value: &BigInt) {
        if let Some(coefficient) = self.left_side.set_coefficient_of_variable_to_zero(variable) {
            self.right_side -= &(&coefficient * value);
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left_side, self.right_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VariableId {
        VariableId(i)
    }

    fn term(c: i64, var: usize) -> Term {
        Term::new(BigInt::from(c), v(var))
    }

    fn eq(terms: Vec<Term>, right: i64) -> Equation {
        Equation::new(Sum::new(terms), BigInt::from(right))
    }

    #[test]
    fn simplify_divides_both_sides() {
        // S5: 4x0 + 8x1 + 16x2 = 24 -> x0 + 2x1 + 4x2 = 6
        let mut e = eq(vec![term(4, 0), term(8, 1), term(16, 2)], 24);
        assert_eq!(e.simplify().unwrap(), SimplificationResult::Ok);
        assert_eq!(e.left_side().terms()[0].coefficient, BigInt::from(1));
        assert_eq!(e.left_side().terms()[1].coefficient, BigInt::from(2));
        assert_eq!(e.left_side().terms()[2].coefficient, BigInt::from(4));
        assert_eq!(*e.right_side(), BigInt::from(6));
    }

    #[test]
    fn simplify_detects_conflict_from_unsolvable_gcd() {
        // S2: 7x0 + 21x1 + 28x2 = 8, gcd(7,21,28)=7 does not divide 8.
        let mut e = eq(vec![term(7, 0), term(21, 1), term(28, 2)], 8);
        assert_eq!(e.simplify().unwrap(), SimplificationResult::Conflict);
    }

    #[test]
    fn simplify_of_zero_equals_zero_is_empty() {
        let mut e = eq(vec![term(0, 0)], 0);
        assert_eq!(e.simplify().unwrap(), SimplificationResult::IsEmpty);
    }

    #[test]
    fn simplify_of_zero_equals_nonzero_is_conflict() {
        // S4: 0*x0 = 1
        let mut e = eq(vec![term(0, 0)], 1);
        assert_eq!(e.simplify().unwrap(), SimplificationResult::Conflict);
    }

    #[test]
    fn invert_is_its_own_inverse() {
        let mut e = eq(vec![term(3, 0), term(-2, 1)], 5);
        let original = e.clone();
        e.invert().unwrap();
        e.invert().unwrap();
        assert_eq!(e, original);
    }

    #[test]
    fn solve_for_unit_coefficient_round_trips_to_zero_equals_zero() {
        // 2x0 + x1 = 5, solve for x1 (coefficient 1), substitute back in.
        let mut e = eq(vec![term(2, 0), term(1, 1)], 5);
        let deduced = e.solve_for(&term(1, 1), true);
        e.substitute_deduced(&deduced);
        assert!(e.left_side().terms().iter().all(Term::is_zero));
        assert!(e.right_side().is_zero());
    }

    #[test]
    fn solve_for_truth_table() {
        // x1 has coefficient +1: normal inversion negates the other terms
        // and leaves the constant untouched.
        let e = eq(vec![term(2, 0), term(1, 1)], 5);
        let d = e.solve_for(&term(1, 1), true);
        assert_eq!(d.right_side_terms.terms()[0].coefficient, BigInt::from(-2));
        assert_eq!(d.right_side_constant, BigInt::from(5));

        // Same equation, doNormalInversion = false: no sign flip at all.
        let d2 = e.solve_for(&term(1, 1), false);
        assert_eq!(d2.right_side_terms.terms()[0].coefficient, BigInt::from(2));
        assert_eq!(d2.right_side_constant, BigInt::from(5));

        // Pivot coefficient negative, normal inversion requested: constant
        // flips sign, other terms keep theirs.
        let e2 = eq(vec![term(2, 0), term(-1, 1)], 5);
        let d3 = e2.solve_for(&term(-1, 1), true);
        assert_eq!(d3.right_side_terms.terms()[0].coefficient, BigInt::from(2));
        assert_eq!(d3.right_side_constant, BigInt::from(-5));
    }

    #[test]
    fn eliminate_bounds_new_coefficients() {
        // 5x0 + 3x1 = 11, eliminate x0 (coefficient 5) introducing x2.
        let e = eq(vec![term(5, 0), term(3, 1)], 11);
        let deduced = e.eliminate(&term(5, 0), v(2)).unwrap();
        let bound = (5i64 + 1) / 2;
        for t in deduced.right_side_terms.terms() {
            if t.variable != v(2) {
                assert!(t.coefficient.abs() <= BigInt::from(bound));
            }
        }
    }

    #[test]
    fn substitute_assignment_folds_constant() {
        let mut e = eq(vec![term(2, 0), term(3, 1)], 10);
        e.substitute_assignment(v(1), &BigInt::from(2));
        // 2x0 + 3*2 = 10 -> 2x0 = 4
        assert!(e.left_side().terms().iter().find(|t| t.variable == v(1)).unwrap().is_zero());
        assert_eq!(*e.right_side(), BigInt::from(4));
    }
}
