/*!

An ordered bag of [`Term`]s over distinct variables: `Σ coefficient * x[variable]`.

Terms are kept sorted by ascending variable id. That ordering is never
exploited inside this module for anything but `simplify`'s zero-removal, but
it is load-bearing for the merge `Equation::substitute` performs against a
`DeducedEquation`'s right-hand sum -- both sides assume a sorted merge is
possible, so every mutation here that could disturb the order is written to
preserve it instead.

*/

use std::cmp::Ordering;
use std::fmt;

use crate::bigint::BigInt;
use crate::error::Result;
use crate::term::Term;
use crate::variable::VariableId;

/// `Σ coefficient_i * x[variable_i]`, terms kept sorted by variable id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sum {
    terms: Vec<Term>,
}

impl Sum {
    pub fn new(terms: Vec<Term>) -> Self {
        Sum { terms }
    }

    pub fn empty() -> Self {
        Sum { terms: Vec::new() }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }

    /// Appends a term. The caller is responsible for keeping variable ids
    /// unique within the sum and, if order matters to later consumers,
    /// inserted in ascending order.
    pub fn add_term(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// The term with the smallest nonzero `|coefficient|`. Ties go to the
    /// first occurrence. `None` on an all-zero sum.
    pub fn lowest_coefficient_term(&self) -> Option<&Term> {
        self.terms
            .iter()
            .filter(|t| !t.is_zero())
            .min_by(|a, b| a.coefficient.abs_cmp(&b.coefficient))
    }

    /// The term with the largest `|coefficient|`, skipping zeros. Not on the
    /// solver's pivot-selection path; kept for parity with the reference
    /// engine's diagnostic output.
    pub fn highest_coefficient_term(&self) -> Option<&Term> {
        self.terms
            .iter()
            .filter(|t| !t.is_zero())
            .max_by(|a, b| a.coefficient.abs_cmp(&b.coefficient))
    }

    /// Deletes zero-coefficient terms, then divides every remaining
    /// coefficient by their gcd. Returns the gcd, or `None` if nothing was
    /// left (the sum was identically zero).
    pub fn simplify(&mut self) -> Option<BigInt> {
        self.terms.retain(|t| !t.is_zero());

        let mut gcd = BigInt::zero();
        for term in &self.terms {
            gcd = BigInt::gcd(&gcd, &term.coefficient);
        }

        if gcd.is_zero() {
            return None;
        }

        for term in &mut self.terms {
            // Exact by construction: gcd divides every remaining coefficient.
            term.divide_coefficient_by(&gcd)
                .expect("gcd is nonzero and divides every coefficient");
        }

        Some(gcd)
    }

    pub fn divide_coefficients_by(&mut self, divisor: &BigInt) -> Result<()> {
        for term in &mut self.terms {
            term.divide_coefficient_by(divisor)?;
        }
        Ok(())
    }

    /// Replaces each coefficient `a` with `sym_mod(a, modulus)`. May leave
    /// zero-coefficient slots behind; callers that need a clean sum should
    /// `simplify` afterwards.
    pub fn coefficients_modulo(&mut self, modulus: &BigInt) -> Result<()> {
        for term in &mut self.terms {
            term.coefficient_modulo(modulus)?;
        }
        Ok(())
    }

    /// Finds the term for `variable`, zeroes its coefficient in place (the
    /// slot stays, preserving order), and returns the coefficient it had.
    pub fn set_coefficient_of_variable_to_zero(&mut self, variable: VariableId) -> Option<BigInt> {
        let term = self.terms.iter_mut().find(|t| t.variable == variable)?;
        let old = term.coefficient.clone();
        term.set_coefficient_to_zero();
        Some(old)
    }

    /// Merges `self` with `other`'s terms, scaling `other`'s coefficients by
    /// `scale` as they're folded in, assuming both lists are sorted by
    /// ascending variable id. Matching variables combine additively; a
    /// resulting zero coefficient drops the term. Used by
    /// [`crate::Equation::substitute`] to fold a deduced equation's
    /// right-hand sum into an equation's left side.
    pub(crate) fn merge_scaled(&self, other: &Sum, scale: &BigInt) -> Sum {
        let mut merged = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut left = self.terms.iter().peekable();
        let mut right = other.terms.iter().peekable();

        loop {
            match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => match l.variable.cmp(&r.variable) {
                    Ordering::Less => {
                        if !l.is_zero() {
                            merged.push((*l).clone());
                        }
                        left.next();
                    }
                    Ordering::Greater => {
                        let coefficient = &r.coefficient * scale;
                        if !coefficient.is_zero() {
                            merged.push(Term::new(coefficient, r.variable));
                        }
                        right.next();
                    }
                    Ordering::Equal => {
                        let coefficient = &l.coefficient + &(&r.coefficient * scale);
                        if !coefficient.is_zero() {
                            merged.push(Term::new(coefficient, l.variable));
                        }
                        left.next();
                        right.next();
                    }
                },
                (Some(l), None) => {
                    if !l.is_zero() {
                        merged.push((*l).clone());
                    }
                    left.next();
                }
                (None, Some(r)) => {
                    let coefficient = &r.coefficient * scale;
                    if !coefficient.is_zero() {
                        merged.push(Term::new(coefficient, r.variable));
                    }
                    right.next();
                }
                (None, None) => break,
            }
        }

        Sum::new(merged)
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(c: i64, v: usize) -> Term {
        Term::new(BigInt::from(c), VariableId(v))
    }

    #[test]
    fn simplify_divides_by_gcd() {
        let mut sum = Sum::new(vec![term(4, 0), term(8, 1), term(16, 2)]);
        let gcd = sum.simplify().unwrap();
        assert_eq!(gcd, BigInt::from(4));
        assert_eq!(sum.terms()[0].coefficient, BigInt::from(1));
        assert_eq!(sum.terms()[1].coefficient, BigInt::from(2));
        assert_eq!(sum.terms()[2].coefficient, BigInt::from(4));
    }

    #[test]
    fn simplify_of_all_zero_sum_is_none() {
        let mut sum = Sum::new(vec![term(0, 0), term(0, 1)]);
        assert!(sum.simplify().is_none());
        assert!(sum.terms().is_empty());
    }

    #[test]
    fn lowest_coefficient_term_skips_zero() {
        let sum = Sum::new(vec![term(0, 0), term(-3, 1), term(2, 2)]);
        assert_eq!(sum.lowest_coefficient_term().unwrap().variable, VariableId(2));
    }

    #[test]
    fn highest_coefficient_term_skips_zero() {
        let sum = Sum::new(vec![term(0, 0), term(-3, 1), term(7, 2)]);
        assert_eq!(sum.highest_coefficient_term().unwrap().variable, VariableId(2));
    }

    #[test]
    fn set_coefficient_of_variable_to_zero_keeps_slot() {
        let mut sum = Sum::new(vec![term(5, 0), term(7, 1)]);
        let old = sum.set_coefficient_of_variable_to_zero(VariableId(0)).unwrap();
        assert_eq!(old, BigInt::from(5));
        assert_eq!(sum.terms().len(), 2);
        assert!(sum.terms()[0].is_zero());
    }

    #[test]
    fn set_coefficient_of_variable_to_zero_absent_returns_none() {
        let mut sum = Sum::new(vec![term(5, 0)]);
        assert!(sum.set_coefficient_of_variable_to_zero(VariableId(9)).is_none());
    }

    #[test]
    fn merge_scaled_combines_matching_variables_and_drops_cancellation() {
        let left = Sum::new(vec![term(3, 0), term(5, 2)]);
        let right = Sum::new(vec![term(-3, 0), term(1, 1)]);
        let merged = left.merge_scaled(&right, &BigInt::from(1));
        // x0: 3 + (-3)*1 = 0 -> dropped. x1: 0 + 1*1 = 1. x2: 5 + 0 = 5.
        assert_eq!(merged.terms().len(), 2);
        assert_eq!(merged.terms()[0].variable, VariableId(1));
        assert_eq!(merged.terms()[1].variable, VariableId(2));
    }

    #[test]
    fn merge_scaled_preserves_ascending_order() {
        let left = Sum::new(vec![term(1, 0), term(1, 3)]);
        let right = Sum::new(vec![term(1, 1), term(1, 2)]);
        let merged = left.merge_scaled(&right, &BigInt::from(2));
        let ids: Vec<usize> = merged.terms().iter().map(|t| t.variable.index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
