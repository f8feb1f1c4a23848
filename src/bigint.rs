/*!

Arbitrary-precision signed integer, the numeric substrate the whole solver
runs on. This wraps [`num_bigint::BigInt`] rather than exposing it directly
so that the two operations the solver actually needs beyond the usual ring
operations -- `gcd` and the symmetric (balanced) modulo `sym_mod` -- live
next to the type they operate on.

Coefficients produced by [`eliminate`](crate::Equation::eliminate) are kept
small by `sym_mod`, but nothing here assumes a coefficient fits in a machine
word; a handful of terms with astronomically large coefficients are handled
exactly the same way as small ones.

*/

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_bigint::BigInt as Inner;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::{Error, Result};

/// Arbitrary-precision signed integer used for every coefficient, constant,
/// and variable value in the solver.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(Inner);

impl BigInt {
    pub fn zero() -> Self {
        BigInt(Inner::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn abs(&self) -> Self {
        BigInt(self.0.abs())
    }

    /// Ordering of `|a|` vs `|b|`, used for pivot selection.
    pub fn abs_cmp(&self, other: &Self) -> Ordering {
        self.0.abs().cmp(&other.0.abs())
    }

    /// Nonnegative greatest common divisor. `gcd(0, 0) == 0`.
    pub fn gcd(a: &Self, b: &Self) -> Self {
        BigInt(a.0.gcd(&b.0))
    }

    /// Exact division. The caller must guarantee `divisor` divides `self`;
    /// this is never checked, only the zero-divisor case is.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(BigInt(&self.0 / &divisor.0))
    }

    /// Whether `divisor` divides `self` with no remainder. Sign-independent:
    /// any exact divisor leaves a zero remainder regardless of rounding
    /// convention.
    pub fn is_divisible_by(&self, divisor: &Self) -> Result<bool> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok((&self.0 % &divisor.0).is_zero())
    }

    /// Symmetric (balanced) modulo: the unique `r` with `r == a (mod m)` and
    /// `-m/2 <= r < m/2` for even `m`, `|r| <= (m-1)/2` for odd `m`. On the
    /// even boundary `r == m/2` the negative representative is returned.
    pub fn sym_mod(&self, m: &Self) -> Result<Self> {
        if m.is_zero() {
            return Err(Error::DivideByZero);
        }
        let m_abs = m.0.abs();
        let a_mod_m = self.0.mod_floor(&m_abs);
        let doubled = &a_mod_m * Inner::from(2);
        if doubled < m_abs {
            Ok(BigInt(a_mod_m))
        } else {
            Ok(BigInt(a_mod_m - m_abs))
        }
    }

    pub fn to_i64(&self) -> Option<i64> {
        num_traits::ToPrimitive::to_i64(&self.0)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt(Inner::from(value))
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        BigInt(Inner::from(value))
    }
}

impl From<usize> for BigInt {
    fn from(value: usize) -> Self {
        BigInt(Inner::from(value))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Inner::from_str(s)
            .map(BigInt)
            .map_err(|e| Error::Parse(format!("not an integer: {e}")))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt(-self.0)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt(-&self.0)
    }
}

impl Add for &BigInt {
    type Output = BigInt;
    fn add(self, other: &BigInt) -> BigInt {
        BigInt(&self.0 + &other.0)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, other: &BigInt) -> BigInt {
        BigInt(&self.0 - &other.0)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, other: &BigInt) -> BigInt {
        BigInt(&self.0 * &other.0)
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        self.0 += &other.0;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, other: &BigInt) {
        self.0 -= &other.0;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        self.0 *= &other.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn sym_mod_table() {
        assert_eq!(big(13).sym_mod(&big(5)).unwrap(), big(-2));
        assert_eq!(big(-13).sym_mod(&big(5)).unwrap(), big(2));
        assert_eq!(big(12).sym_mod(&big(8)).unwrap(), big(-4));
        assert_eq!(big(17).sym_mod(&big(8)).unwrap(), big(1));
        assert_eq!(big(15).sym_mod(&big(6)).unwrap(), big(-3));
    }

    #[test]
    fn sym_mod_zero_modulus_is_an_error() {
        assert_eq!(big(1).sym_mod(&big(0)), Err(Error::DivideByZero));
    }

    #[test]
    fn sym_mod_congruence_holds() {
        for a in -20i64..20 {
            for m in 1i64..12 {
                let r = big(a).sym_mod(&big(m)).unwrap();
                let diff = &big(a) - &r;
                assert!(diff.is_divisible_by(&big(m)).unwrap());
                if m % 2 == 0 {
                    assert!(r >= big(-m / 2) && r < big(m / 2));
                } else {
                    assert!(r.abs() <= big((m - 1) / 2));
                }
            }
        }
    }

    #[test]
    fn gcd_of_zero_and_zero_is_zero() {
        assert_eq!(BigInt::gcd(&big(0), &big(0)), big(0));
    }

    #[test]
    fn abs_cmp_ignores_sign() {
        assert_eq!(big(-5).abs_cmp(&big(3)), Ordering::Greater);
    }
}
