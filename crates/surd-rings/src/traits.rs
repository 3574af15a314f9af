//! Core algebraic structure traits.
//!
//! The tower is ordered by strength: [`Ring`] gives addition and
//! multiplication, [`EuclideanDomain`] adds division with remainder, and
//! [`Field`] adds inverses. [`OrderedRing`] is orthogonal and supplies a
//! total order compatible with the arithmetic. Generic algorithms in the
//! polynomial and real layers ask for the weakest structure they can work
//! with, so the same code runs over integers, rationals and polynomial
//! coefficients alike.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring with identity.
///
/// Implementors must satisfy the usual laws:
///
/// - `(a + b) + c == a + (b + c)` and `a + b == b + a`
/// - `a + zero() == a` and `a + (-a) == zero()`
/// - `(a * b) * c == a * (b * c)` and `a * one() == one() * a == a`
/// - `a * (b + c) == a * b + a * c`
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Sized
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Whether the value is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Whether the value is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Adds the value to itself `n` times (negated for negative `n`).
    ///
    /// The default is repeated addition; implementors with a cheaper
    /// scalar product should override it.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        let mut count = n.unsigned_abs();
        while count > 0 {
            result = result + self.clone();
            count -= 1;
        }
        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Raises the value to a non-negative power by repeated squaring.
    fn pow(&self, exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            e >>= 1;
        }
        result
    }
}

/// A ring whose multiplication commutes: `a * b == b * a`.
pub trait CommutativeRing: Ring {}

/// A commutative ring with no zero divisors: `a * b == zero()` implies
/// that `a` or `b` is zero.
pub trait IntegralDomain: CommutativeRing {}

/// An integral domain with division and remainder.
///
/// `div_rem` must satisfy `a == q * b + r` where the remainder is smaller
/// than `b` under the domain's Euclidean size function.
pub trait EuclideanDomain: IntegralDomain {
    /// Divides returning `(quotient, remainder)`.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// The quotient of [`EuclideanDomain::div_rem`].
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// The remainder of [`EuclideanDomain::div_rem`].
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Greatest common divisor via the Euclidean algorithm.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a
    }
}

/// A Euclidean domain in which every non-zero element has an inverse.
pub trait Field: EuclideanDomain {
    /// The multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// Exact division.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

/// A ring with a total order compatible with its arithmetic.
pub trait OrderedRing: Ring + Ord {
    /// Sign of the value: `-1`, `0` or `1`.
    fn signum(&self) -> i8;

    /// Absolute value.
    fn abs(&self) -> Self {
        if self.signum() < 0 {
            -self.clone()
        } else {
            self.clone()
        }
    }
}
