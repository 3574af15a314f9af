//! The field of rational numbers.

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use surd_integers::Rational;

/// The field Q of exact rationals.
///
/// This is the coefficient field used throughout root isolation: interval
/// endpoints, Sturm sequences and defining polynomials all live over `Q`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates `numerator / denominator` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics when `denominator` is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self(Rational::from_i64(numerator, denominator))
    }

    /// Creates a whole number.
    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        Self(Rational::from(value))
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics when the value is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self(self.0.recip())
    }

    /// Consumes the wrapper and returns the backing rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Borrows the backing rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        use num_traits::Zero;
        Self(Rational::zero())
    }

    fn one() -> Self {
        use num_traits::One;
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp))
    }
}

impl CommutativeRing for Q {}

impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (Self(self.0.clone() / other.0.clone()), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        // In a field every non-zero element divides every other.
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.recip())
        }
    }
}

impl OrderedRing for Q {
    fn signum(&self) -> i8 {
        self.0.signum()
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
