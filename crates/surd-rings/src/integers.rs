//! The ring of integers.

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, OrderedRing, Ring};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use surd_integers::Integer;

/// The ring Z of arbitrary-precision integers.
///
/// A thin wrapper over [`Integer`] that plugs the scalar type into the
/// trait tower. Division truncates toward zero, so remainders carry the
/// sign of the dividend.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates an integer from a machine word.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Consumes the wrapper and returns the backing integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }

    /// Borrows the backing integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        use num_traits::Zero;
        Self(Integer::zero())
    }

    fn one() -> Self {
        use num_traits::One;
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp))
    }
}

impl CommutativeRing for Z {}

impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        (
            Self(self.0.clone() / other.0.clone()),
            Self(self.0.clone() % other.0.clone()),
        )
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }
}

impl OrderedRing for Z {
    fn signum(&self) -> i8 {
        self.0.signum()
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
