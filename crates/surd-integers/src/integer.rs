//! Signed arbitrary-precision integers.

use dashu::base::{Abs, Gcd};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A signed integer of unbounded magnitude.
///
/// Wraps [`dashu::integer::IBig`] so the rest of the workspace can expose a
/// stable API without committing to a particular backend.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates an integer from a machine word.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer from a string in the given radix.
    ///
    /// A leading `-` is accepted. Radix must be between 2 and 36.
    ///
    /// # Errors
    ///
    /// Returns a parse error when `source` is not a valid numeral in the
    /// requested radix.
    pub fn from_str_radix(
        source: &str,
        radix: u32,
    ) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(source, radix).map(Self)
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Sign of the value: `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0 == IBig::ZERO {
            0
        } else if self.0 > IBig::ZERO {
            1
        } else {
            -1
        }
    }

    /// Whether the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < IBig::ZERO
    }

    /// Greatest common divisor. The result is never negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Raises the value to a non-negative power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Consumes the wrapper and returns the backing value.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Borrows the backing value.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Converts to `i64` when the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Integer {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Integer {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Integer {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ops() {
        let a = Integer::new(6);
        let b = Integer::new(4);
        assert_eq!(a.clone() + b.clone(), Integer::new(10));
        assert_eq!(a.clone() - b.clone(), Integer::new(2));
        assert_eq!(a.clone() * b.clone(), Integer::new(24));
        assert_eq!(a.clone() / b.clone(), Integer::new(1));
        assert_eq!(a % b, Integer::new(2));
        assert_eq!(-Integer::new(7), Integer::new(-7));
    }

    #[test]
    fn truncated_division() {
        // Quotients round toward zero, matching the remainder sign.
        assert_eq!(Integer::new(-7) / Integer::new(2), Integer::new(-3));
        assert_eq!(Integer::new(-7) % Integer::new(2), Integer::new(-1));
        assert_eq!(Integer::new(7) % Integer::new(-2), Integer::new(1));
    }

    #[test]
    fn gcd() {
        let a = Integer::new(48);
        let b = Integer::new(-18);
        assert_eq!(a.gcd(&b), Integer::new(6));
        assert_eq!(Integer::new(0).gcd(&Integer::new(5)), Integer::new(5));
        assert_eq!(Integer::new(17).gcd(&Integer::new(13)), Integer::new(1));
    }

    #[test]
    fn signum_and_abs() {
        assert_eq!(Integer::new(-3).signum(), -1);
        assert_eq!(Integer::new(0).signum(), 0);
        assert_eq!(Integer::new(3).signum(), 1);
        assert_eq!(Integer::new(-3).abs(), Integer::new(3));
        assert!(Integer::new(-1).is_negative());
        assert!(!Integer::new(0).is_negative());
    }

    #[test]
    fn large_numbers() {
        let big = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let expected =
            Integer::from_str_radix("246913578024691357802469135780", 10).unwrap();
        assert_eq!(big.clone() + big.clone(), expected);
        assert!(big.to_i64().is_none());
        assert_eq!(Integer::new(-42).to_i64(), Some(-42));
    }

    #[test]
    fn powers() {
        assert_eq!(Integer::new(3).pow(4), Integer::new(81));
        assert_eq!(Integer::new(-2).pow(3), Integer::new(-8));
        assert_eq!(Integer::new(5).pow(0), Integer::new(1));
    }
}
