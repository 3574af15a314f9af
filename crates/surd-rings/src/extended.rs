//! The number line completed with two infinities.

use crate::traits::{Field, OrderedRing, Ring};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value of `K` extended with `-inf` and `+inf`.
///
/// Root searches over the whole line are phrased with these endpoints and
/// later clamped to a finite bound derived from the polynomial. Arithmetic
/// follows the usual limit rules; the indeterminate forms (`inf - inf`,
/// `0 * inf`, `inf / inf`) panic rather than pick an arbitrary answer.
///
/// Two infinities of the same sign do not compare: they stand for "larger
/// than any finite value", not for one particular value. `partial_cmp`
/// returns `None` for such a pair and `==` is false.
#[derive(Clone, Debug)]
pub enum Extended<K> {
    /// Below every finite value.
    NegInfinity,
    /// An ordinary finite value.
    Finite(K),
    /// Above every finite value.
    PosInfinity,
}

impl<K> Extended<K> {
    /// Whether the value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Extended::Finite(_))
    }

    /// Borrows the finite value, if there is one.
    #[must_use]
    pub fn finite(&self) -> Option<&K> {
        match self {
            Extended::Finite(v) => Some(v),
            _ => None,
        }
    }
}

impl<K: OrderedRing> Extended<K> {
    /// Sign of the value: `-1`, `0` or `1`. Infinities carry their sign.
    #[must_use]
    pub fn sign(&self) -> i8 {
        match self {
            Extended::NegInfinity => -1,
            Extended::Finite(v) => v.signum(),
            Extended::PosInfinity => 1,
        }
    }

    /// Clamps the value into the finite range `[lo, hi]`.
    ///
    /// Infinities map to the corresponding endpoint.
    #[must_use]
    pub fn clamp(&self, lo: K, hi: K) -> K {
        debug_assert!(lo <= hi);
        match self {
            Extended::NegInfinity => lo,
            Extended::PosInfinity => hi,
            Extended::Finite(v) => {
                if *v < lo {
                    lo
                } else if hi < *v {
                    hi
                } else {
                    v.clone()
                }
            }
        }
    }
}

impl<K: PartialEq> PartialEq for Extended<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Extended::Finite(a), Extended::Finite(b)) => a == b,
            _ => false,
        }
    }
}

impl<K: Ord + PartialEq> PartialOrd for Extended<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Extended::Finite(a), Extended::Finite(b)) => Some(a.cmp(b)),
            (Extended::NegInfinity, Extended::NegInfinity)
            | (Extended::PosInfinity, Extended::PosInfinity) => None,
            (Extended::NegInfinity, _) | (_, Extended::PosInfinity) => Some(Ordering::Less),
            (Extended::PosInfinity, _) | (_, Extended::NegInfinity) => Some(Ordering::Greater),
        }
    }
}

impl<K: Ring> Neg for Extended<K> {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Extended::NegInfinity => Extended::PosInfinity,
            Extended::Finite(v) => Extended::Finite(-v),
            Extended::PosInfinity => Extended::NegInfinity,
        }
    }
}

impl<K: Ring> Add for Extended<K> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extended::Finite(a), Extended::Finite(b)) => Extended::Finite(a + b),
            (Extended::PosInfinity, Extended::NegInfinity)
            | (Extended::NegInfinity, Extended::PosInfinity) => {
                panic!("undefined sum of opposite infinities")
            }
            (Extended::PosInfinity, _) | (_, Extended::PosInfinity) => Extended::PosInfinity,
            (Extended::NegInfinity, _) | (_, Extended::NegInfinity) => Extended::NegInfinity,
        }
    }
}

impl<K: Ring> Sub for Extended<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<K: OrderedRing> Mul for Extended<K> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extended::Finite(a), Extended::Finite(b)) => Extended::Finite(a * b),
            (Extended::PosInfinity, Extended::PosInfinity)
            | (Extended::NegInfinity, Extended::NegInfinity) => Extended::PosInfinity,
            (Extended::PosInfinity, Extended::NegInfinity)
            | (Extended::NegInfinity, Extended::PosInfinity) => Extended::NegInfinity,
            (Extended::Finite(a), Extended::PosInfinity)
            | (Extended::PosInfinity, Extended::Finite(a)) => match a.signum() {
                0 => panic!("undefined product of zero and infinity"),
                s if s > 0 => Extended::PosInfinity,
                _ => Extended::NegInfinity,
            },
            (Extended::Finite(a), Extended::NegInfinity)
            | (Extended::NegInfinity, Extended::Finite(a)) => match a.signum() {
                0 => panic!("undefined product of zero and infinity"),
                s if s > 0 => Extended::NegInfinity,
                _ => Extended::PosInfinity,
            },
        }
    }
}

impl<K: Field + OrderedRing> Div for Extended<K> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Extended::Finite(a), Extended::Finite(b)) => Extended::Finite(a.field_div(&b)),
            (Extended::Finite(_), Extended::PosInfinity | Extended::NegInfinity) => {
                Extended::Finite(K::zero())
            }
            (
                Extended::PosInfinity | Extended::NegInfinity,
                Extended::PosInfinity | Extended::NegInfinity,
            ) => panic!("undefined quotient of infinities"),
            (Extended::PosInfinity, Extended::Finite(b)) => match b.signum() {
                0 => panic!("division by zero"),
                s if s > 0 => Extended::PosInfinity,
                _ => Extended::NegInfinity,
            },
            (Extended::NegInfinity, Extended::Finite(b)) => match b.signum() {
                0 => panic!("division by zero"),
                s if s > 0 => Extended::NegInfinity,
                _ => Extended::PosInfinity,
            },
        }
    }
}

impl<K: fmt::Display> fmt::Display for Extended<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extended::NegInfinity => write!(f, "-inf"),
            Extended::Finite(v) => write!(f, "{v}"),
            Extended::PosInfinity => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rationals::Q;

    fn fin(n: i64) -> Extended<Q> {
        Extended::Finite(Q::from_integer(n))
    }

    #[test]
    fn clamp_table() {
        let lo = Q::from_integer(1);
        let hi = Q::from_integer(3);
        assert_eq!(Extended::<Q>::NegInfinity.clamp(lo.clone(), hi.clone()), lo);
        assert_eq!(fin(0).clamp(lo.clone(), hi.clone()), lo);
        assert_eq!(fin(2).clamp(lo.clone(), hi.clone()), Q::from_integer(2));
        assert_eq!(fin(4).clamp(lo.clone(), hi.clone()), hi);
        assert_eq!(Extended::<Q>::PosInfinity.clamp(lo, hi.clone()), hi);
    }

    #[test]
    fn ordering() {
        assert!(Extended::<Q>::NegInfinity < fin(-1000));
        assert!(fin(1000) < Extended::<Q>::PosInfinity);
        assert!(Extended::<Q>::NegInfinity < Extended::<Q>::PosInfinity);
        assert!(fin(1) < fin(2));
    }

    #[test]
    fn same_sign_infinities_do_not_compare() {
        let a = Extended::<Q>::PosInfinity;
        let b = Extended::<Q>::PosInfinity;
        assert_eq!(a.partial_cmp(&b), None);
        assert!(a != b);
        let c = Extended::<Q>::NegInfinity;
        let d = Extended::<Q>::NegInfinity;
        assert_eq!(c.partial_cmp(&d), None);
        assert!(c != d);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(fin(2) + fin(3), fin(5));
        assert!(matches!(
            Extended::<Q>::PosInfinity + fin(5),
            Extended::PosInfinity
        ));
        assert!(matches!(fin(5) - Extended::<Q>::PosInfinity, Extended::NegInfinity));
        assert!(matches!(
            Extended::<Q>::NegInfinity * Extended::<Q>::NegInfinity,
            Extended::PosInfinity
        ));
        assert!(matches!(
            fin(-2) * Extended::<Q>::PosInfinity,
            Extended::NegInfinity
        ));
        assert_eq!(fin(7) / Extended::<Q>::NegInfinity, fin(0));
        assert!(matches!(
            Extended::<Q>::PosInfinity / fin(-3),
            Extended::NegInfinity
        ));
    }

    #[test]
    #[should_panic(expected = "opposite infinities")]
    fn opposite_infinities_do_not_sum() {
        let _ = Extended::<Q>::PosInfinity - Extended::<Q>::PosInfinity;
    }

    #[test]
    #[should_panic(expected = "zero and infinity")]
    fn zero_times_infinity_is_undefined() {
        let _ = fin(0) * Extended::<Q>::PosInfinity;
    }

    #[test]
    #[should_panic(expected = "quotient of infinities")]
    fn infinity_over_infinity_is_undefined() {
        let _ = Extended::<Q>::PosInfinity / Extended::<Q>::PosInfinity;
    }

    #[test]
    fn sign() {
        assert_eq!(Extended::<Q>::NegInfinity.sign(), -1);
        assert_eq!(fin(0).sign(), 0);
        assert_eq!(fin(-7).sign(), -1);
        assert_eq!(Extended::<Q>::PosInfinity.sign(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Extended::<Q>::NegInfinity.to_string(), "-inf");
        assert_eq!(fin(2).to_string(), "2");
        assert_eq!(Extended::Finite(Q::new(1, 2)).to_string(), "1/2");
        assert_eq!(Extended::<Q>::PosInfinity.to_string(), "+inf");
    }
}
