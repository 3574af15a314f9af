//! Rational intervals with outward arithmetic.
//!
//! Intervals steer the numeric side of algebraic number arithmetic: an
//! operation on intervals encloses every value the operation can take on
//! points of the operands. Comparisons are three-valued, answering only
//! when the intervals are disjoint.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use surd_rings::{OrderedRing, Q};

/// An interval with rational endpoints.
///
/// The endpoints are stored as given; degenerate (point) intervals are
/// allowed. Isolating intervals of algebraic numbers are read as the
/// half-open `(lo, hi]`, while arithmetic treats both endpoints as
/// attained, which errs on the wide side and stays sound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    lo: Q,
    hi: Q,
}

impl Interval {
    /// Creates the interval with the given endpoints. Ordering is not
    /// checked here; consumers that require `lo <= hi` validate it.
    #[must_use]
    pub fn new(lo: Q, hi: Q) -> Self {
        Self { lo, hi }
    }

    /// The degenerate interval holding the single point `v`.
    #[must_use]
    pub fn point(v: Q) -> Self {
        Self {
            lo: v.clone(),
            hi: v,
        }
    }

    /// Lower endpoint.
    #[must_use]
    pub fn lo(&self) -> &Q {
        &self.lo
    }

    /// Upper endpoint.
    #[must_use]
    pub fn hi(&self) -> &Q {
        &self.hi
    }

    /// Width `hi - lo`.
    #[must_use]
    pub fn width(&self) -> Q {
        self.hi.clone() - self.lo.clone()
    }

    /// Signs of the two endpoints.
    #[must_use]
    pub fn sign(&self) -> (i8, i8) {
        (self.lo.signum(), self.hi.signum())
    }

    /// Whether every point of `self` is strictly below every point of
    /// `other`. `None` means the intervals overlap and the question has
    /// no uniform answer.
    #[must_use]
    pub fn maybe_lt(&self, other: &Self) -> Option<bool> {
        if self.hi < other.lo {
            Some(true)
        } else if other.hi <= self.lo {
            Some(false)
        } else {
            None
        }
    }

    /// Whether every point of `self` is at most every point of `other`.
    #[must_use]
    pub fn maybe_le(&self, other: &Self) -> Option<bool> {
        if self.hi <= other.lo {
            Some(true)
        } else if other.hi < self.lo {
            Some(false)
        } else {
            None
        }
    }

    /// Whether the intervals pin down equality: `Some(false)` when they
    /// are disjoint, `Some(true)` when both are the same point.
    #[must_use]
    pub fn maybe_eq(&self, other: &Self) -> Option<bool> {
        if self.hi < other.lo || other.hi < self.lo {
            Some(false)
        } else if self.lo == self.hi && other.lo == other.hi {
            Some(self.lo == other.lo)
        } else {
            None
        }
    }

    /// The intersection, read half-open: `None` when `(lo, hi]` would be
    /// empty.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        let lo = if self.lo < other.lo { &other.lo } else { &self.lo };
        let hi = if self.hi < other.hi { &self.hi } else { &other.hi };
        if lo < hi {
            Some(Self::new(lo.clone(), hi.clone()))
        } else {
            None
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval {
            lo: self.lo + rhs.lo,
            hi: self.hi + rhs.hi,
        }
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval {
            lo: self.lo - rhs.hi,
            hi: self.hi - rhs.lo,
        }
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        let corners = [
            self.lo.clone() * rhs.lo.clone(),
            self.lo * rhs.hi.clone(),
            self.hi.clone() * rhs.lo,
            self.hi * rhs.hi,
        ];
        let mut lo = corners[0].clone();
        let mut hi = corners[0].clone();
        for c in &corners[1..] {
            if *c < lo {
                lo = c.clone();
            }
            if *c > hi {
                hi = c.clone();
            }
        }
        Interval { lo, hi }
    }
}

impl Div for Interval {
    type Output = Interval;

    /// # Panics
    ///
    /// Panics when `rhs` contains zero.
    fn div(self, rhs: Interval) -> Interval {
        assert!(
            rhs.lo.signum() * rhs.hi.signum() > 0,
            "cannot divide by an interval containing zero"
        );
        self * Interval::new(rhs.hi.recip(), rhs.lo.recip())
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Add for &Interval {
    type Output = Interval;

    fn add(self, rhs: &Interval) -> Interval {
        self.clone() + rhs.clone()
    }
}

impl Sub for &Interval {
    type Output = Interval;

    fn sub(self, rhs: &Interval) -> Interval {
        self.clone() - rhs.clone()
    }
}

impl Mul for &Interval {
    type Output = Interval;

    fn mul(self, rhs: &Interval) -> Interval {
        self.clone() * rhs.clone()
    }
}

impl Div for &Interval {
    type Output = Interval;

    fn div(self, rhs: &Interval) -> Interval {
        self.clone() / rhs.clone()
    }
}

impl Neg for &Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        -self.clone()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
