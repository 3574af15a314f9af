//! Real algebraic numbers with exact arithmetic.
//!
//! An [`AlgebraicReal`] is either a rational or an isolated root: a monic
//! square-free defining polynomial paired with a half-open rational
//! interval `(lo, hi]` containing exactly one of its real roots. Every
//! operation keeps the result in that shape, so comparisons never have to
//! guess: disjoint intervals decide directly, overlapping ones are settled
//! by a polynomial gcd or by bisecting both sides in lockstep.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::{debug, trace};
use surd_poly::algorithms::gcd::poly_gcd;
use surd_poly::algorithms::resultant::resultant;
use surd_poly::algorithms::squarefree::squarefree_part;
use surd_poly::{Poly, SturmSequence};
use surd_rings::{Extended, Field, OrderedRing, Q, Ring};

use crate::error::{RealError, Result};
use crate::interval::Interval;
use crate::roots::real_roots_between;

/// Hard cap on bisection steps in any single refinement loop. The loops
/// below all terminate in theory; the cap turns a reasoning bug into a
/// panic instead of a hang.
const MAX_REFINEMENT_STEPS: usize = 4096;

/// An exact real algebraic number.
///
/// Rational values are stored directly. Irrational values are stored as
/// the Sturm sequence of a monic square-free polynomial together with an
/// isolating interval, read half-open as `(lo, hi]`. Three invariants are
/// maintained for the root form: the interval does not straddle zero, the
/// polynomial does not vanish at either endpoint, and zero is not a root
/// of the polynomial. They keep [`AlgebraicReal::sign`] and
/// [`AlgebraicReal::recip`] interval-only operations, and they survive the
/// endpoint swaps of negation and reciprocal.
///
/// A root form may still happen to hold a rational value (the defining
/// polynomial is square-free, not irreducible); equality and ordering see
/// through this, [`AlgebraicReal::is_rational`] does not.
#[derive(Clone, Debug)]
pub struct AlgebraicReal {
    repr: Repr,
}

#[derive(Clone, Debug)]
enum Repr {
    Rational(Q),
    Algebraic(Box<IsolatedRoot>),
}

#[derive(Clone, Debug)]
struct IsolatedRoot {
    sturm: SturmSequence<Q>,
    interval: Interval,
    sign_at_hi: i8,
}

impl AlgebraicReal {
    /// The root of `f` isolated by the half-open interval `(lo, hi]`.
    ///
    /// The caller promises the interval contains exactly one real root of
    /// `f`. The representation is normalized: `f` is made monic and
    /// square-free, roots at zero and at the upper endpoint collapse to
    /// rationals, a linear leftover collapses to its rational root, and
    /// the interval is bisected until it no longer straddles zero and no
    /// neighbouring root of `f` sits on the excluded lower endpoint.
    ///
    /// # Errors
    ///
    /// [`RealError::InvalidInterval`] when `hi < lo` and
    /// [`RealError::ZeroPolynomial`] when `f` is zero.
    ///
    /// # Panics
    ///
    /// Panics when refinement fails to converge, which a genuinely
    /// isolating interval never triggers.
    pub fn new(f: Poly<Q>, interval: Interval) -> Result<Self> {
        let (mut lo, mut hi) = (interval.lo().clone(), interval.hi().clone());
        if hi < lo {
            return Err(RealError::InvalidInterval(lo, hi));
        }
        if f.is_zero() {
            return Err(RealError::ZeroPolynomial);
        }
        let zero = Q::zero();
        if lo < zero && zero <= hi && f.eval(&zero).is_zero() {
            return Ok(Self::from(zero));
        }
        if f.eval(&hi).is_zero() {
            return Ok(Self::from(hi));
        }

        // Zero is not the root, so factors of x can go.
        let mut coeffs = f.coeffs().to_vec();
        while coeffs.first().map_or(false, Ring::is_zero) {
            coeffs.remove(0);
        }
        let f = squarefree_part(&Poly::new(coeffs)).to_monic();

        if f.degree() == 1 {
            let root = -f.coeff(0);
            if lo < root && root <= hi {
                return Ok(Self::from(root));
            }
        }

        let sturm = SturmSequence::new(f);
        let mut steps = 0;
        // A root of f on the excluded lower endpoint belongs to a
        // neighbour; it never counts in (lo, hi], but reflection and
        // reversal swap the endpoints, so bisect it out along with any
        // straddle of zero.
        while (lo < zero && zero < hi) || sturm.first().eval(&lo).is_zero() {
            let (l, h) = sturm.next_interval(&lo, &hi);
            lo = l;
            hi = h;
            steps += 1;
            assert!(steps <= MAX_REFINEMENT_STEPS, "refinement did not converge");
        }
        // Bisection may have moved the upper endpoint onto the root.
        if sturm.first().eval(&hi).is_zero() {
            return Ok(Self::from(hi));
        }
        let sign_at_hi = sturm.first().sign_at(&hi);
        trace!("isolated root of {} in ({}, {}]", sturm.first(), lo, hi);
        Ok(Self {
            repr: Repr::Algebraic(Box::new(IsolatedRoot {
                sturm,
                interval: Interval::new(lo, hi),
                sign_at_hi,
            })),
        })
    }

    /// Whether the value is represented as a rational. A root form that
    /// happens to hold a rational value reports `false`; use comparison
    /// against a rational to detect that.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        matches!(&self.repr, Repr::Rational(_))
    }

    /// The rational value of a rational representation.
    ///
    /// # Errors
    ///
    /// [`RealError::NotRational`] for root forms.
    pub fn rational(&self) -> Result<Q> {
        match &self.repr {
            Repr::Rational(r) => Ok(r.clone()),
            Repr::Algebraic(_) => Err(RealError::NotRational),
        }
    }

    /// A monic polynomial with this number among its roots.
    #[must_use]
    pub fn defining_polynomial(&self) -> Poly<Q> {
        match &self.repr {
            Repr::Rational(r) => Poly::new(vec![-r.clone(), Q::one()]),
            Repr::Algebraic(root) => root.sturm.first().clone(),
        }
    }

    /// The current isolating interval; a point for rationals.
    #[must_use]
    pub fn isolating_interval(&self) -> Interval {
        match &self.repr {
            Repr::Rational(r) => Interval::point(r.clone()),
            Repr::Algebraic(root) => root.interval.clone(),
        }
    }

    /// One bisection step on an enclosure of this number. `self` is not
    /// mutated; callers thread the returned interval through repeated
    /// calls to narrow at their own pace.
    #[must_use]
    pub fn next_interval(&self, enclosure: &Interval) -> Interval {
        match &self.repr {
            Repr::Rational(r) => Interval::point(r.clone()),
            Repr::Algebraic(root) => root.refine(enclosure),
        }
    }

    /// The sign of the number: `-1`, `0` or `1`.
    #[must_use]
    pub fn sign(&self) -> i8 {
        match &self.repr {
            Repr::Rational(r) => r.signum(),
            // The interval never straddles zero and the root is never
            // zero, so one endpoint settles it.
            Repr::Algebraic(root) => {
                if root.interval.lo().signum() >= 0 {
                    1
                } else {
                    -1
                }
            }
        }
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`RealError::DivisionByZero`] for zero.
    pub fn recip(&self) -> Result<Self> {
        match &self.repr {
            Repr::Rational(r) => {
                if r.is_zero() {
                    return Err(RealError::DivisionByZero);
                }
                Ok(Self::from(r.recip()))
            }
            Repr::Algebraic(root) => {
                // Shrink away from zero so both endpoints invert.
                let mut iv = root.interval.clone();
                let mut steps = 0;
                while iv.lo().signum() <= 0 && iv.hi().signum() >= 0 {
                    iv = root.refine(&iv);
                    steps += 1;
                    assert!(steps <= MAX_REFINEMENT_STEPS, "refinement did not converge");
                }
                let inverted = Interval::new(iv.hi().recip(), iv.lo().recip());
                Ok(Self::new(root.sturm.first().reversed(), inverted)
                    .expect("reciprocal interval is isolating"))
            }
        }
    }

    /// Raises to an integer power. `pow(0)` is one, negative exponents
    /// invert first.
    ///
    /// # Errors
    ///
    /// [`RealError::DivisionByZero`] when zero is raised to a negative
    /// power.
    ///
    /// # Panics
    ///
    /// Panics when a rational base is raised to an exponent beyond
    /// `u32::MAX`.
    pub fn pow(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return Ok(Self::from(Q::one()));
        }
        if n < 0 {
            return self.recip()?.pow(-n);
        }
        match &self.repr {
            Repr::Rational(r) => {
                let exp = u32::try_from(n).expect("exponent fits in u32");
                Ok(Self::from(Ring::pow(r, exp)))
            }
            Repr::Algebraic(root) => {
                let f = root.sturm.first();
                // x^n reduced modulo f, then evaluated at the root. This
                // keeps the working degree below deg f throughout.
                let mut result = Poly::constant(Q::one());
                let mut base = Poly::x().div_rem(f).1;
                let mut e = n;
                while e > 0 {
                    if e & 1 == 1 {
                        result = (result * base.clone()).div_rem(f).1;
                    }
                    base = (base.clone() * base).div_rem(f).1;
                    e >>= 1;
                }
                Ok(eval_rational_poly(&result, self))
            }
        }
    }

    /// Raises to the rational power `exp`, combining [`Self::pow`] on the
    /// numerator with [`Self::nth_root`] on the denominator.
    ///
    /// # Errors
    ///
    /// Whatever the two stages report: [`RealError::DivisionByZero`],
    /// [`RealError::NegativeEvenRoot`], [`RealError::AmbiguousRoot`].
    ///
    /// # Panics
    ///
    /// Panics when the numerator or denominator of `exp` does not fit in
    /// an `i64`.
    pub fn pow_rational(&self, exp: &Q) -> Result<Self> {
        let num = exp
            .as_inner()
            .numerator()
            .to_i64()
            .expect("exponent numerator fits in i64");
        let den = exp
            .as_inner()
            .denominator()
            .to_i64()
            .expect("exponent denominator fits in i64");
        self.pow(num)?.nth_root(den)
    }

    /// The square root.
    ///
    /// # Errors
    ///
    /// [`RealError::NegativeSqrt`] for negative numbers.
    pub fn sqrt(&self) -> Result<Self> {
        if self.sign() < 0 {
            return Err(RealError::NegativeSqrt);
        }
        self.nth_root(2)
    }

    /// The real `n`-th root. Odd roots of negative numbers are negative;
    /// a negative `n` takes the root of the reciprocal.
    ///
    /// # Errors
    ///
    /// [`RealError::ZerothRoot`] for `n == 0`,
    /// [`RealError::NegativeEvenRoot`] for even `n` on a negative number,
    /// [`RealError::DivisionByZero`] for negative `n` on zero.
    pub fn nth_root(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return Err(RealError::ZerothRoot);
        }
        if n < 0 {
            return self.recip()?.nth_root(-n);
        }
        let sign = self.sign();
        if sign == 0 {
            return Ok(Self::from(Q::zero()));
        }
        if sign < 0 && n % 2 == 0 {
            return Err(RealError::NegativeEvenRoot);
        }
        let zero = Extended::Finite(Q::zero());
        let (lower, upper) = if sign > 0 {
            (zero, Extended::PosInfinity)
        } else {
            (Extended::NegInfinity, zero)
        };
        match &self.repr {
            Repr::Rational(r) => {
                // The candidates are the real roots of x^n - r with the
                // sign of r; there is exactly one.
                let f = Poly::monomial(Q::one(), usize::try_from(n).expect("root order fits in usize"))
                    - Poly::constant(r.clone());
                just_one_root(real_roots_between(&f, &lower, &upper)?)
            }
            Repr::Algebraic(root) => {
                let inflated = root
                    .sturm
                    .first()
                    .inflate(usize::try_from(n).expect("root order fits in usize"));
                let candidates = real_roots_between(&inflated, &lower, &upper)?;
                // Candidates cover the n-th roots of every root of the
                // defining polynomial; keep the one whose power lands in
                // our isolating interval.
                let lo = Self::from(root.interval.lo().clone());
                let hi = Self::from(root.interval.hi().clone());
                let mut survivors = Vec::new();
                for c in candidates {
                    let power = c.pow(n)?;
                    if lo < power && power <= hi {
                        survivors.push(c);
                    }
                }
                just_one_root(survivors)
            }
        }
    }

    /// Evaluates a rational polynomial at this number, exactly.
    #[must_use]
    pub fn value_of(&self, p: &Poly<Q>) -> Self {
        match &self.repr {
            Repr::Rational(r) => Self::from(p.eval(r)),
            Repr::Algebraic(root) => {
                let reduced = p.div_rem(root.sturm.first()).1;
                eval_rational_poly(&reduced, self)
            }
        }
    }
}

impl IsolatedRoot {
    /// One bisection step of `enclosure` around this root.
    fn refine(&self, enclosure: &Interval) -> Interval {
        let two = Q::from_integer(2);
        let mid = (enclosure.lo().clone() + enclosure.hi().clone()).field_div(&two);
        let s = self.sturm.first().sign_at(&mid);
        if s == 0 {
            return Interval::point(mid);
        }
        if s * self.sign_at_hi < 0 {
            Interval::new(mid, enclosure.hi().clone())
        } else {
            Interval::new(enclosure.lo().clone(), mid)
        }
    }
}

/// Coefficient-wise lift of a rational polynomial into `Q[x][y]`, constant
/// in `y`.
fn lift(p: &Poly<Q>) -> Poly<Poly<Q>> {
    Poly::new(p.coeffs().iter().map(|c| Poly::constant(c.clone())).collect())
}

/// Evaluates `p`, already reduced below the defining degree, at `x`.
fn eval_rational_poly(p: &Poly<Q>, x: &AlgebraicReal) -> AlgebraicReal {
    let lifted: Poly<AlgebraicReal> = Poly::new(
        p.coeffs().iter().cloned().map(AlgebraicReal::from).collect(),
    );
    lifted.eval(x)
}

fn just_one_root(mut roots: Vec<AlgebraicReal>) -> Result<AlgebraicReal> {
    if roots.len() == 1 {
        Ok(roots.remove(0))
    } else {
        Err(RealError::AmbiguousRoot(roots.len()))
    }
}

enum BinOp {
    Sum,
    Difference,
    Product,
}

/// Combines two root forms through the resultant of a resolvent pair.
///
/// For roots `a` of `f` and `b` of `g`, `res_y(f(x - y), g(y))` vanishes
/// at every sum `a + b`, `res_y(f(x + y), g(y))` at every difference and
/// `res_y(y^n f(x / y), g(y))` at every product. The combined intervals
/// are bisected in lockstep until they trap at most one root of the
/// resultant.
fn synthesize(a: &IsolatedRoot, b: &IsolatedRoot, op: &BinOp) -> AlgebraicReal {
    let fa = a.sturm.first();
    let fb = b.sturm.first();
    let resolvent: Poly<Poly<Q>> = match op {
        BinOp::Sum => lift(fa).compose(&Poly::new(vec![Poly::x(), -Poly::<Q>::one()])),
        BinOp::Difference => lift(fa).compose(&Poly::new(vec![Poly::x(), Poly::one()])),
        BinOp::Product => {
            // Homogenization: coefficient j in y is fa_(n-j) x^(n-j).
            // The constant term of fa is non-zero, so the y-degree is
            // exactly n.
            let n = usize::try_from(fa.degree()).expect("root form has positive degree");
            Poly::new((0..=n).map(|j| Poly::monomial(fa.coeff(n - j), n - j)).collect())
        }
    };
    let p = resultant(&resolvent, &lift(fb));
    assert!(!p.is_zero(), "resolvent resultant must not vanish");
    let p = squarefree_part(&p).to_monic();
    debug!(
        "combined degree {} and degree {} roots into degree {}",
        fa.degree(),
        fb.degree(),
        p.degree()
    );
    let sturm = SturmSequence::new(p);

    let mut ia = a.interval.clone();
    let mut ib = b.interval.clone();
    let mut steps = 0;
    loop {
        let combined = match op {
            BinOp::Sum => &ia + &ib,
            BinOp::Difference => &ia - &ib,
            BinOp::Product => &ia * &ib,
        };
        // The count drops to zero only when both enclosures have landed
        // exactly on rational roots and `combined` is that point; the
        // constructor then collapses it to the rational.
        if sturm.count_real_roots_between(combined.lo(), combined.hi()) <= 1 {
            return AlgebraicReal::new(sturm.first().clone(), combined)
                .expect("combined interval is isolating");
        }
        ia = a.refine(&ia);
        ib = b.refine(&ib);
        steps += 1;
        assert!(steps <= MAX_REFINEMENT_STEPS, "refinement did not converge");
    }
}

/// Translation by a rational: the root of `f` becomes a root of
/// `f(x - r)`.
fn add_rational(a: &IsolatedRoot, r: &Q) -> AlgebraicReal {
    if r.is_zero() {
        return AlgebraicReal {
            repr: Repr::Algebraic(Box::new(a.clone())),
        };
    }
    let f = a.sturm.first().compose(&Poly::new(vec![-r.clone(), Q::one()]));
    let iv = Interval::point(r.clone()) + a.interval.clone();
    AlgebraicReal::new(f, iv).expect("translated interval is isolating")
}

/// Reflection through a rational: `r - b` is a root of `f(r - x)`.
fn sub_from_rational(r: &Q, b: &IsolatedRoot) -> AlgebraicReal {
    let f = b.sturm.first().compose(&Poly::new(vec![r.clone(), -Q::one()]));
    let iv = Interval::point(r.clone()) - b.interval.clone();
    AlgebraicReal::new(f, iv).expect("reflected interval is isolating")
}

/// Scaling by a non-zero rational: `r * a` is a root of `f(x / r)`.
fn mul_rational(a: &IsolatedRoot, r: &Q) -> AlgebraicReal {
    let f = a.sturm.first().compose(&Poly::new(vec![Q::zero(), r.recip()]));
    let iv = a.interval.clone() * Interval::point(r.clone());
    AlgebraicReal::new(f, iv).expect("scaled interval is isolating")
}

fn cmp_rational_root(r: &Q, b: &IsolatedRoot) -> Ordering {
    if r <= b.interval.lo() {
        return Ordering::Less;
    }
    if b.interval.hi() < r {
        return Ordering::Greater;
    }
    // r sits inside the isolating interval.
    if b.sturm.first().eval(r).is_zero() {
        return Ordering::Equal;
    }
    if b.sturm.count_real_roots_between(r, b.interval.hi()) == 1 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

fn cmp_roots(a: &IsolatedRoot, b: &IsolatedRoot) -> Ordering {
    if a.interval.hi() <= b.interval.lo() {
        return Ordering::Less;
    }
    if b.interval.hi() <= a.interval.lo() {
        return Ordering::Greater;
    }
    // Equal values share a root of the gcd inside the overlap.
    let g = poly_gcd(a.sturm.first(), b.sturm.first());
    if g.degree() >= 1 {
        let common = a
            .interval
            .overlap(&b.interval)
            .expect("non-disjoint intervals overlap");
        if SturmSequence::new(g).count_real_roots_between(common.lo(), common.hi()) == 1 {
            return Ordering::Equal;
        }
    }
    // Distinct values: bisect both in lockstep until disjoint.
    let mut ia = a.interval.clone();
    let mut ib = b.interval.clone();
    for _ in 0..MAX_REFINEMENT_STEPS {
        match ia.maybe_lt(&ib) {
            Some(true) => return Ordering::Less,
            Some(false) => return Ordering::Greater,
            None => {
                ia = a.refine(&ia);
                ib = b.refine(&ib);
            }
        }
    }
    panic!("refinement did not converge");
}

impl Default for AlgebraicReal {
    /// Zero.
    fn default() -> Self {
        Self::from(Q::zero())
    }
}

impl From<Q> for AlgebraicReal {
    fn from(value: Q) -> Self {
        Self {
            repr: Repr::Rational(value),
        }
    }
}

impl From<i64> for AlgebraicReal {
    fn from(value: i64) -> Self {
        Self::from(Q::from_integer(value))
    }
}

impl PartialEq for AlgebraicReal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AlgebraicReal {}

impl PartialOrd for AlgebraicReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlgebraicReal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.repr, &other.repr) {
            (Repr::Rational(a), Repr::Rational(b)) => a.cmp(b),
            (Repr::Rational(r), Repr::Algebraic(b)) => cmp_rational_root(r, b),
            (Repr::Algebraic(a), Repr::Rational(r)) => cmp_rational_root(r, a).reverse(),
            (Repr::Algebraic(a), Repr::Algebraic(b)) => cmp_roots(a, b),
        }
    }
}

impl Add for AlgebraicReal {
    type Output = AlgebraicReal;

    fn add(self, rhs: AlgebraicReal) -> AlgebraicReal {
        match (&self.repr, &rhs.repr) {
            (Repr::Rational(a), Repr::Rational(b)) => Self::from(a.clone() + b.clone()),
            (Repr::Rational(r), Repr::Algebraic(b)) => add_rational(b, r),
            (Repr::Algebraic(a), Repr::Rational(r)) => add_rational(a, r),
            (Repr::Algebraic(a), Repr::Algebraic(b)) => synthesize(a, b, &BinOp::Sum),
        }
    }
}

impl Sub for AlgebraicReal {
    type Output = AlgebraicReal;

    fn sub(self, rhs: AlgebraicReal) -> AlgebraicReal {
        match (&self.repr, &rhs.repr) {
            (Repr::Rational(a), Repr::Rational(b)) => Self::from(a.clone() - b.clone()),
            (Repr::Rational(r), Repr::Algebraic(b)) => sub_from_rational(r, b),
            (Repr::Algebraic(a), Repr::Rational(r)) => add_rational(a, &-r.clone()),
            (Repr::Algebraic(a), Repr::Algebraic(b)) => synthesize(a, b, &BinOp::Difference),
        }
    }
}

impl Mul for AlgebraicReal {
    type Output = AlgebraicReal;

    fn mul(self, rhs: AlgebraicReal) -> AlgebraicReal {
        if self.is_zero() || rhs.is_zero() {
            return Self::from(Q::zero());
        }
        match (&self.repr, &rhs.repr) {
            (Repr::Rational(a), Repr::Rational(b)) => Self::from(a.clone() * b.clone()),
            (Repr::Rational(r), Repr::Algebraic(b)) => mul_rational(b, r),
            (Repr::Algebraic(a), Repr::Rational(r)) => mul_rational(a, r),
            (Repr::Algebraic(a), Repr::Algebraic(b)) => synthesize(a, b, &BinOp::Product),
        }
    }
}

impl Div for AlgebraicReal {
    type Output = AlgebraicReal;

    /// # Panics
    ///
    /// Panics on division by zero; [`AlgebraicReal::recip`] is the
    /// checked route.
    fn div(self, rhs: AlgebraicReal) -> AlgebraicReal {
        self * rhs.recip().expect("division by zero")
    }
}

impl Neg for AlgebraicReal {
    type Output = AlgebraicReal;

    fn neg(self) -> AlgebraicReal {
        Self::from(Q::zero()) - self
    }
}

impl Ring for AlgebraicReal {
    fn zero() -> Self {
        Self::from(Q::zero())
    }

    fn one() -> Self {
        Self::from(Q::one())
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self.clone() * Self::from(n)
    }
}

impl fmt::Display for AlgebraicReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Rational(r) => write!(f, "AlgReal {r}"),
            Repr::Algebraic(root) => {
                let coeffs: Vec<String> = root
                    .sturm
                    .first()
                    .coeffs()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                write!(
                    f,
                    "AlgReal [{}] | ({}, {}]",
                    coeffs.join(", "),
                    root.interval.lo(),
                    root.interval.hi()
                )
            }
        }
    }
}
