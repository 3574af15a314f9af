//! Dense univariate polynomials.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use surd_rings::{
    CommutativeRing, EuclideanDomain, Extended, Field, IntegralDomain, OrderedRing, Ring,
};

/// Below this many coefficients multiplication stays quadratic.
const KARATSUBA_CUTOFF: usize = 32;

/// A dense univariate polynomial with coefficients in `R`, stored in
/// ascending order: `coeffs[i]` multiplies `x^i`.
///
/// The zero polynomial is the empty coefficient vector and has degree `-1`.
/// Constructors trim trailing zeros, so equal polynomials are structurally
/// equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> Poly<R> {
    /// Creates a polynomial from ascending coefficients, trimming trailing
    /// zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().map_or(false, Ring::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// The monomial `x`.
    #[must_use]
    pub fn x() -> Self {
        Self {
            coeffs: vec![R::zero(), R::one()],
        }
    }

    /// The monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// The degree, or `-1` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Whether this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The leading coefficient. By convention the zero polynomial has
    /// leading coefficient 1, so scaling by it is always harmless.
    #[must_use]
    pub fn leading_coeff(&self) -> R {
        self.coeffs.last().cloned().unwrap_or_else(R::one)
    }

    /// The coefficient of `x^i`, zero beyond the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// All coefficients in ascending order, without trailing zeros.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates at `x` by Horner's rule.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Sum of two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut coeffs = vec![R::zero(); self.coeffs.len().max(other.coeffs.len())];
        for (i, c) in self.coeffs.iter().enumerate() {
            coeffs[i] = c.clone();
        }
        for (i, c) in other.coeffs.iter().enumerate() {
            coeffs[i] = coeffs[i].clone() + c.clone();
        }
        Self::new(coeffs)
    }

    /// Additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Difference of two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Product of two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        self.mul_karatsuba(other)
    }

    fn mul_schoolbook(&self, other: &Self) -> Self {
        let mut coeffs = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }
        Self::new(coeffs)
    }

    fn mul_karatsuba(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        if n < KARATSUBA_CUTOFF || m < KARATSUBA_CUTOFF {
            return self.mul_schoolbook(other);
        }

        let size = n.max(m).next_power_of_two();
        let half = size / 2;
        let mut a = self.coeffs.clone();
        a.resize(size, R::zero());
        let mut b = other.coeffs.clone();
        b.resize(size, R::zero());

        let a0 = Self::new(a[..half].to_vec());
        let a1 = Self::new(a[half..].to_vec());
        let b0 = Self::new(b[..half].to_vec());
        let b1 = Self::new(b[half..].to_vec());

        let z0 = a0.clone() * b0.clone();
        let z2 = a1.clone() * b1.clone();
        let z1 = (a0 + a1) * (b0 + b1) - z0.clone() - z2.clone();

        let mut coeffs = vec![R::zero(); 2 * size];
        for (i, c) in z0.coeffs.iter().enumerate() {
            coeffs[i] = coeffs[i].clone() + c.clone();
        }
        for (i, c) in z1.coeffs.iter().enumerate() {
            coeffs[i + half] = coeffs[i + half].clone() + c.clone();
        }
        for (i, c) in z2.coeffs.iter().enumerate() {
            coeffs[i + size] = coeffs[i + size].clone() + c.clone();
        }
        Self::new(coeffs)
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|a| a.clone() * c.clone()).collect())
    }

    /// The formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        Self::new(
            self.coeffs
                .iter()
                .skip(1)
                .enumerate()
                .map(|(i, c)| c.mul_by_scalar(i as i64 + 1))
                .collect(),
        )
    }

    /// Raises to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
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

    /// Substitutes `other` for the variable, by Horner's rule over
    /// polynomials.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for c in self.coeffs.iter().rev() {
            result = result * other.clone() + Self::constant(c.clone());
        }
        result
    }

    /// Substitutes `x^n` for the variable.
    ///
    /// # Panics
    ///
    /// Panics when `n` is zero.
    #[must_use]
    pub fn inflate(&self, n: usize) -> Self {
        assert!(n > 0, "inflation factor must be positive");
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![R::zero(); (self.coeffs.len() - 1) * n + 1];
        for (i, c) in self.coeffs.iter().enumerate() {
            coeffs[i * n] = c.clone();
        }
        Self { coeffs }
    }

    /// Reverses the coefficients.
    ///
    /// When the constant term is non-zero this maps every root to its
    /// reciprocal.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.coeffs.iter().rev().cloned().collect())
    }
}

impl<R: IntegralDomain> Poly<R> {
    /// Pseudo-division: returns `(q, r)` with `d^(deg f - deg g + 1) * f
    /// == q * g + r` and `deg r < deg g`, where `d` is the leading
    /// coefficient of `g`. No coefficient inverses are needed, so this
    /// works over any integral domain.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero.
    #[must_use]
    pub fn pseudo_div_rem(&self, other: &Self) -> (Self, Self) {
        assert!(!other.is_zero(), "pseudo division by zero polynomial");
        let dg = other.degree();
        if self.degree() < dg {
            return (Self::zero(), self.clone());
        }

        let d = other.leading_coeff();
        let mut q = Self::zero();
        let mut r = self.clone();
        // Scale exactly deg f - deg g + 1 times overall, even when the
        // remainder drops degree early or vanishes.
        let mut e = (self.degree() - dg + 1) as u32;
        while !r.is_zero() && r.degree() >= dg {
            let t = Self::monomial(r.leading_coeff(), (r.degree() - dg) as usize);
            q = q.scale(&d) + t.clone();
            r = r.scale(&d) - t * other.clone();
            e -= 1;
        }
        let s = d.pow(e);
        (q.scale(&s), r.scale(&s))
    }
}

impl<F: Field> Poly<F> {
    /// Euclidean division: returns `(q, r)` with `self == q * other + r`
    /// and `deg r < deg other`.
    ///
    /// # Panics
    ///
    /// Panics when `other` is zero.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        assert!(!other.is_zero(), "division by zero polynomial");
        let glen = other.coeffs.len();
        if self.coeffs.len() < glen {
            return (Self::zero(), self.clone());
        }

        let lc_inv = other
            .leading_coeff()
            .inv()
            .expect("leading coefficient is non-zero");
        let mut rem = self.coeffs.clone();
        let mut quot = vec![F::zero(); self.coeffs.len() - glen + 1];
        while rem.len() >= glen {
            let k = rem.len() - glen;
            let c = rem.last().expect("non-empty remainder").clone() * lc_inv.clone();
            quot[k] = c.clone();
            for (i, gc) in other.coeffs.iter().enumerate() {
                rem[k + i] = rem[k + i].clone() - c.clone() * gc.clone();
            }
            while rem.last().map_or(false, Ring::is_zero) {
                rem.pop();
            }
        }
        (Self::new(quot), Self { coeffs: rem })
    }

    /// Scales so the leading coefficient becomes 1. Zero stays zero.
    #[must_use]
    pub fn to_monic(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let inv = self
            .leading_coeff()
            .inv()
            .expect("leading coefficient is non-zero");
        self.scale(&inv)
    }
}

impl<F: OrderedRing> Poly<F> {
    /// Sign of the value at `x`.
    #[must_use]
    pub fn sign_at(&self, x: &F) -> i8 {
        self.eval(x).signum()
    }

    /// Sign of the value at `x`, where `x` may be infinite. At infinity
    /// only the leading term matters.
    #[must_use]
    pub fn sign_at_extended(&self, x: &Extended<F>) -> i8 {
        if self.is_zero() {
            return 0;
        }
        match x {
            Extended::Finite(v) => self.sign_at(v),
            Extended::PosInfinity => self.leading_coeff().signum(),
            Extended::NegInfinity => {
                let s = self.leading_coeff().signum();
                if self.degree() % 2 == 0 {
                    s
                } else {
                    -s
                }
            }
        }
    }
}

impl<F: Field + OrderedRing> Poly<F> {
    /// A bound `B >= 1` such that every real root lies in `[-B, B]`,
    /// from the Cauchy bound `max(1, sum |a_i / a_n|)`.
    ///
    /// # Panics
    ///
    /// Panics when the polynomial is zero.
    #[must_use]
    pub fn root_bound(&self) -> F {
        assert!(!self.is_zero(), "root bound of zero polynomial");
        let lc = self.leading_coeff();
        let mut sum = F::zero();
        for c in &self.coeffs[..self.coeffs.len() - 1] {
            sum = sum + c.field_div(&lc).abs();
        }
        if sum < F::one() {
            F::one()
        } else {
            sum
        }
    }
}

impl<R: Ring> Add for Poly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Poly::add(&self, &rhs)
    }
}

impl<R: Ring> Sub for Poly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Poly::sub(&self, &rhs)
    }
}

impl<R: Ring> Mul for Poly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Poly::mul(&self, &rhs)
    }
}

impl<R: Ring> Neg for Poly<R> {
    type Output = Self;

    fn neg(self) -> Self {
        Poly::neg(&self)
    }
}

impl<R: Ring> Ring for Poly<R> {
    fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self.scale(&R::one().mul_by_scalar(n))
    }
}

impl<R: CommutativeRing> CommutativeRing for Poly<R> {}

impl<R: IntegralDomain> IntegralDomain for Poly<R> {}

impl<F: Field> EuclideanDomain for Poly<F> {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        Poly::div_rem(self, other)
    }

    fn gcd(&self, other: &Self) -> Self {
        crate::algorithms::gcd::poly_gcd(self, other)
    }
}

impl<R: Ring + fmt::Display> fmt::Display for Poly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
