//! Polynomial greatest common divisors and content.

use crate::dense::Poly;
use surd_rings::{EuclideanDomain, Field, OrderedRing};

/// Greatest common divisor over a field, normalized to be monic.
///
/// The remainder is re-normalized after every step, which keeps the
/// coefficients from blowing up when `F` is the rationals.
///
/// `poly_gcd(0, 0)` is zero; otherwise the result is monic.
#[must_use]
pub fn poly_gcd<F: Field>(f: &Poly<F>, g: &Poly<F>) -> Poly<F> {
    let mut p = f.clone();
    let mut q = g.clone();
    while !q.is_zero() {
        let r = p.div_rem(&q).1;
        p = q;
        q = if r.is_zero() { r } else { r.to_monic() };
    }
    p.to_monic()
}

/// The content: the gcd of all coefficients, normalized non-negative.
///
/// The content of the zero polynomial is zero.
#[must_use]
pub fn content<R: EuclideanDomain + OrderedRing>(f: &Poly<R>) -> R {
    let mut c = R::zero();
    for a in f.coeffs() {
        c = c.gcd(a);
    }
    c.abs()
}

/// The primitive part: `f` divided by its content, so the coefficients
/// have trivial gcd. The sign of the leading coefficient is preserved.
///
/// The primitive part of the zero polynomial is zero.
#[must_use]
pub fn primitive_part<R: EuclideanDomain + OrderedRing>(f: &Poly<R>) -> Poly<R> {
    if f.is_zero() {
        return Poly::zero();
    }
    let c = content(f);
    Poly::new(
        f.coeffs()
            .iter()
            .map(|a| a.div_rem(&c).0)
            .collect(),
    )
}
