//! Polynomial remainder sequences over an integral domain.
//!
//! All four classical variants produce, up to constant factors, the same
//! chain of polynomials; they differ in how hard they fight coefficient
//! growth. `pseudo_euclid_prs` does nothing and its coefficients explode
//! exponentially, `primitive_prs` is optimal but pays a content
//! computation per step, and `reduced_prs` / `subresultant_prs` divide by
//! predicted factors that are guaranteed to be exact.

use crate::dense::Poly;
use surd_rings::{EuclideanDomain, IntegralDomain, OrderedRing, Ring};

use super::gcd::primitive_part;

fn exact_coeff_div<R: EuclideanDomain>(p: &Poly<R>, d: &R) -> Poly<R> {
    Poly::new(
        p.coeffs()
            .iter()
            .map(|c| {
                let (q, r) = c.div_rem(d);
                debug_assert!(r.is_zero(), "inexact coefficient division");
                q
            })
            .collect(),
    )
}

fn pow_or_one<R: Ring>(base: &R, exp: isize) -> R {
    if exp <= 0 {
        R::one()
    } else {
        base.pow(exp as u32)
    }
}

/// The raw pseudo-remainder sequence: each element is the pseudo-remainder
/// of the previous two, with no normalization at all.
///
/// # Panics
///
/// Panics when `deg f < deg g`.
#[must_use]
pub fn pseudo_euclid_prs<R: IntegralDomain>(f: &Poly<R>, g: &Poly<R>) -> Vec<Poly<R>> {
    assert!(
        f.degree() >= g.degree(),
        "first operand must have degree at least the second"
    );
    if g.is_zero() {
        return Vec::new();
    }
    let mut seq = Vec::new();
    let mut f = f.clone();
    let mut g = g.clone();
    loop {
        let r = f.pseudo_div_rem(&g).1;
        if r.is_zero() {
            return seq;
        }
        seq.push(r.clone());
        f = g;
        g = r;
    }
}

/// The primitive remainder sequence: the chain runs on raw
/// pseudo-remainders, but every emitted element is divided by its content.
///
/// # Panics
///
/// Panics when `deg f < deg g`.
#[must_use]
pub fn primitive_prs<R: EuclideanDomain + OrderedRing>(f: &Poly<R>, g: &Poly<R>) -> Vec<Poly<R>> {
    assert!(
        f.degree() >= g.degree(),
        "first operand must have degree at least the second"
    );
    if g.is_zero() {
        return Vec::new();
    }
    let mut seq = Vec::new();
    let mut f = f.clone();
    let mut g = g.clone();
    loop {
        let r = f.pseudo_div_rem(&g).1;
        if r.is_zero() {
            return seq;
        }
        seq.push(primitive_part(&r));
        f = g;
        g = r;
    }
}

/// Collins' reduced remainder sequence: after the first raw step, each
/// pseudo-remainder is divided by a power of the leading coefficient two
/// positions back. The divisions are always exact.
///
/// # Panics
///
/// Panics when `deg f < deg g`.
#[must_use]
pub fn reduced_prs<R: EuclideanDomain>(f: &Poly<R>, g: &Poly<R>) -> Vec<Poly<R>> {
    assert!(
        f.degree() >= g.degree(),
        "first operand must have degree at least the second"
    );
    if g.is_zero() {
        return Vec::new();
    }
    let r1 = f.pseudo_div_rem(g).1;
    if r1.is_zero() {
        return Vec::new();
    }
    let mut seq = vec![r1.clone()];
    let mut h_deg = f.degree();
    let mut f = g.clone();
    let mut g = r1;
    loop {
        let r = f.pseudo_div_rem(&g).1;
        if r.is_zero() {
            return seq;
        }
        let e = (h_deg - f.degree() + 1) as u32;
        let next = exact_coeff_div(&r, &f.leading_coeff().pow(e));
        seq.push(next.clone());
        h_deg = f.degree();
        f = g;
        g = next;
    }
}

/// The subresultant remainder sequence (Brown's algorithm): divisors are
/// predicted through the `psi` chain, giving near-primitive elements at
/// the cost of one exact division per step. For a normal sequence the
/// final constant is the resultant.
///
/// # Panics
///
/// Panics when `deg f < deg g`.
#[must_use]
pub fn subresultant_prs<R: EuclideanDomain>(f: &Poly<R>, g: &Poly<R>) -> Vec<Poly<R>> {
    assert!(
        f.degree() >= g.degree(),
        "first operand must have degree at least the second"
    );
    if g.is_zero() {
        return Vec::new();
    }
    let mut delta = f.degree() - g.degree();
    let r1 = f.pseudo_div_rem(g).1;
    if r1.is_zero() {
        return Vec::new();
    }
    let s = if delta % 2 == 0 { r1.neg() } else { r1 };
    let mut seq = vec![s.clone()];
    let mut psi = -R::one();
    let mut f = g.clone();
    let mut g = s;
    loop {
        let r = f.pseudo_div_rem(&g).1;
        if r.is_zero() {
            return seq;
        }
        let delta_new = f.degree() - g.degree();
        let psi_new = {
            let (q, rem) = (-f.leading_coeff())
                .pow(delta as u32)
                .div_rem(&pow_or_one(&psi, delta - 1));
            debug_assert!(rem.is_zero(), "inexact psi update");
            q
        };
        let beta = -f.leading_coeff() * psi_new.pow(delta_new as u32);
        let next = exact_coeff_div(&r, &beta);
        seq.push(next.clone());
        delta = delta_new;
        psi = psi_new;
        f = g;
        g = next;
    }
}
