//! Resultants and discriminants over an arbitrary Euclidean domain.
//!
//! The resultant of `f` and `g` vanishes exactly when they share a root
//! (in an algebraic closure), and stays inside the coefficient domain.
//! Taking the domain to be a polynomial ring makes this the workhorse for
//! arithmetic on algebraic numbers: the resultant in one variable of
//! two-variable resolvents produces annihilating polynomials for sums and
//! products of roots.

use crate::dense::Poly;
use surd_rings::EuclideanDomain;

/// Division known to be exact by construction.
fn exact_div<R: EuclideanDomain>(a: &R, b: &R) -> R {
    let (q, r) = a.div_rem(b);
    debug_assert!(r.is_zero(), "inexact division in resultant computation");
    q
}

/// The resultant of `f` and `g`.
///
/// Computed through a pseudo-remainder sequence, tracking the extra
/// leading-coefficient factors pseudo-division introduces as an exact
/// numerator and denominator. The result equals the determinant of the
/// Sylvester matrix, with the conventions:
///
/// - both zero, or one zero with the other non-constant: zero
/// - one zero, the other a non-zero constant: one
/// - `res(c, g) == c^(deg g)` for constant `c`
#[must_use]
pub fn resultant<R: EuclideanDomain>(f: &Poly<R>, g: &Poly<R>) -> R {
    if f.is_zero() && g.is_zero() {
        return R::zero();
    }
    if f.is_zero() {
        return if g.degree() == 0 { R::one() } else { R::zero() };
    }
    if g.is_zero() {
        return if f.degree() == 0 { R::one() } else { R::zero() };
    }
    if f.degree() == 0 {
        return f.leading_coeff().pow(g.degree() as u32);
    }
    if g.degree() == 0 {
        return g.leading_coeff().pow(f.degree() as u32);
    }

    let mut f = f.clone();
    let mut g = g.clone();
    // res(f, g) == (-1)^(deg f * deg g) * res(g, f)
    let mut negate = false;
    if f.degree() < g.degree() {
        if f.degree() % 2 == 1 && g.degree() % 2 == 1 {
            negate = !negate;
        }
        std::mem::swap(&mut f, &mut g);
    }

    let mut num = R::one();
    let mut den = R::one();
    loop {
        let df = f.degree();
        let dg = g.degree();
        if dg == 0 {
            num = num * g.leading_coeff().pow(df as u32);
            break;
        }
        let r = f.pseudo_div_rem(&g).1;
        if r.is_zero() {
            return R::zero();
        }
        // Pseudo-division scaled f by lc(g)^(df - dg + 1); the degree
        // reduction contributes lc(g)^(df - deg r) to the resultant.
        num = num * g.leading_coeff().pow((df - r.degree()) as u32);
        den = den * g.leading_coeff().pow(((df - dg + 1) * dg) as u32);
        if df % 2 == 1 && dg % 2 == 1 {
            negate = !negate;
        }
        f = g;
        g = r;
    }

    let result = exact_div(&num, &den);
    if negate {
        -result
    } else {
        result
    }
}

/// The discriminant `(-1)^(n(n-1)/2) * res(f, f') / lc(f)`, zero for
/// constants. It vanishes exactly when `f` has a repeated root.
#[must_use]
pub fn discriminant<R: EuclideanDomain>(f: &Poly<R>) -> R {
    let n = f.degree();
    if n <= 0 {
        return R::zero();
    }
    let r = resultant(f, &f.derivative());
    let d = exact_div(&r, &f.leading_coeff());
    if (n * (n - 1) / 2) % 2 == 1 {
        -d
    } else {
        d
    }
}
