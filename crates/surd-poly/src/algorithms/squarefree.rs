//! Square-free polynomials.
//!
//! A polynomial is square-free when no root is repeated, which is
//! exactly the condition Sturm's theorem needs.

use crate::algorithms::gcd::poly_gcd;
use crate::dense::Poly;
use surd_rings::Field;

/// Whether `f` has no repeated roots, i.e. `gcd(f, f')` is constant.
#[must_use]
pub fn is_squarefree<F: Field>(f: &Poly<F>) -> bool {
    poly_gcd(f, &f.derivative()).degree() <= 0
}

/// The square-free part `f / gcd(f, f')`: the product of the distinct
/// irreducible factors of `f`, each taken once. Roots are preserved,
/// multiplicities are dropped.
///
/// The square-free part of a non-zero constant is that constant, and of
/// zero is zero.
#[must_use]
pub fn squarefree_part<F: Field>(f: &Poly<F>) -> Poly<F> {
    if f.is_zero() {
        return Poly::zero();
    }
    let g = poly_gcd(f, &f.derivative());
    if g.degree() <= 0 {
        return f.clone();
    }
    f.div_rem(&g).0
}
