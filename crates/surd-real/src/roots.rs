//! Real root isolation for rational polynomials.
//!
//! Isolation runs a Sturm-guided bisection: the Cauchy bound caps the
//! search range, sign-change counts split it until every piece holds one
//! root, and each piece becomes an [`AlgebraicReal`].

use log::debug;
use surd_poly::algorithms::squarefree::squarefree_part;
use surd_poly::{Poly, SturmSequence};
use surd_rings::{Extended, Field, Q, Ring};

use crate::algebraic::AlgebraicReal;
use crate::error::{RealError, Result};
use crate::interval::Interval;

/// Isolates every real root of `p`, in increasing order. Multiple roots
/// are reported once.
///
/// # Errors
///
/// [`RealError::ZeroPolynomial`] for the zero polynomial.
pub fn real_roots(p: &Poly<Q>) -> Result<Vec<AlgebraicReal>> {
    real_roots_between(p, &Extended::NegInfinity, &Extended::PosInfinity)
}

/// Isolates the real roots of `p` in the half-open range `(lower, upper]`,
/// in increasing order.
///
/// # Errors
///
/// [`RealError::ZeroPolynomial`] for the zero polynomial.
pub fn real_roots_between(
    p: &Poly<Q>,
    lower: &Extended<Q>,
    upper: &Extended<Q>,
) -> Result<Vec<AlgebraicReal>> {
    if p.is_zero() {
        return Err(RealError::ZeroPolynomial);
    }
    if p.degree() == 0 {
        return Ok(Vec::new());
    }
    let f = squarefree_part(p).to_monic();
    let bound = f.root_bound();
    let mut lo = lower.clamp(-bound.clone(), bound.clone());
    let hi = upper.clamp(-bound.clone(), bound);
    // The bound is inclusive, but intervals are read as (lo, hi]. When
    // clamping moved the lower end, nudge it below any root sitting
    // exactly there; an explicit finite bound keeps its half-open
    // meaning.
    let moved = match lower {
        Extended::NegInfinity => true,
        Extended::Finite(v) => *v < lo,
        Extended::PosInfinity => false,
    };
    if moved && f.eval(&lo).is_zero() {
        lo = lo - Q::one();
    }
    let sturm = SturmSequence::new(f.clone());
    let changes_lo = sturm.count_sign_changes_at_extended(lower);
    let changes_hi = sturm.count_sign_changes_at_extended(upper);
    debug!(
        "isolating {} roots of {}",
        changes_lo.saturating_sub(changes_hi),
        f
    );

    let two = Q::from_integer(2);
    let mut out = Vec::new();
    let mut stack = vec![(lo, hi, changes_lo, changes_hi)];
    while let Some((lo, hi, changes_lo, changes_hi)) = stack.pop() {
        if changes_lo <= changes_hi {
            continue;
        }
        if changes_lo - changes_hi == 1 {
            out.push(AlgebraicReal::new(f.clone(), Interval::new(lo, hi))?);
            continue;
        }
        let mid = (lo.clone() + hi.clone()).field_div(&two);
        let changes_mid = sturm.count_sign_changes_at(&mid);
        // Popped in low-to-high order.
        stack.push((mid.clone(), hi, changes_mid, changes_hi));
        stack.push((lo, mid, changes_lo, changes_mid));
    }
    Ok(out)
}
