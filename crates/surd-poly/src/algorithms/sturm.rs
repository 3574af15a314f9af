//! Sturm sequences and real root counting.

use crate::dense::Poly;
use surd_rings::{Extended, Field, OrderedRing};

/// The Sturm sequence of a polynomial: the chain starting `f, f'` where
/// each later term is the negated remainder of the previous two, scaled
/// to keep coefficients small.
///
/// For square-free `f`, Sturm's theorem counts the real roots in a
/// half-open interval `(a, b]` as the drop in sign changes between the
/// two endpoints. The scaling by the absolute value of the leading
/// coefficient leaves every sign in the chain unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SturmSequence<F: Field + OrderedRing> {
    terms: Vec<Poly<F>>,
}

impl<F: Field + OrderedRing> SturmSequence<F> {
    /// Builds the sequence for `f`.
    #[must_use]
    pub fn new(f: Poly<F>) -> Self {
        let fp = f.derivative();
        if fp.is_zero() {
            return Self { terms: vec![f] };
        }
        let mut terms = vec![f, fp];
        loop {
            let r = terms[terms.len() - 2].div_rem(&terms[terms.len() - 1]).1;
            if r.is_zero() {
                break;
            }
            let scale = r
                .leading_coeff()
                .abs()
                .inv()
                .expect("non-zero leading coefficient");
            terms.push(r.scale(&scale).neg());
        }
        Self { terms }
    }

    /// The polynomial the sequence was built from.
    #[must_use]
    pub fn first(&self) -> &Poly<F> {
        &self.terms[0]
    }

    /// All terms of the sequence.
    #[must_use]
    pub fn terms(&self) -> &[Poly<F>] {
        &self.terms
    }

    fn count_changes<I: Iterator<Item = i8>>(signs: I) -> usize {
        let mut count = 0;
        let mut last = 0i8;
        for s in signs {
            if s == 0 {
                continue;
            }
            if last != 0 && s != last {
                count += 1;
            }
            last = s;
        }
        count
    }

    /// Number of sign changes in the sequence evaluated at `x`, with
    /// zeros dropped.
    #[must_use]
    pub fn count_sign_changes_at(&self, x: &F) -> usize {
        Self::count_changes(self.terms.iter().map(|t| t.sign_at(x)))
    }

    /// Like [`Self::count_sign_changes_at`], allowing infinite `x`.
    #[must_use]
    pub fn count_sign_changes_at_extended(&self, x: &Extended<F>) -> usize {
        Self::count_changes(self.terms.iter().map(|t| t.sign_at_extended(x)))
    }

    /// Number of real roots of the first term in `(lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics when the bounds are reversed.
    #[must_use]
    pub fn count_real_roots_between(&self, lower: &F, upper: &F) -> usize {
        self.count_sign_changes_at(lower)
            .checked_sub(self.count_sign_changes_at(upper))
            .expect("sign changes decrease from lower to upper")
    }

    /// Like [`Self::count_real_roots_between`], allowing infinite bounds.
    ///
    /// # Panics
    ///
    /// Panics when the bounds are reversed.
    #[must_use]
    pub fn count_real_roots_between_extended(
        &self,
        lower: &Extended<F>,
        upper: &Extended<F>,
    ) -> usize {
        self.count_sign_changes_at_extended(lower)
            .checked_sub(self.count_sign_changes_at_extended(upper))
            .expect("sign changes decrease from lower to upper")
    }

    /// Bisects `(lo, hi]`, keeping the half that holds the roots of the
    /// interval. The caller guarantees the interval isolates at least one
    /// root; when both halves contain roots the left one wins.
    #[must_use]
    pub fn next_interval(&self, lo: &F, hi: &F) -> (F, F) {
        let two = F::one() + F::one();
        let mid = (lo.clone() + hi.clone()).field_div(&two);
        if self.count_sign_changes_at(lo) == self.count_sign_changes_at(&mid) {
            (mid, hi.clone())
        } else {
            (lo.clone(), mid)
        }
    }
}
