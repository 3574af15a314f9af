//! Property tests for polynomial arithmetic and the algorithm layer.

use crate::algorithms::gcd::poly_gcd;
use crate::algorithms::resultant::resultant;
use crate::algorithms::squarefree::{is_squarefree, squarefree_part};
use crate::algorithms::sturm::SturmSequence;
use crate::dense::Poly;
use proptest::prelude::*;
use surd_rings::{Extended, Q, Ring, Z};

fn small_q() -> impl Strategy<Value = Q> {
    (-50i64..50).prop_map(Q::from_integer)
}

fn small_poly() -> impl Strategy<Value = Poly<Q>> {
    prop::collection::vec(small_q(), 0..7).prop_map(Poly::new)
}

fn nonzero_poly() -> impl Strategy<Value = Poly<Q>> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

fn long_poly() -> impl Strategy<Value = Poly<Q>> {
    prop::collection::vec(small_q(), 33..48).prop_map(Poly::new)
}

fn small_zpoly() -> impl Strategy<Value = Poly<Z>> {
    prop::collection::vec((-20i64..20).prop_map(Z::new), 0..6).prop_map(Poly::new)
}

proptest! {
    #[test]
    fn addition_commutes(f in small_poly(), g in small_poly()) {
        prop_assert_eq!(f.clone() + g.clone(), g + f);
    }

    #[test]
    fn multiplication_commutes(f in small_poly(), g in small_poly()) {
        prop_assert_eq!(f.clone() * g.clone(), g * f);
    }

    #[test]
    fn multiplication_distributes(f in small_poly(), g in small_poly(), h in small_poly()) {
        prop_assert_eq!(f.clone() * (g.clone() + h.clone()), f.clone() * g + f * h);
    }

    #[test]
    fn product_degrees_add(f in nonzero_poly(), g in nonzero_poly()) {
        prop_assert_eq!((f.clone() * g.clone()).degree(), f.degree() + g.degree());
    }

    #[test]
    fn evaluation_is_a_homomorphism(f in small_poly(), g in small_poly(), x in small_q()) {
        prop_assert_eq!((f.clone() + g.clone()).eval(&x), f.eval(&x) + g.eval(&x));
        prop_assert_eq!((f.clone() * g.clone()).eval(&x), f.eval(&x) * g.eval(&x));
    }

    // Long operands route through the Karatsuba splitting.
    #[test]
    fn long_products_evaluate_consistently(
        f in long_poly(),
        g in long_poly(),
        x in (-5i64..5).prop_map(Q::from_integer),
    ) {
        prop_assert_eq!((f.clone() * g.clone()).eval(&x), f.eval(&x) * g.eval(&x));
    }

    #[test]
    fn composition_matches_evaluation(f in small_poly(), g in small_poly(), x in small_q()) {
        prop_assert_eq!(f.compose(&g).eval(&x), f.eval(&g.eval(&x)));
    }

    #[test]
    fn derivative_product_rule(f in small_poly(), g in small_poly()) {
        let lhs = (f.clone() * g.clone()).derivative();
        let rhs = f.derivative() * g.clone() + f * g.derivative();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn division_reconstructs(f in small_poly(), g in nonzero_poly()) {
        let (quot, rem) = f.div_rem(&g);
        prop_assert_eq!(quot * g.clone() + rem.clone(), f);
        prop_assert!(rem.degree() < g.degree());
    }

    #[test]
    fn pseudo_division_identity(f in small_zpoly(), g in small_zpoly()) {
        prop_assume!(!g.is_zero());
        let (quot, rem) = f.pseudo_div_rem(&g);
        if f.degree() >= g.degree() {
            let e = (f.degree() - g.degree() + 1) as u32;
            prop_assert_eq!(quot * g.clone() + rem, f.scale(&g.leading_coeff().pow(e)));
        } else {
            prop_assert_eq!(rem, f);
        }
    }

    #[test]
    fn gcd_divides_both_operands(f in nonzero_poly(), g in nonzero_poly()) {
        let d = poly_gcd(&f, &g);
        prop_assert!(f.div_rem(&d).1.is_zero());
        prop_assert!(g.div_rem(&d).1.is_zero());
    }

    #[test]
    fn gcd_is_symmetric(f in small_poly(), g in small_poly()) {
        prop_assert_eq!(poly_gcd(&f, &g), poly_gcd(&g, &f));
    }

    #[test]
    fn squarefree_part_divides_and_is_squarefree(f in nonzero_poly()) {
        let s = squarefree_part(&f);
        prop_assert!(f.div_rem(&s).1.is_zero());
        prop_assert!(is_squarefree(&s));
    }

    #[test]
    fn resultant_of_shared_factor_vanishes(
        f in nonzero_poly(),
        g in nonzero_poly(),
        h in nonzero_poly(),
    ) {
        prop_assume!(h.degree() >= 1);
        prop_assert_eq!(resultant(&(f * h.clone()), &(g * h)), Q::zero());
    }

    #[test]
    fn sturm_counts_distinct_linear_roots(
        roots in prop::collection::btree_set(-20i64..20, 1..5),
    ) {
        let mut f = Poly::<Q>::one();
        for &r in &roots {
            f = f * Poly::new(vec![Q::from_integer(-r), Q::one()]);
        }
        let seq = SturmSequence::new(f);
        prop_assert_eq!(
            seq.count_real_roots_between_extended(
                &Extended::NegInfinity,
                &Extended::PosInfinity
            ),
            roots.len()
        );
    }
}
