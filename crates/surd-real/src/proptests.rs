//! Property tests for algebraic number arithmetic and ordering.

use proptest::prelude::*;
use surd_poly::Poly;
use surd_rings::{Q, Ring};

use crate::algebraic::AlgebraicReal;
use crate::interval::Interval;

fn small_rational() -> impl Strategy<Value = Q> {
    (-30i64..30, 1i64..8).prop_map(|(n, d)| Q::new(n, d))
}

fn sqrt2() -> AlgebraicReal {
    AlgebraicReal::new(
        Poly::new(vec![Q::from_integer(-2), Q::zero(), Q::one()]),
        Interval::new(Q::from_integer(1), Q::from_integer(2)),
    )
    .expect("isolating interval")
}

/// Rationals mixed with translates of the square root of two, so every
/// property sees both representations.
fn mixed_real() -> impl Strategy<Value = AlgebraicReal> {
    (small_rational(), prop::bool::ANY).prop_map(|(r, irrational)| {
        let base = AlgebraicReal::from(r);
        if irrational {
            base + sqrt2()
        } else {
            base
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn addition_commutes(a in mixed_real(), b in mixed_real()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn multiplication_commutes(a in mixed_real(), b in mixed_real()) {
        prop_assert_eq!(a.clone() * b.clone(), b * a);
    }

    #[test]
    fn addition_associates(a in mixed_real(), b in mixed_real(), c in mixed_real()) {
        let left = (a.clone() + b.clone()) + c.clone();
        let right = a + (b + c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn additive_inverse_cancels(a in mixed_real()) {
        prop_assert!((a.clone() + (-a)).is_zero());
    }

    #[test]
    fn reciprocal_multiplies_to_one(a in mixed_real()) {
        prop_assume!(!a.is_zero());
        let product = a.clone() * a.recip().unwrap();
        prop_assert_eq!(product, AlgebraicReal::from(1));
    }

    #[test]
    fn subtraction_undoes_addition(a in mixed_real(), r in small_rational()) {
        let shifted = a.clone() + AlgebraicReal::from(r.clone());
        prop_assert_eq!(shifted - AlgebraicReal::from(r), a);
    }

    #[test]
    fn rational_scaling_distributes(a in mixed_real(), b in mixed_real(), r in small_rational()) {
        let lhs = AlgebraicReal::from(r.clone()) * (a.clone() + b.clone());
        let rhs = AlgebraicReal::from(r.clone()) * a + AlgebraicReal::from(r) * b;
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn multiplication_distributes(a in mixed_real(), b in mixed_real(), c in mixed_real()) {
        let lhs = a.clone() * (b.clone() + c.clone());
        let rhs = a.clone() * b + a * c;
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn comparison_is_consistent(a in mixed_real(), b in mixed_real()) {
        let forward = a.cmp(&b);
        prop_assert_eq!(forward.reverse(), b.cmp(&a));
        prop_assert_eq!(forward == std::cmp::Ordering::Equal, a == b);
    }

    #[test]
    fn equality_is_reflexive(a in mixed_real()) {
        prop_assert_eq!(a.clone(), a);
    }

    #[test]
    fn sign_matches_comparison_with_zero(a in mixed_real()) {
        let against_zero = a.cmp(&AlgebraicReal::from(0));
        let expected = match a.sign() {
            -1 => std::cmp::Ordering::Less,
            0 => std::cmp::Ordering::Equal,
            _ => std::cmp::Ordering::Greater,
        };
        prop_assert_eq!(against_zero, expected);
    }

    #[test]
    fn translation_preserves_order(a in mixed_real(), b in mixed_real(), r in small_rational()) {
        let shift = AlgebraicReal::from(r);
        let before = a.cmp(&b);
        let after = (a + shift.clone()).cmp(&(b + shift));
        prop_assert_eq!(before, after);
    }

    #[test]
    fn reciprocal_is_an_involution(a in mixed_real()) {
        prop_assume!(!a.is_zero());
        let back = a.recip().unwrap().recip().unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn division_by_rational_round_trips(a in mixed_real(), r in small_rational()) {
        prop_assume!(!r.is_zero());
        let divisor = AlgebraicReal::from(r);
        let quotient = a.clone() / divisor.clone();
        prop_assert_eq!(quotient * divisor, a);
    }

    #[test]
    fn refinement_narrows_and_keeps_the_value(r in small_rational()) {
        let a = AlgebraicReal::from(r) + sqrt2();
        let iv = a.isolating_interval();
        let narrowed = a.next_interval(&iv);
        prop_assert!(iv.lo() <= narrowed.lo());
        prop_assert!(narrowed.hi() <= iv.hi());
        prop_assert!(AlgebraicReal::from(narrowed.lo().clone()) < a);
        prop_assert!(a <= AlgebraicReal::from(narrowed.hi().clone()));
    }
}
