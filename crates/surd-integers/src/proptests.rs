//! Property-based tests for the scalar types.

use crate::{Integer, Rational};
use num_traits::Zero;
use proptest::prelude::*;

fn small_int() -> impl Strategy<Value = Integer> {
    (-1000i64..1000).prop_map(Integer::new)
}

fn non_zero_int() -> impl Strategy<Value = Integer> {
    prop_oneof![-1000i64..-1, 1i64..1000].prop_map(Integer::new)
}

fn small_rational() -> impl Strategy<Value = Rational> {
    (-1000i64..1000, 1i64..1000).prop_map(|(n, d)| Rational::from_i64(n, d))
}

fn non_zero_rational() -> impl Strategy<Value = Rational> {
    small_rational().prop_filter("non-zero", |r| !r.is_zero())
}

proptest! {
    #[test]
    fn integer_addition_commutes(a in small_int(), b in small_int()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn integer_multiplication_commutes(a in small_int(), b in small_int()) {
        prop_assert_eq!(a.clone() * b.clone(), b * a);
    }

    #[test]
    fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
        let left = a.clone() * (b.clone() + c.clone());
        let right = a.clone() * b + a * c;
        prop_assert_eq!(left, right);
    }

    #[test]
    fn integer_div_rem_roundtrip(a in small_int(), b in non_zero_int()) {
        let q = a.clone() / b.clone();
        let r = a.clone() % b.clone();
        prop_assert_eq!(q * b, a - r);
    }

    #[test]
    fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
        let g = a.gcd(&b);
        prop_assert!(!g.is_negative());
        prop_assert!(!g.is_zero());
        prop_assert_eq!(a % g.clone(), Integer::zero());
        prop_assert_eq!(b % g, Integer::zero());
    }

    #[test]
    fn gcd_symmetric(a in small_int(), b in small_int()) {
        prop_assert_eq!(a.gcd(&b), b.gcd(&a));
    }

    #[test]
    fn rational_is_always_reduced(r in small_rational()) {
        prop_assert!(!r.denominator().is_negative());
        prop_assert!(!r.denominator().is_zero());
        let g = r.numerator().gcd(&r.denominator());
        prop_assert!(g == Integer::new(1) || r.numerator().is_zero());
    }

    #[test]
    fn rational_addition_commutes(a in small_rational(), b in small_rational()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn rational_additive_inverse(a in small_rational()) {
        prop_assert!((a.clone() + (-a)).is_zero());
    }

    #[test]
    fn rational_division_roundtrip(a in small_rational(), b in non_zero_rational()) {
        prop_assert_eq!((a.clone() / b.clone()) * b, a);
    }

    #[test]
    fn rational_recip_involution(a in non_zero_rational()) {
        prop_assert_eq!(a.recip().recip(), a);
    }
}
