//! Property-based tests for exact rational coefficients.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            prop_assert!((a.clone() + -a).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_ref_ops_match_owned(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, a.clone() + b.clone());
            prop_assert_eq!(&a - &b, a.clone() - b.clone());
            prop_assert_eq!(&a * &b, a.clone() * b.clone());
            prop_assert_eq!(-&a, -a);
        }

        #[test]
        fn rational_sign_of_denominator_is_normalised(n in small_int(), d in non_zero_int()) {
            prop_assert_eq!(Rational::new(n, d), Rational::new(-n, -d));
        }
    }
}
