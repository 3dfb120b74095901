//! Property-based tests for polynomial coefficients.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use pnseries_rings::{Differentiable, Ring, Q};

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Coefficient polynomials in PN formulas are of low degree.
    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_ring_identities(a in small_poly()) {
            prop_assert_eq!(a.clone() + <DensePoly<Q> as Ring>::zero(), a.clone());
            prop_assert_eq!(a.clone() * <DensePoly<Q> as Ring>::one(), a.clone());
            prop_assert!((a.clone() - a).is_zero());
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            let product = a.mul(&b);
            prop_assert_eq!(product.eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(
                a.add(&b).derivative(),
                a.derivative().add(&b.derivative())
            );
        }

        #[test]
        fn derivative_obeys_product_rule(a in small_poly(), b in small_poly()) {
            let left = Differentiable::derivative(&a.mul(&b));
            let right = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn truncate_keeps_low_degrees(a in small_poly(), n in 0usize..6) {
            let t = a.truncate(n);
            for i in 0..n {
                prop_assert_eq!(t.coeff(i), a.coeff(i));
            }
            prop_assert!(n == 0 || t.degree() < n);
        }
    }
}
