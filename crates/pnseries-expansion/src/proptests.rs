//! Property-based tests for the truncation engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::truncated::{series_inverse, series_product, series_ratio, series_ratio_unequal};
    use crate::{Expansion, Term};
    use pnseries_poly::DensePoly;
    use pnseries_rings::{Ring, Q};

    const C: usize = 5;

    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50, 1i64..8).prop_map(|(n, d)| Q::new(n, d))
    }

    fn nonzero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("nonzero", |q| !q.is_zero())
    }

    fn expansion() -> impl Strategy<Value = Expansion<Q, C>> {
        proptest::collection::vec(small_q(), 1..=C + 1)
            .prop_map(|coeffs| Expansion::new(coeffs).unwrap())
    }

    fn invertible(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<Q>> {
        (nonzero_q(), proptest::collection::vec(small_q(), len)).prop_map(|(head, tail)| {
            let mut coeffs = vec![head];
            coeffs.extend(tail);
            coeffs
        })
    }

    fn as_poly(e: &Expansion<Q, C>) -> DensePoly<Q> {
        DensePoly::new(e.coeffs().to_vec())
    }

    proptest! {
        #[test]
        fn terms_above_ceiling_vanish(order in -10i32..20, coeff in nonzero_q()) {
            let term = Term::<Q, C>::new(order, coeff.clone());
            if order > 5 {
                prop_assert!(term.coefficient().is_zero());
                prop_assert!(term.is_truncated());
            } else {
                prop_assert_eq!(term.coefficient(), &coeff);
            }
        }

        #[test]
        fn add_commutative(a in expansion(), b in expansion()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in expansion(), b in expansion(), c in expansion()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn add_length_is_max(a in expansion(), b in expansion()) {
            prop_assert_eq!(a.add(&b).len(), a.len().max(b.len()));
        }

        #[test]
        fn mul_matches_truncated_polynomial_product(a in expansion(), b in expansion()) {
            let product = a.mul(&b);
            let reference = as_poly(&a).mul(&as_poly(&b)).truncate(C + 1);

            prop_assert_eq!(product.len(), (a.len() + b.len() - 1).min(C + 1));
            prop_assert_eq!(as_poly(&product), reference.clone());
            prop_assert_eq!(product.sum(), reference.eval(&Q::one()));
        }

        #[test]
        fn mul_term_matches_expansion_product(a in expansion(), order in 0i32..=5, coeff in small_q()) {
            let term = Term::<Q, C>::new(order, coeff);
            let shifted = a.mul_term(&term).unwrap();
            let full = a.mul(&term.to_expansion().unwrap());

            prop_assert_eq!(as_poly(&shifted), as_poly(&full));
        }

        #[test]
        fn term_sum_places_each_order(x in 0i32..=5, y in 0i32..=5, cx in small_q(), cy in small_q()) {
            let sum = Term::<Q, C>::new(x, cx.clone()).try_add(&Term::new(y, cy.clone())).unwrap();
            prop_assert_eq!(sum.len(), C + 1);
            prop_assert_eq!(sum.sum(), cx + cy);
        }

        #[test]
        fn inverse_round_trip_is_exactly_one(a in invertible(0..=6), v in small_q()) {
            let inv = series_inverse(&a).unwrap();
            prop_assert_eq!(series_product(&a, &inv, &v).unwrap(), Q::one());
        }

        #[test]
        fn expansion_inverse_is_multiplicative_inverse(a in invertible(0..=5)) {
            let e = Expansion::<Q, C>::new(a).unwrap();
            let one = e.mul(&e.inverse().unwrap());

            prop_assert_eq!(one[0].clone(), Q::one());
            prop_assert!(one.coeffs()[1..].iter().all(Ring::is_zero));
        }

        #[test]
        fn unequal_ratio_matches_padding(a in proptest::collection::vec(small_q(), 1..=6), b in invertible(0..=5)) {
            let len = a.len().max(b.len());
            let mut a_padded = a.clone();
            a_padded.resize(len, Q::zero());
            let mut b_padded = b.clone();
            b_padded.resize(len, Q::zero());

            let direct = series_ratio_unequal(&a, &b).unwrap();
            let padded = series_ratio(&a_padded, &b_padded, &Q::one()).unwrap();
            prop_assert_eq!(direct, padded);
        }

        #[test]
        fn float_inverse_round_trip_is_close_to_one(
            a0 in 1.0f64..5.0,
            tail in proptest::collection::vec(-1.0f64..1.0, 0..=7),
            v in -0.5f64..0.5,
        ) {
            let mut a = vec![a0];
            a.extend(tail);
            let inv = series_inverse(&a).unwrap();
            let one = series_product(&a, &inv, &v).unwrap();

            let scale = inv.iter().fold(1.0f64, |m, c| m.max(c.abs()));
            #[allow(clippy::cast_precision_loss)]
            let tolerance = 1e-13 * a.len() as f64 * scale;
            prop_assert!((one - 1.0).abs() <= tolerance, "got {} for {:?} at v = {}", one, a, v);
        }

        #[test]
        fn float_ratio_tracks_exact_ratio(
            num in proptest::collection::vec(-20i64..20, 1..=6),
            head in 1i64..6,
            den in proptest::collection::vec(-5i64..5, 0..=5),
        ) {
            let mut b: Vec<i64> = vec![head];
            b.extend(den);

            let exact_a: Vec<Q> = num.iter().map(|&n| Q::from_integer(n)).collect();
            let exact_b: Vec<Q> = b.iter().map(|&n| Q::from_integer(n)).collect();
            let exact = series_ratio_unequal(&exact_a, &exact_b).unwrap();

            #[allow(clippy::cast_precision_loss)]
            let float_a: Vec<f64> = num.iter().map(|&n| n as f64).collect();
            #[allow(clippy::cast_precision_loss)]
            let float_b: Vec<f64> = b.iter().map(|&n| n as f64).collect();
            let float = series_ratio_unequal(&float_a, &float_b).unwrap();

            let exact_f64 = exact.numerator().to_string().parse::<f64>().unwrap()
                / exact.denominator().to_string().parse::<f64>().unwrap();
            prop_assert!((float - exact_f64).abs() <= 1e-9 * (1.0 + exact_f64.abs()));
        }
    }

    #[test]
    fn parallel_evaluation_matches_sequential() {
        use rayon::prelude::*;

        let inputs: Vec<Expansion<f64, C>> = (0..256)
            .map(|i| {
                let x = f64::from(i) / 256.0;
                Expansion::new([1.0, -x, 0.5 * x * x, x, -0.25]).unwrap()
            })
            .collect();

        let evaluate = |e: &Expansion<f64, C>| e.mul(e).add_scalar(1.0f64).inverse().unwrap().sum();

        let sequential: Vec<f64> = inputs.iter().map(evaluate).collect();
        let parallel: Vec<f64> = inputs.par_iter().map(evaluate).collect();
        assert_eq!(sequential, parallel);
    }
}
