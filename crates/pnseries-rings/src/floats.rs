//! Machine floating-point coefficients.
//!
//! `f64` is the workhorse for numerical evolution; `f32` is mostly useful for
//! checking that promotion keeps the wider type.

use crate::traits::{Field, Ring, SquareRoot};

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Ring for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            #[inline]
            fn is_one(&self) -> bool {
                *self == 1.0
            }

            #[inline]
            fn mul_by_scalar(&self, n: i64) -> Self {
                #[allow(clippy::cast_precision_loss)]
                let n = n as $t;
                self * n
            }
        }

        impl Field for $t {
            #[inline]
            fn inv(&self) -> Option<Self> {
                if *self == 0.0 {
                    None
                } else {
                    Some(1.0 / self)
                }
            }

            #[inline]
            fn field_div(&self, other: &Self) -> Option<Self> {
                if *other == 0.0 {
                    None
                } else {
                    Some(self / other)
                }
            }
        }

        impl SquareRoot for $t {
            #[inline]
            fn square_root(&self) -> Option<Self> {
                if *self < 0.0 {
                    None
                } else {
                    Some(<$t>::sqrt(*self))
                }
            }
        }
    )*};
}

impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert!(<f64 as Ring>::zero().is_zero());
        assert!(<f32 as Ring>::one().is_one());
        assert_eq!(2.5f64.mul_by_scalar(-4), -10.0);
    }

    #[test]
    fn test_pow() {
        assert_eq!(Ring::pow(&3.0f64, 4), 81.0);
        assert_eq!(Ring::pow(&3.0f64, 0), 1.0);
    }

    #[test]
    fn test_division() {
        assert_eq!(4.0f64.inv(), Some(0.25));
        assert_eq!(0.0f64.inv(), None);
        assert_eq!(1.0f64.field_div(&4.0), Some(0.25));
        assert_eq!(1.0f32.field_div(&0.0), None);
    }

    #[test]
    fn test_square_root() {
        assert_eq!(9.0f64.square_root(), Some(3.0));
        assert_eq!((-1.0f64).square_root(), None);
    }
}
