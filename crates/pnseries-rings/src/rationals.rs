//! The field of rational numbers Q.

use crate::traits::{Field, Ring};
use pnseries_integers::Rational;

/// Exact rational coefficients.
///
/// Shorthand used throughout the workspace for `pnseries_integers::Rational`.
pub type Q = Rational;

impl Ring for Rational {
    fn zero() -> Self {
        <Rational as num_traits::Zero>::zero()
    }

    fn one() -> Self {
        <Rational as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self * &Rational::from_integer(n)
    }

    fn pow(&self, n: u32) -> Self {
        Rational::pow(self, n)
    }
}

impl Field for Rational {
    fn inv(&self) -> Option<Self> {
        self.checked_recip()
    }
}
