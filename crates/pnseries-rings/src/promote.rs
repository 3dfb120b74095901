//! Promotion between coefficient types.
//!
//! Combining two coefficients of different types must never lose precision:
//! the result lives in the wider of the two. [`Promote`] is the rule table;
//! every mixed-type operation on terms and expansions is routed through it.

use crate::traits::Ring;

/// Promotion of a pair of coefficient types to a common type.
///
/// `Self` is the left operand, `Rhs` the right one.
pub trait Promote<Rhs: Ring>: Ring {
    /// The common type both operands are converted to.
    type Promoted: Ring;

    /// Converts the left operand.
    fn promote_lhs(self) -> Self::Promoted;

    /// Converts the right operand.
    fn promote_rhs(rhs: Rhs) -> Self::Promoted;
}

impl<T: Ring> Promote<T> for T {
    type Promoted = T;

    #[inline]
    fn promote_lhs(self) -> T {
        self
    }

    #[inline]
    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

impl Promote<f64> for f32 {
    type Promoted = f64;

    #[inline]
    fn promote_lhs(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn promote_rhs(rhs: f64) -> f64 {
        rhs
    }
}

impl Promote<f32> for f64 {
    type Promoted = f64;

    #[inline]
    fn promote_lhs(self) -> f64 {
        self
    }

    #[inline]
    fn promote_rhs(rhs: f32) -> f64 {
        f64::from(rhs)
    }
}
