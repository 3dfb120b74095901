//! Algebraic structure traits.
//!
//! Every coefficient stored in a PN term or expansion implements [`Ring`].
//! The extra capabilities an operation needs (inversion, square roots,
//! differentiation) are separate traits so that symbolic coefficient types
//! only have to provide what they can actually support.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Floating-point types satisfy these laws only up to rounding.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// Returns `None` if `other` is zero.
    fn field_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inv| self.clone() * inv)
    }
}

/// Coefficients with a principal square root.
pub trait SquareRoot: Ring {
    /// Returns the principal square root, or `None` if it does not exist in
    /// this type (for instance a negative real number).
    fn square_root(&self) -> Option<Self>;
}

/// Coefficients that depend on an external variable and can be
/// differentiated with respect to it.
///
/// The variable is whatever the coefficient type is built over (the mass
/// ratio ν for polynomial coefficients, say); it is never the formal
/// expansion parameter itself.
pub trait Differentiable: Ring {
    /// Returns the derivative with respect to the coefficient's variable.
    #[must_use]
    fn derivative(&self) -> Self;
}
