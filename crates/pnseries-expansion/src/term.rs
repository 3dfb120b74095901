//! Single order-tagged monomials.
//!
//! A [`Term`] is `coefficient · εᵒʳᵈᵉʳ` for a fixed ceiling `C`. Its order
//! is checked once, at construction: anything above the ceiling is
//! negligible at the declared PN order and its coefficient is replaced by
//! zero. All operations return new terms, so the invariant holds for every
//! value that can be observed.

use crate::buffer::zeros;
use crate::error::{reject, SeriesError, SeriesResult};
use crate::expansion::Expansion;
use pnseries_rings::{Field, Promote, Ring, SquareRoot};
use std::fmt;

/// A monomial `coefficient · ε^order` truncated at ceiling `C`.
///
/// Orders may be negative transiently (the large parameter `c = ε⁻¹`, an
/// intermediate inverse), but a negative-order term cannot be added to
/// anything: it has no slot in an [`Expansion`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term<T, const C: usize> {
    order: i32,
    coefficient: T,
}

/// True if `order` lies above the ceiling `C`.
#[inline]
pub(crate) fn exceeds_ceiling<const C: usize>(order: i32) -> bool {
    usize::try_from(order).is_ok_and(|order| order > C)
}

/// Converts an exponent count to an order, saturating (a saturated order is
/// far beyond any ceiling and truncates to zero).
#[inline]
fn order_from_u32(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl<T: Ring, const C: usize> Term<T, C> {
    /// The declared ceiling: the highest order that survives truncation.
    pub const CEILING: usize = C;

    /// Creates a term, zeroing the coefficient if `order` exceeds `C`.
    #[must_use]
    pub fn new(order: i32, coefficient: T) -> Self {
        let coefficient = if exceeds_ceiling::<C>(order) {
            T::zero()
        } else {
            coefficient
        };
        Self { order, coefficient }
    }

    /// Creates an order-zero term.
    #[must_use]
    pub fn constant(coefficient: T) -> Self {
        Self::new(0, coefficient)
    }

    /// The order (power of ε).
    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    /// The coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &T {
        &self.coefficient
    }

    /// Splits the term into `(order, coefficient)`.
    #[must_use]
    pub fn into_parts(self) -> (i32, T) {
        (self.order, self.coefficient)
    }

    /// True if the order is above the ceiling, so the term is zero.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        exceeds_ceiling::<C>(self.order)
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            order: self.order,
            coefficient: -self.coefficient.clone(),
        }
    }

    /// Raises the term to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        Self::new(
            self.order.saturating_mul(order_from_u32(n)),
            self.coefficient.pow(n),
        )
    }

    /// Multiplies two terms: orders add, coefficients multiply in the
    /// promoted type.
    #[must_use]
    pub fn mul_term<U: Ring>(&self, other: &Term<U, C>) -> Term<<T as Promote<U>>::Promoted, C>
    where
        T: Promote<U>,
    {
        Term::new(
            self.order.saturating_add(other.order),
            <T as Promote<U>>::promote_lhs(self.coefficient.clone())
                * <T as Promote<U>>::promote_rhs(other.coefficient.clone()),
        )
    }

    /// Multiplies the coefficient by a scalar; the order is unchanged.
    #[must_use]
    pub fn scale<U: Ring>(&self, scalar: U) -> Term<<T as Promote<U>>::Promoted, C>
    where
        T: Promote<U>,
    {
        Term::new(
            self.order,
            <T as Promote<U>>::promote_lhs(self.coefficient.clone())
                * <T as Promote<U>>::promote_rhs(scalar),
        )
    }

    /// Divides the coefficient by a scalar; the order is unchanged.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionByZero`] if the scalar is zero.
    pub fn div_scalar<U: Ring>(&self, scalar: U) -> SeriesResult<Term<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
        <T as Promote<U>>::Promoted: Field,
    {
        let coefficient = <T as Promote<U>>::promote_lhs(self.coefficient.clone())
            .field_div(&<T as Promote<U>>::promote_rhs(scalar))
            .ok_or_else(|| reject(SeriesError::DivisionByZero))?;
        Ok(Term::new(self.order, coefficient))
    }

    /// Multiplies an expansion by this term, the term on the left.
    ///
    /// The same shift as [`Expansion::mul_term`], with the operands promoted
    /// in this order.
    ///
    /// # Errors
    ///
    /// [`SeriesError::InformationLoss`] if a negative order would move a
    /// nonzero coefficient below order zero.
    pub fn mul_expansion<U: Ring>(
        &self,
        expansion: &Expansion<U, C>,
    ) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        let factor = <T as Promote<U>>::promote_lhs(self.coefficient.clone());
        expansion.shift_map(self.order, |c| {
            factor.clone() * <T as Promote<U>>::promote_rhs(c.clone())
        })
    }

    /// The expansion holding only this term, of length `C + 1`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NegativeOrder`] if the order is negative.
    pub fn to_expansion(&self) -> SeriesResult<Expansion<T, C>> {
        let slot = usize::try_from(self.order)
            .map_err(|_| reject(SeriesError::NegativeOrder { order: self.order }))?;

        let mut coeffs = zeros(C + 1);
        if slot <= C {
            coeffs[slot] = self.coefficient.clone();
        }
        Ok(Expansion::from_buffer(coeffs))
    }

    /// Adds two terms. The sum of two monomials is not a monomial, so the
    /// result is always an [`Expansion`] of length `C + 1`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NegativeOrder`] if either order is negative.
    pub fn try_add<U: Ring>(&self, other: &Term<U, C>) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        let lhs = self.to_expansion()?;
        let rhs = other.to_expansion()?;
        Ok(lhs.add(&rhs))
    }

    /// Subtracts two terms; `a - b` is `a + (-b)`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NegativeOrder`] if either order is negative.
    pub fn try_sub<U: Ring>(&self, other: &Term<U, C>) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        self.try_add(&other.neg())
    }

    /// Adds a scalar (an order-zero quantity).
    ///
    /// # Errors
    ///
    /// [`SeriesError::NegativeOrder`] if the term's order is negative.
    pub fn try_add_scalar<U: Ring>(&self, scalar: U) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        Ok(self.to_expansion()?.add_scalar(scalar))
    }
}

impl<T: Field, const C: usize> Term<T, C> {
    /// The multiplicative inverse: order negated, coefficient inverted.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionByZero`] if the coefficient is zero, which
    /// includes every truncated term.
    pub fn inverse(&self) -> SeriesResult<Self> {
        let coefficient = self
            .coefficient
            .inv()
            .ok_or_else(|| reject(SeriesError::DivisionByZero))?;
        Ok(Self::new(self.order.saturating_neg(), coefficient))
    }

    /// Raises the term to any integer power.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionByZero`] if `n` is negative and the coefficient
    /// is zero.
    pub fn powi(&self, n: i32) -> SeriesResult<Self> {
        match u32::try_from(n) {
            Ok(n) => Ok(self.pow(n)),
            Err(_) => Ok(self.inverse()?.pow(n.unsigned_abs())),
        }
    }

    /// Divides two terms: orders subtract, coefficients divide in the
    /// promoted type.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionByZero`] if the divisor's coefficient is zero.
    pub fn div_term<U: Field>(&self, other: &Term<U, C>) -> SeriesResult<Term<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        Ok(self.mul_term(&other.inverse()?))
    }
}

impl<T: SquareRoot, const C: usize> Term<T, C> {
    /// The principal square root: order halved, coefficient rooted.
    ///
    /// # Errors
    ///
    /// [`SeriesError::OddOrderSqrt`] if the order is odd (the result would
    /// sit at a half-integer order), [`SeriesError::SqrtDomain`] if the
    /// coefficient has no square root.
    pub fn sqrt(&self) -> SeriesResult<Self> {
        if self.order % 2 != 0 {
            return Err(reject(SeriesError::OddOrderSqrt { order: self.order }));
        }
        let coefficient = self
            .coefficient
            .square_root()
            .ok_or_else(|| reject(SeriesError::SqrtDomain))?;
        Ok(Self::new(self.order / 2, coefficient))
    }
}

impl<T: Ring + fmt::Display, const C: usize> fmt::Display for Term<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            0 => write!(f, "{}", self.coefficient),
            1 => write!(f, "{}·ε", self.coefficient),
            n => write!(f, "{}·ε^{n}", self.coefficient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnseries_rings::Q;

    type T3 = Term<f64, 3>;

    fn q(n: i64, d: i64) -> Q {
        Q::new(n, d)
    }

    #[test]
    fn test_truncation_at_construction() {
        let t = T3::new(4, 9.0);
        assert_eq!(t.order(), 4);
        assert_eq!(*t.coefficient(), 0.0);
        assert!(t.is_truncated());

        let t = T3::new(3, 9.0);
        assert_eq!(*t.coefficient(), 9.0);
        assert!(!t.is_truncated());

        let t = T3::new(-2, 9.0);
        assert_eq!(*t.coefficient(), 9.0);
    }

    #[test]
    fn test_mul_and_div() {
        let a = T3::new(2, 2.0);
        let b = T3::new(1, 5.0);

        let p = a.mul_term(&b);
        assert_eq!(p, T3::new(3, 10.0));

        let r = a.div_term(&b).unwrap();
        assert_eq!(r, T3::new(1, 0.4));

        // 2ε² · 2ε² is beyond the ceiling
        assert_eq!(a.mul_term(&a), T3::new(4, 0.0));
    }

    #[test]
    fn test_scalar_ops_keep_order() {
        let a = Term::<Q, 3>::new(2, q(3, 4));
        assert_eq!(a.scale(q(2, 1)), Term::new(2, q(3, 2)));
        assert_eq!(a.div_scalar(q(3, 1)).unwrap(), Term::new(2, q(1, 4)));
        assert_eq!(
            a.div_scalar(q(0, 1)).unwrap_err(),
            SeriesError::DivisionByZero
        );
    }

    #[test]
    fn test_inverse_and_powers() {
        let a = Term::<Q, 6>::new(2, q(2, 3));
        assert_eq!(a.inverse().unwrap(), Term::new(-2, q(3, 2)));
        assert_eq!(a.pow(3), Term::new(6, q(8, 27)));
        assert_eq!(a.powi(-2).unwrap(), Term::new(-4, q(9, 4)));
        assert_eq!(a.powi(0).unwrap(), Term::new(0, q(1, 1)));
        assert_eq!(a.pow(4), Term::new(8, q(0, 1)));

        let truncated = Term::<Q, 6>::new(7, q(1, 1));
        assert_eq!(truncated.inverse().unwrap_err(), SeriesError::DivisionByZero);
    }

    #[test]
    fn test_sqrt() {
        let t = T3::new(2, 9.0);
        assert_eq!(t.sqrt().unwrap(), T3::new(1, 3.0));

        assert_eq!(
            T3::new(1, 4.0).sqrt().unwrap_err(),
            SeriesError::OddOrderSqrt { order: 1 }
        );
        assert_eq!(T3::new(2, -4.0).sqrt().unwrap_err(), SeriesError::SqrtDomain);
    }

    #[test]
    fn test_add_makes_expansion() {
        let a = T3::new(2, 2.0);
        let b = T3::new(1, 5.0);

        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.coeffs(), &[0.0, 5.0, 2.0, 0.0]);
        assert_eq!(sum.sum(), 7.0);

        let diff = a.try_sub(&b).unwrap();
        assert_eq!(diff.coeffs(), &[0.0, -5.0, 2.0, 0.0]);

        let same = a.try_add(&a).unwrap();
        assert_eq!(same.coeffs(), &[0.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn test_add_scalar() {
        let a = T3::new(1, 5.0);
        let sum = a.try_add_scalar(1.5f64).unwrap();
        assert_eq!(sum.coeffs(), &[1.5, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_add_rejects_negative_order() {
        let a = T3::new(-1, 1.0);
        let b = T3::new(-2, 1.0);

        assert_eq!(
            a.try_add(&b).unwrap_err(),
            SeriesError::NegativeOrder { order: -1 }
        );
        assert_eq!(
            T3::new(0, 1.0).try_add(&b).unwrap_err(),
            SeriesError::NegativeOrder { order: -2 }
        );
        assert!(a.try_add_scalar(1.0f64).is_err());
    }

    #[test]
    fn test_truncated_term_adds_nothing() {
        let sum = T3::new(5, 1.0).try_add(&T3::new(0, 2.0)).unwrap();
        assert_eq!(sum.coeffs(), &[2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mixed_precision_promotes() {
        let a = Term::<f32, 3>::new(1, 0.5);
        let b = Term::<f64, 3>::new(1, 0.25);

        let p: Term<f64, 3> = a.mul_term(&b);
        assert_eq!(p, Term::new(2, 0.125));

        let s = a.try_add(&b).unwrap();
        assert_eq!(s.coeffs(), &[0.0, 0.75, 0.0, 0.0]);
    }

    #[test]
    fn test_mul_expansion_promotes_and_shifts() {
        let t = Term::<f32, 3>::new(1, 0.5);
        let e = Expansion::<f64, 3>::new([2.0, 4.0, 6.0]).unwrap();

        let p: Expansion<f64, 3> = t.mul_expansion(&e).unwrap();
        assert_eq!(p.coeffs(), &[0.0, 1.0, 2.0, 3.0]);

        let down = T3::new(-1, 1.0).mul_expansion(&e);
        assert_eq!(
            down.unwrap_err(),
            SeriesError::InformationLoss { order: -1, lost: 0 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::<Q, 4>::new(2, q(-1, 3)).to_string(), "-1/3·ε^2");
        assert_eq!(Term::<Q, 4>::new(1, q(2, 1)).to_string(), "2·ε");
        assert_eq!(Term::<Q, 4>::new(0, q(2, 1)).to_string(), "2");
    }
}
