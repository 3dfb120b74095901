//! Fixed-capacity truncated series.
//!
//! An [`Expansion`] stores the coefficients of `Σₖ cₖ εᵏ` for orders
//! `0..len`, with `1 ≤ len ≤ C + 1`. Its current length moves with the
//! operands it was built from; its capacity is fixed by the ceiling `C`.
//!
//! The ceiling is part of the type, so combining expansions declared with
//! different ceilings does not compile:
//!
//! ```compile_fail
//! use pnseries_expansion::Expansion;
//!
//! let a = Expansion::<f64, 3>::new([1.0, 2.0]).unwrap();
//! let b = Expansion::<f64, 4>::new([1.0, 2.0]).unwrap();
//! let _ = a.add(&b);
//! ```

use crate::buffer::{coefficient_or_zero, zeros, CoeffBuffer};
use crate::error::{reject, SeriesError, SeriesResult};
use crate::term::Term;
use crate::truncated::{inverse_padded, series_ratio_unequal};
use pnseries_rings::{Differentiable, Field, Promote, Ring};
use std::fmt;
use std::ops::Index;

/// A truncated series in ε with ceiling `C`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expansion<T, const C: usize> {
    /// `coeffs[k]` is the coefficient of εᵏ. Never empty, never longer than
    /// `C + 1`.
    coeffs: CoeffBuffer<T>,
}

/// Truncated convolution of two coefficient sequences, keeping `len` terms.
fn convolve<O: Ring>(a: &[O], b: &[O], len: usize) -> CoeffBuffer<O> {
    (0..len)
        .map(|i| {
            let lo = i.saturating_sub(b.len() - 1);
            let hi = i.min(a.len() - 1);
            (lo..=hi).fold(O::zero(), |acc, j| acc + a[j].clone() * b[i - j].clone())
        })
        .collect()
}

impl<T: Ring, const C: usize> Expansion<T, C> {
    /// The declared ceiling: the highest order that survives truncation.
    pub const CEILING: usize = C;

    /// Creates an expansion from coefficients in ascending order.
    ///
    /// # Errors
    ///
    /// [`SeriesError::EmptyExpansion`] for no coefficients,
    /// [`SeriesError::TooManyCoefficients`] for more than `C + 1`.
    pub fn new<I: IntoIterator<Item = T>>(coefficients: I) -> SeriesResult<Self> {
        let coeffs: CoeffBuffer<T> = coefficients.into_iter().collect();
        if coeffs.is_empty() {
            return Err(reject(SeriesError::EmptyExpansion));
        }
        if coeffs.len() > C + 1 {
            return Err(reject(SeriesError::TooManyCoefficients {
                len: coeffs.len(),
                max: C + 1,
            }));
        }
        Ok(Self { coeffs })
    }

    /// Wraps a buffer that already satisfies the length invariant.
    pub(crate) fn from_buffer(coeffs: CoeffBuffer<T>) -> Self {
        debug_assert!(!coeffs.is_empty() && coeffs.len() <= C + 1);
        Self { coeffs }
    }

    /// The zero expansion (a single zero coefficient).
    #[must_use]
    pub fn zero() -> Self {
        Self::from_buffer(zeros(1))
    }

    /// An expansion holding only an order-zero coefficient.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::from_buffer(smallvec::smallvec![value])
    }

    /// Number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false: an expansion holds at least one coefficient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The coefficient of εᵏ, if stored.
    #[must_use]
    pub fn coeff(&self, order: usize) -> Option<&T> {
        self.coeffs.get(order)
    }

    /// All stored coefficients in ascending order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Iterates over the coefficients in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Consumes the expansion, returning its coefficient buffer.
    #[must_use]
    pub fn into_coeffs(self) -> CoeffBuffer<T> {
        self.coeffs
    }

    /// The value of the whole truncated series: every coefficient summed,
    /// starting from zero.
    #[must_use]
    pub fn sum(&self) -> T {
        self.coeffs
            .iter()
            .fold(T::zero(), |acc, c| acc + c.clone())
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_buffer(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Applies `f` to every coefficient, keeping the shape.
    ///
    /// This is the hook for operations that act on coefficients alone, such
    /// as differentiation with respect to a physical variable.
    #[must_use]
    pub fn map_coefficients<U: Ring, F: FnMut(&T) -> U>(&self, f: F) -> Expansion<U, C> {
        Expansion::from_buffer(self.coeffs.iter().map(f).collect())
    }

    /// Adds a scalar to the order-zero coefficient.
    #[must_use]
    pub fn add_scalar<U: Ring>(&self, scalar: U) -> Expansion<<T as Promote<U>>::Promoted, C>
    where
        T: Promote<U>,
    {
        let mut coeffs: CoeffBuffer<_> = self
            .coeffs
            .iter()
            .cloned()
            .map(<T as Promote<U>>::promote_lhs)
            .collect();
        let head = coeffs[0].clone();
        coeffs[0] = head + <T as Promote<U>>::promote_rhs(scalar);
        Expansion::from_buffer(coeffs)
    }

    /// Adds two expansions coefficient-wise.
    ///
    /// The result is as long as the longer operand; the shorter one reads as
    /// zero past its end.
    #[must_use]
    pub fn add<U: Ring>(&self, other: &Expansion<U, C>) -> Expansion<<T as Promote<U>>::Promoted, C>
    where
        T: Promote<U>,
    {
        let len = self.len().max(other.len());
        let coeffs = (0..len)
            .map(|i| {
                <T as Promote<U>>::promote_lhs(coefficient_or_zero(&self.coeffs, i))
                    + <T as Promote<U>>::promote_rhs(coefficient_or_zero(&other.coeffs, i))
            })
            .collect();
        Expansion::from_buffer(coeffs)
    }

    /// Subtracts two expansions coefficient-wise.
    #[must_use]
    pub fn sub<U: Ring>(&self, other: &Expansion<U, C>) -> Expansion<<T as Promote<U>>::Promoted, C>
    where
        T: Promote<U>,
    {
        self.add(&other.neg())
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale<U: Ring>(&self, scalar: U) -> Expansion<<T as Promote<U>>::Promoted, C>
    where
        T: Promote<U>,
    {
        let factor = <T as Promote<U>>::promote_rhs(scalar);
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| <T as Promote<U>>::promote_lhs(c.clone()) * factor.clone())
            .collect();
        Expansion::from_buffer(coeffs)
    }

    /// Multiplies two expansions.
    ///
    /// The product is the discrete convolution of the coefficients, itself
    /// truncated: the result has `min(len₁ + len₂ - 1, C + 1)` coefficients.
    #[must_use]
    pub fn mul<U: Ring>(&self, other: &Expansion<U, C>) -> Expansion<<T as Promote<U>>::Promoted, C>
    where
        T: Promote<U>,
    {
        let a: CoeffBuffer<_> = self
            .coeffs
            .iter()
            .cloned()
            .map(<T as Promote<U>>::promote_lhs)
            .collect();
        let b: CoeffBuffer<_> = other
            .coeffs
            .iter()
            .cloned()
            .map(<T as Promote<U>>::promote_rhs)
            .collect();
        let len = (a.len() + b.len() - 1).min(C + 1);
        Expansion::from_buffer(convolve(&a, &b, len))
    }

    /// Multiplies by a term: every coefficient is scaled by the term's
    /// coefficient and moved up by its order.
    ///
    /// Coefficients pushed past the ceiling are truncated. A negative order
    /// moves coefficients down instead, and the ones that would land below
    /// order zero must all be zero.
    ///
    /// # Errors
    ///
    /// [`SeriesError::InformationLoss`] if a nonzero coefficient would be
    /// moved below order zero.
    pub fn mul_term<U: Ring>(&self, term: &Term<U, C>) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        let factor = <T as Promote<U>>::promote_rhs(term.coefficient().clone());
        self.shift_map(term.order(), |c| {
            <T as Promote<U>>::promote_lhs(c.clone()) * factor.clone()
        })
    }

    /// Maps every coefficient through `f` and moves it up by `order` slots,
    /// truncating at the ceiling. A negative `order` moves coefficients down
    /// and fails if a nonzero one would land below order zero.
    pub(crate) fn shift_map<O, F>(&self, order: i32, f: F) -> SeriesResult<Expansion<O, C>>
    where
        O: Ring,
        F: FnMut(&T) -> O,
    {
        if let Ok(shift) = usize::try_from(order) {
            let len = self.len().saturating_add(shift).min(C + 1);
            let mut coeffs = zeros(shift.min(len));
            let room = len - coeffs.len();
            coeffs.extend(self.coeffs.iter().take(room).map(f));
            return Ok(Expansion::from_buffer(coeffs));
        }

        let dropped = usize::try_from(order.unsigned_abs()).unwrap_or(usize::MAX);
        if let Some(lost) = self.coeffs.iter().take(dropped).position(|c| !c.is_zero()) {
            return Err(reject(SeriesError::InformationLoss { order, lost }));
        }

        let mut coeffs: CoeffBuffer<O> = self.coeffs.iter().skip(dropped).map(f).collect();
        if coeffs.is_empty() {
            coeffs = zeros(1);
        }
        Ok(Expansion::from_buffer(coeffs))
    }

    /// Adds a term.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NegativeOrder`] if the term's order is negative.
    pub fn add_term<U: Ring>(&self, term: &Term<U, C>) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        Ok(self.add(&term.to_expansion()?))
    }

    /// Subtracts a term.
    ///
    /// # Errors
    ///
    /// [`SeriesError::NegativeOrder`] if the term's order is negative.
    pub fn sub_term<U: Ring>(&self, term: &Term<U, C>) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        self.add_term(&term.neg())
    }
}

impl<T: Differentiable, const C: usize> Expansion<T, C> {
    /// Differentiates every coefficient with respect to its own variable.
    ///
    /// The expansion is a series in ε alone, so this is the derivative with
    /// respect to an external quantity (the mass ratio, a spin component, the
    /// PN velocity parameter stored in the coefficients); the shape is kept.
    #[must_use]
    pub fn derivative(&self) -> Self {
        self.map_coefficients(Differentiable::derivative)
    }
}

impl<T: Field, const C: usize> Expansion<T, C> {
    /// The multiplicative inverse, carried to the full `C + 1` orders.
    ///
    /// # Errors
    ///
    /// [`SeriesError::ZeroLeadingCoefficient`] if the order-zero coefficient
    /// is zero.
    pub fn inverse(&self) -> SeriesResult<Self> {
        Ok(Self::from_buffer(inverse_padded(&self.coeffs, C + 1)?))
    }

    /// Divides by another expansion: `self · other⁻¹`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::ZeroLeadingCoefficient`] if the divisor's order-zero
    /// coefficient is zero.
    pub fn div(&self, other: &Self) -> SeriesResult<Self> {
        Ok(self.mul(&other.inverse()?))
    }

    /// Divides by a term: multiplication by its inverse.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionByZero`] for a zero term and
    /// [`SeriesError::InformationLoss`] when the shift would drop a nonzero
    /// coefficient.
    pub fn div_term<U: Field>(&self, term: &Term<U, C>) -> SeriesResult<Expansion<<T as Promote<U>>::Promoted, C>>
    where
        T: Promote<U>,
    {
        self.mul_term(&term.inverse()?)
    }

    /// Divides every coefficient by a scalar.
    ///
    /// # Errors
    ///
    /// [`SeriesError::DivisionByZero`] if the scalar is zero.
    pub fn div_scalar(&self, scalar: &T) -> SeriesResult<Self> {
        let inv = scalar
            .inv()
            .ok_or_else(|| reject(SeriesError::DivisionByZero))?;
        Ok(self.scale(inv))
    }

    /// The value of the truncated ratio `self / other`.
    ///
    /// The two expansions may differ in length; see
    /// [`series_ratio_unequal`](crate::truncated::series_ratio_unequal).
    ///
    /// # Errors
    ///
    /// [`SeriesError::ZeroLeadingCoefficient`] if the divisor's order-zero
    /// coefficient is zero.
    pub fn ratio(&self, other: &Self) -> SeriesResult<T> {
        series_ratio_unequal(&self.coeffs, &other.coeffs)
    }
}

impl<T, const C: usize> Index<usize> for Expansion<T, C> {
    type Output = T;

    fn index(&self, order: usize) -> &T {
        &self.coeffs[order]
    }
}

impl<'a, T, const C: usize> IntoIterator for &'a Expansion<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl<T: Ring, const C: usize> TryFrom<Term<T, C>> for Expansion<T, C> {
    type Error = SeriesError;

    /// Lifts a term to its full-length expansion; see [`Term::to_expansion`].
    fn try_from(term: Term<T, C>) -> SeriesResult<Self> {
        term.to_expansion()
    }
}

impl<T: Ring + fmt::Display, const C: usize> fmt::Display for Expansion<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, c) in self.coeffs.iter().enumerate() {
            if k > 0 {
                write!(f, " + ")?;
            }
            match k {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}·ε")?,
                _ => write!(f, "{c}·ε^{k}")?,
            }
        }
        Ok(())
    }
}
