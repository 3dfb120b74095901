//! Reducing a finished expansion to its result.
//!
//! A formula is built as an [`Expansion`] and reduced once, at the top-level
//! call. [`Sum`] collapses it to the scalar value used by an ODE right-hand
//! side; [`Identity`] hands back the expansion itself so that the caller can
//! post-process it coefficient by coefficient (differentiation with respect
//! to the mass ratio, code generation).
//!
//! Sub-expressions are composed as expansions through [`PnExpression`], so a
//! reducer can only ever be applied to the outermost result. The reducer set
//! is closed:
//!
//! ```compile_fail
//! use pnseries_expansion::{Expansion, Reducer};
//!
//! struct Twice;
//!
//! impl Reducer<f64, 3> for Twice {
//!     type Output = f64;
//!
//!     fn reduce(expansion: Expansion<f64, 3>) -> f64 {
//!         2.0 * expansion.sum()
//!     }
//! }
//! ```

use crate::error::SeriesResult;
use crate::expansion::Expansion;
use crate::term::Term;
use pnseries_rings::Ring;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Sum {}
    impl Sealed for super::Identity {}
}

/// How a finished expansion is turned into a result.
pub trait Reducer<T: Ring, const C: usize>: sealed::Sealed {
    /// What the reduction produces.
    type Output;

    /// Reduces a finished expansion.
    fn reduce(expansion: Expansion<T, C>) -> Self::Output;
}

/// Collapse to the scalar value of the series (the default).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sum;

/// Return the expansion unreduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Ring, const C: usize> Reducer<T, C> for Sum {
    type Output = T;

    fn reduce(expansion: Expansion<T, C>) -> T {
        expansion.sum()
    }
}

impl<T: Ring, const C: usize> Reducer<T, C> for Identity {
    type Output = Expansion<T, C>;

    fn reduce(expansion: Expansion<T, C>) -> Expansion<T, C> {
        expansion
    }
}

/// A PN formula: something that builds an expansion.
///
/// Closures returning `SeriesResult<Expansion<T, C>>` implement this, so a
/// formula is usually written as one and combined with others through
/// [`expand`](Self::expand).
pub trait PnExpression<T: Ring, const C: usize> {
    /// Builds the unreduced expansion.
    ///
    /// # Errors
    ///
    /// Whatever the formula's own checked operations report.
    fn expand(&self) -> SeriesResult<Expansion<T, C>>;

    /// Builds the expansion and reduces it with `R`.
    ///
    /// # Errors
    ///
    /// See [`expand`](Self::expand).
    fn reduce_with<R: Reducer<T, C>>(&self) -> SeriesResult<R::Output> {
        Ok(R::reduce(self.expand()?))
    }

    /// Builds the expansion and sums it.
    ///
    /// # Errors
    ///
    /// See [`expand`](Self::expand).
    fn value(&self) -> SeriesResult<T> {
        self.reduce_with::<Sum>()
    }
}

impl<T, F, const C: usize> PnExpression<T, C> for F
where
    T: Ring,
    F: Fn() -> SeriesResult<Expansion<T, C>>,
{
    fn expand(&self) -> SeriesResult<Expansion<T, C>> {
        self()
    }
}

impl<T: Ring, const C: usize> PnExpression<T, C> for Expansion<T, C> {
    fn expand(&self) -> SeriesResult<Expansion<T, C>> {
        Ok(self.clone())
    }
}

impl<T: Ring, const C: usize> PnExpression<T, C> for Term<T, C> {
    fn expand(&self) -> SeriesResult<Expansion<T, C>> {
        self.to_expansion()
    }
}
