//! The single error type of the truncated-series engine.
//!
//! Every variant describes a formula that is structurally inconsistent with
//! its declared truncation order. None of them is recoverable; they exist so
//! that the failure reaches the caller with a readable description instead of
//! a silently wrong number.

use thiserror::Error;

/// An invalid truncated-series operation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SeriesError {
    /// A term of negative order was added to something.
    #[error("cannot add a term of negative order {order}: it has no slot in a truncated expansion")]
    NegativeOrder {
        /// The offending order.
        order: i32,
    },

    /// An expansion was built from no coefficients.
    #[error("an expansion needs at least one coefficient")]
    EmptyExpansion,

    /// An expansion was built with more coefficients than its ceiling allows.
    #[error("{len} coefficients exceed the {max} slots allowed by the ceiling")]
    TooManyCoefficients {
        /// Number of coefficients supplied.
        len: usize,
        /// `ceiling + 1`.
        max: usize,
    },

    /// Multiplying by a negative-order term would push a nonzero coefficient
    /// below order zero.
    #[error("multiplying by a term of order {order} would discard the nonzero coefficient of order {lost}")]
    InformationLoss {
        /// Order of the multiplying term.
        order: i32,
        /// Order of the first coefficient that would be lost.
        lost: usize,
    },

    /// Square root of a term whose order is odd.
    #[error("cannot take the square root of a term of odd order {order}")]
    OddOrderSqrt {
        /// The offending order.
        order: i32,
    },

    /// The coefficient has no square root in its own type.
    #[error("square root of the coefficient is undefined")]
    SqrtDomain,

    /// Series inversion with a vanishing constant term.
    #[error("cannot invert a series whose leading coefficient is zero")]
    ZeroLeadingCoefficient,

    /// Inversion or division by a zero coefficient.
    #[error("division by a zero coefficient")]
    DivisionByZero,

    /// Two coefficient sequences that must have equal length do not.
    #[error("series lengths differ: {left} and {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// A PN order that is not a non-negative multiple of one half.
    #[error("{value} is not a valid PN order (expected a non-negative multiple of 1/2)")]
    InvalidPnOrder {
        /// The rejected value.
        value: f64,
    },
}

/// Result alias used throughout the engine.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Records a rejected operation and hands the error back for returning.
pub(crate) fn reject(err: SeriesError) -> SeriesError {
    tracing::debug!(error = %err, "rejected truncated-series operation");
    err
}

/// Aborts the current formula evaluation.
///
/// Used by the operator overloads, which cannot return a `Result`.
#[cold]
#[track_caller]
pub(crate) fn fail_fast(err: SeriesError) -> ! {
    panic!("invalid truncated-series operation: {err}")
}
