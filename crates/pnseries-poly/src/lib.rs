//! # pnseries-poly
//!
//! Dense univariate polynomials used as symbolic expansion coefficients.
//!
//! PN coefficients are usually polynomials in a physical parameter, most
//! often the symmetric mass ratio ν (`-3/4 - ν/12` at 1pN in the binding
//! energy). Storing them as [`DensePoly`] instead of numbers keeps the
//! per-order dependence on that parameter, so an expansion can be
//! differentiated with respect to it coefficient by coefficient.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
