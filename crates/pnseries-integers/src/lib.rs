//! # pnseries-integers
//!
//! Exact arithmetic for pnseries coefficients.
//!
//! PN coefficients taken from the literature are rational numbers
//! (`-3/4 - ν/12`, `1247/336`, ...). Evaluating them exactly lets the
//! truncation machinery be checked without floating-point noise, and keeps
//! an arbitrary-precision path open for high-order work.
//!
//! This crate wraps `dashu` to provide [`Rational`], stored in lowest terms
//! with a positive denominator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::Rational;
