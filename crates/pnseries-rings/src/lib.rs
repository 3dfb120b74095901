//! # pnseries-rings
//!
//! Coefficient algebra for pnseries.
//!
//! This crate provides:
//! - Abstract traits: [`Ring`], [`Field`], [`SquareRoot`], [`Differentiable`]
//! - Type promotion between coefficient types: [`Promote`]
//! - Implementations for `f32`, `f64` and exact [`Q`] rationals
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Field
//!  ├── SquareRoot
//!  └── Differentiable
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod floats;
pub mod promote;
pub mod rationals;
pub mod traits;

pub use promote::Promote;
pub use rationals::Q;
pub use traits::{Differentiable, Field, Ring, SquareRoot};
