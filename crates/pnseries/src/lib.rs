//! # pnseries
//!
//! Truncated series arithmetic for post-Newtonian compact-binary formulas.
//!
//! Physics formulas are written as ordinary Rust expressions over the
//! expansion parameter ε; the order of every quantity is tracked and
//! everything beyond the declared PN order vanishes by itself.
//!
//! ## Features
//!
//! - **Order tracking**: [`Term`](expansion::Term) and
//!   [`Expansion`](expansion::Expansion) with a compile-time ceiling
//! - **Any coefficient type**: `f32`, `f64`, exact rationals, polynomials
//!   in the mass ratio, with precision-preserving promotion
//! - **Reducers**: the same formula yields a number for an ODE right-hand
//!   side or a structured expansion for symbolic post-processing
//! - **Series utilities**: inversion, product and ratio of truncated
//!   coefficient sequences
//!
//! ## Quick Start
//!
//! ```rust
//! use pnseries::prelude::*;
//!
//! const ORDER: PnOrder = PnOrder::from_half_orders(4);
//! const C: usize = ORDER.ceiling();
//!
//! // E = -½ μ v² [1 + (-3/4 - ν/12) v²/c² + ...]
//! fn energy<R: Reducer<f64, C>>(nu: f64, v: f64) -> SeriesResult<R::Output> {
//!     let formula = || -> SeriesResult<Expansion<f64, C>> {
//!         let c = inverse_expansion_parameter::<f64, C>();
//!         let x = Term::constant(v * v) / c / c;
//!         Ok((1.0 + x * (-0.75 - nu / 12.0)) * (-0.5 * nu * v * v))
//!     };
//!     formula.reduce_with::<R>()
//! }
//!
//! let value = energy::<Sum>(0.25, 0.3).unwrap();
//! let expansion = energy::<Identity>(0.25, 0.3).unwrap();
//! assert_eq!(expansion.len(), C + 1);
//! assert!((expansion.sum() - value).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use pnseries_expansion as expansion;
pub use pnseries_integers as integers;
pub use pnseries_poly as poly;
pub use pnseries_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use pnseries_expansion::{
        expansion_parameter, inverse_expansion_parameter, Expansion, Identity, PnExpression,
        PnOrder, Reducer, SeriesError, SeriesResult, Sum, Term,
    };
    pub use pnseries_integers::Rational;
    pub use pnseries_poly::DensePoly;
    pub use pnseries_rings::{Differentiable, Field, Promote, Ring, Q};
}
