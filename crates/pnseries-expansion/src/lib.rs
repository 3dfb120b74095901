//! # pnseries-expansion
//!
//! Order-tracking arithmetic for post-Newtonian series.
//!
//! PN formulas are long asymptotic series in a small parameter ε, truncated
//! at a declared order. This crate tracks the order of every quantity so that
//! anything beyond the declared ceiling vanishes on its own:
//!
//! - [`Term`]: one monomial `c·εⁿ`
//! - [`Expansion`]: a truncated series `Σₖ cₖ εᵏ` with at most `C + 1` slots
//! - [`expansion_parameter`] / [`inverse_expansion_parameter`]: ε and `c = ε⁻¹`
//! - [`Reducer`] and [`PnExpression`]: turning a finished formula into a
//!   scalar ([`Sum`]) or keeping it structured ([`Identity`])
//! - [`truncated`]: inversion, product and ratio on plain coefficient slices
//!
//! The ceiling `C` is a const generic, so quantities truncated at different
//! orders cannot be mixed.
//!
//! ```
//! use pnseries_expansion::{expansion_parameter, Expansion};
//!
//! let eps = expansion_parameter::<f64, 3>();
//! let a = 2.0 * eps * eps;
//! let b = 5.0 * eps;
//!
//! let sum: Expansion<f64, 3> = a + b;
//! assert_eq!(sum.coeffs(), &[0.0, 5.0, 2.0, 0.0]);
//! assert_eq!(sum.sum(), 7.0);
//! assert_eq!(*(a * a).coefficient(), 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod error;
pub mod expansion;
mod ops;
pub mod parameter;
pub mod reducer;
pub mod term;
pub mod truncated;

#[cfg(test)]
mod proptests;

pub use buffer::CoeffBuffer;
pub use error::{SeriesError, SeriesResult};
pub use expansion::Expansion;
pub use parameter::{expansion_parameter, inverse_expansion_parameter, PnOrder};
pub use reducer::{Identity, PnExpression, Reducer, Sum};
pub use term::Term;
pub use truncated::{series_inverse, series_product, series_ratio, series_ratio_unequal};
