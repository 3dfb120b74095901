//! The formal expansion parameter and PN order bookkeeping.

use crate::error::{reject, SeriesError, SeriesResult};
use crate::term::Term;
use pnseries_rings::Ring;
use std::fmt;

/// The small parameter ε as a term: order one, unit coefficient.
///
/// Multiplying a quantity by it raises the quantity's order by one.
#[must_use]
pub fn expansion_parameter<T: Ring, const C: usize>() -> Term<T, C> {
    Term::new(1, T::one())
}

/// The large parameter `c = ε⁻¹`: order minus one, unit coefficient.
///
/// Formulas written in powers of `1/c` divide by this term; each division
/// raises the order by one.
#[must_use]
pub fn inverse_expansion_parameter<T: Ring, const C: usize>() -> Term<T, C> {
    Term::new(-1, T::one())
}

/// A post-Newtonian order, in steps of one half.
///
/// One PN order is two powers of ε (`v/c` counts as one power and the PN
/// hierarchy advances in `(v/c)²`), so the ceiling of an expansion that
/// keeps everything through `n` PN orders is `2n`.
///
/// ```
/// use pnseries_expansion::{Expansion, PnOrder};
///
/// const ORDER: PnOrder = PnOrder::from_half_orders(7);
/// type Flux = Expansion<f64, { ORDER.ceiling() }>;
///
/// assert_eq!(ORDER.to_string(), "3.5pN");
/// assert_eq!(Flux::CEILING, 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PnOrder {
    half_orders: u32,
}

impl PnOrder {
    /// Newtonian order.
    pub const NEWTONIAN: Self = Self::from_half_orders(0);

    /// An order given as a count of half PN orders (`7` is 3.5pN).
    #[must_use]
    pub const fn from_half_orders(half_orders: u32) -> Self {
        Self { half_orders }
    }

    /// Parses an order such as `3.5`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::InvalidPnOrder`] unless `value` is finite, non-negative
    /// and a multiple of one half.
    pub fn from_f64(value: f64) -> SeriesResult<Self> {
        let doubled = value * 2.0;
        let valid = value.is_finite()
            && value >= 0.0
            && doubled.fract() == 0.0
            && doubled <= f64::from(u32::MAX);
        if !valid {
            return Err(reject(SeriesError::InvalidPnOrder { value }));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let half_orders = doubled as u32;
        Ok(Self { half_orders })
    }

    /// The number of half orders.
    #[must_use]
    pub const fn half_orders(self) -> u32 {
        self.half_orders
    }

    /// The ε ceiling of an expansion truncated at this order.
    #[must_use]
    pub const fn ceiling(self) -> usize {
        self.half_orders as usize
    }

    /// The order as a number of PN orders.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.half_orders) / 2.0
    }
}

impl fmt::Display for PnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.half_orders % 2 == 0 {
            write!(f, "{}pN", self.half_orders / 2)
        } else {
            write!(f, "{}.5pN", self.half_orders / 2)
        }
    }
}
