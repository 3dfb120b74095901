//! Coefficient storage.
//!
//! Ceilings used in practice stay below 16 (7.5pN), so buffers keep that many
//! slots inline. Machine-float expansions then never allocate, which matters
//! inside an ODE right-hand side. Longer buffers spill to the heap.

use pnseries_rings::Ring;
use smallvec::SmallVec;

/// Number of coefficient slots stored inline.
pub const INLINE_SLOTS: usize = 16;

/// Coefficient buffer shared by expansions and the series utilities.
pub type CoeffBuffer<T> = SmallVec<[T; INLINE_SLOTS]>;

/// A buffer of `len` zeros.
pub(crate) fn zeros<T: Ring>(len: usize) -> CoeffBuffer<T> {
    smallvec::smallvec![T::zero(); len]
}

/// The coefficient at `index`, or zero past the end of the sequence.
///
/// Reading a short sequence this way is equivalent to padding it with zeros
/// without materialising the padding.
#[inline]
pub(crate) fn coefficient_or_zero<T: Ring>(coeffs: &[T], index: usize) -> T {
    coeffs.get(index).cloned().unwrap_or_else(T::zero)
}
