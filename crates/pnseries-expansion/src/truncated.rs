//! Order-agnostic truncated-series utilities.
//!
//! These work on plain coefficient slices, independent of [`Term`] and
//! [`Expansion`]: `a[i]` is the coefficient of `vⁱ` in `A(v) = Σ aᵢ vⁱ`, and
//! every result is correct up to and including the highest power present in
//! the input. Downstream formulas use them wherever a PN quantity has to be
//! divided by another (flux over energy derivative, Newton iteration on an
//! orbital separation, ...).
//!
//! [`Term`]: crate::Term
//! [`Expansion`]: crate::Expansion

use crate::buffer::{coefficient_or_zero, CoeffBuffer};
use crate::error::{reject, SeriesError, SeriesResult};
use pnseries_rings::{Field, Ring};

/// Inverts a truncated series.
///
/// Given `(a₀, …, aₙ)`, returns `(b₀, …, bₙ)` with `A·B = 1 + O(vⁿ⁺¹)`:
///
/// b₀ = 1/a₀,  bᵢ = -b₀ Σⱼ₌₁ⁱ aⱼ bᵢ₋ⱼ
///
/// An empty input gives an empty output.
///
/// # Errors
///
/// [`SeriesError::ZeroLeadingCoefficient`] if `a₀` is zero.
pub fn series_inverse<T: Field>(a: &[T]) -> SeriesResult<CoeffBuffer<T>> {
    inverse_padded(a, a.len())
}

/// Inverse of `a` zero-padded to `len` coefficients.
pub(crate) fn inverse_padded<T: Field>(a: &[T], len: usize) -> SeriesResult<CoeffBuffer<T>> {
    let mut b = CoeffBuffer::with_capacity(len);
    if len == 0 {
        return Ok(b);
    }

    let b0 = coefficient_or_zero(a, 0)
        .inv()
        .ok_or_else(|| reject(SeriesError::ZeroLeadingCoefficient))?;
    b.push(b0.clone());

    // Padding contributes nothing to the convolution, so the inner sum
    // stops at the last stored coefficient of `a`.
    let last = a.len().saturating_sub(1);
    for i in 1..len {
        let mut acc = T::zero();
        for j in 1..=i.min(last) {
            acc = acc + a[j].clone() * b[i - j].clone();
        }
        b.push(-(b0.clone() * acc));
    }

    tracing::trace!(len, stored = a.len(), "inverted truncated series");
    Ok(b)
}

/// Evaluates the truncated product `A(v)·B(v)` at a concrete `v`.
///
/// Only the terms up to `vⁿ` are kept, where `n + 1` is the common length:
///
/// Σᵢ aᵢ vⁱ Bₙ₋ᵢ(v),  Bₖ(v) = Σⱼ₌₀ᵏ bⱼ vʲ
///
/// evaluated by Horner's rule on the outer sum with the partial sums of `B`
/// accumulated alongside, so no coefficient buffer is allocated.
///
/// # Errors
///
/// [`SeriesError::LengthMismatch`] if the slices differ in length.
pub fn series_product<T: Ring>(a: &[T], b: &[T], v: &T) -> SeriesResult<T> {
    if a.len() != b.len() {
        return Err(reject(SeriesError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        }));
    }
    Ok(product_padded(a, b, a.len(), v))
}

/// Truncated product of `a` and `b`, both zero-padded to `len` coefficients.
fn product_padded<T: Ring>(a: &[T], b: &[T], len: usize, v: &T) -> T {
    let mut acc = T::zero();
    let mut partial = T::zero();
    let mut v_k = T::one();

    for k in 0..len {
        if let Some(b_k) = b.get(k) {
            partial = partial + b_k.clone() * v_k.clone();
        }
        v_k = v_k * v.clone();

        let term = a
            .get(len - 1 - k)
            .map_or_else(T::zero, |a_i| a_i.clone() * partial.clone());
        acc = acc * v.clone() + term;
    }

    acc
}

/// Evaluates the truncated ratio `A(v)/B(v)` at a concrete `v`.
///
/// Equivalent to `series_product(a, series_inverse(b), v)`.
///
/// # Errors
///
/// [`SeriesError::LengthMismatch`] if the slices differ in length, and
/// [`SeriesError::ZeroLeadingCoefficient`] if `b₀` is zero.
pub fn series_ratio<T: Field>(a: &[T], b: &[T], v: &T) -> SeriesResult<T> {
    let b_inv = series_inverse(b)?;
    series_product(a, &b_inv, v)
}

/// Evaluates the truncated ratio of two series of possibly different length
/// at `v = 1`.
///
/// This is the form used on PN expansions whose coefficients already carry
/// their powers of `v`. The shorter input is treated as zero-padded to the
/// longer length; the result is identical to padding explicitly and calling
/// [`series_ratio`] with `v = 1`, but the padded copy is never built.
///
/// # Errors
///
/// [`SeriesError::ZeroLeadingCoefficient`] if `b₀` is zero or `b` is empty
/// while `a` is not.
pub fn series_ratio_unequal<T: Field>(a: &[T], b: &[T]) -> SeriesResult<T> {
    let len = a.len().max(b.len());
    let b_inv = inverse_padded(b, len)?;
    Ok(product_padded(a, &b_inv, len, &T::one()))
}
