//! Division that never fails.
//!
//! A zero denominator yields a null cell, not an error and not infinity.
//! Nulls on either side propagate.

use polars::prelude::*;

/// Divide one cell.
///
/// Returns `None` when either operand is missing or the denominator is zero.
#[inline]
pub fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Divide two columns element-wise with [`safe_div`].
///
/// The result takes the numerator's name. Both inputs must have the same
/// length.
pub fn safe_divide(numerator: &Float64Chunked, denominator: &Float64Chunked) -> Float64Chunked {
    debug_assert_eq!(numerator.len(), denominator.len());

    let quotient: Float64Chunked = numerator
        .into_iter()
        .zip(denominator)
        .map(|(n, d)| safe_div(n, d))
        .collect();

    quotient.with_name(numerator.name().clone())
}
