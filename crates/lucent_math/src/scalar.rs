//! Epsilon-aware scalar comparisons.
//!
//! Geometric degeneracies (parallel rays, grazing hits) are detected by
//! comparing against zero; these helpers give every caller the same
//! tolerance.

use std::cmp::Ordering;

/// True when `value` is zero or so close to it that it has fallen into
/// the subnormal range.
#[inline]
pub fn is_zero(value: f32) -> bool {
    value == 0.0 || value.is_subnormal()
}

/// Compare two floats, treating a subnormal difference as equality.
///
/// NaN operands collapse to `Equal` rather than panicking; the tracer
/// only ever feeds distances through here.
#[inline]
pub fn compare(left: f32, right: f32) -> Ordering {
    if is_zero(left - right) {
        Ordering::Equal
    } else {
        left.partial_cmp(&right).unwrap_or(Ordering::Equal)
    }
}
