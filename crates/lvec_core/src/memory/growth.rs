//! # Growth Policy
//!
//! Capacity arithmetic only; no allocation happens here.

/// Capacity after one growth step by `factor`.
///
/// `floor(capacity * factor)`, but always at least one slot more than
/// `capacity` so small buffers cannot stall.
#[inline]
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn grown_capacity(capacity: usize, factor: f64) -> usize {
    // Float-to-int `as` saturates, so huge capacities clamp to usize::MAX.
    let scaled = (capacity as f64 * factor).floor() as usize;
    scaled.max(capacity.saturating_add(1))
}

/// Capacity reached by growing one step at a time until `desired` fits.
///
/// Returns `capacity` unchanged when it already covers `desired`.
#[must_use]
pub(crate) fn reserve_target(capacity: usize, desired: usize, factor: f64) -> usize {
    let mut target = capacity;
    while target < desired {
        target = grown_capacity(target, factor);
    }
    target
}
