// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel event normalization.
//!
//! The wheel modality is stateless: the vertical scroll amount *is* the
//! delta, sign and all, so scrolling down (positive `delta_y` in the common
//! platform convention) advances playback. The only job here is to reject
//! values a buggy host could feed through, keeping the downstream contract
//! that every accepted event yields a finite scalar.

/// Normalizes one vertical wheel amount into a scrub delta.
///
/// Returns the amount unchanged for finite input and `None` otherwise. A
/// `Some` result means the event was accepted and the host should suppress
/// the platform's native scroll reaction for it.
///
/// # Example
///
/// ```
/// use scrubline_input::wheel::normalize_wheel;
///
/// assert_eq!(normalize_wheel(100.0), Some(100.0));
/// assert_eq!(normalize_wheel(-3.5), Some(-3.5));
/// assert_eq!(normalize_wheel(f64::NAN), None);
/// ```
#[must_use]
pub fn normalize_wheel(delta_y: f64) -> Option<f64> {
    delta_y.is_finite().then_some(delta_y)
}
