// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion constants, validated at construction.

use core::fmt;

/// Default input sensitivity.
pub const DEFAULT_SENSITIVITY: f64 = 0.2;

/// Default per-tick smoothing fraction.
pub const DEFAULT_SMOOTHING: f64 = 0.1;

/// Default convergence snap threshold, in frame units.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.1;

/// Error returned when a [`MotionConfig`] value is out of bounds.
///
/// Degenerate constants are rejected eagerly because they do not fail loudly
/// later: a non-positive sensitivity silently freezes the scrubber, and a
/// smoothing fraction outside `(0, 1)` either never converges or overshoots.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionConfigError {
    /// Sensitivity was not finite and strictly positive.
    NonPositiveSensitivity,
    /// Smoothing fraction was outside the exclusive range `(0, 1)`.
    SmoothingOutOfRange,
    /// Snap threshold was not finite and non-negative.
    NegativeSnapThreshold,
}

impl fmt::Display for MotionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSensitivity => {
                write!(f, "sensitivity must be finite and > 0")
            }
            Self::SmoothingOutOfRange => {
                write!(f, "smoothing fraction must be in (0, 1) exclusive")
            }
            Self::NegativeSnapThreshold => {
                write!(f, "snap threshold must be finite and >= 0")
            }
        }
    }
}

impl core::error::Error for MotionConfigError {}

/// Validated motion constants for a [`MotionDriver`](crate::MotionDriver).
///
/// - `sensitivity` scales accumulated input deltas: smaller values require
///   proportionally more raw input to travel the same distance.
/// - `smoothing` is the fraction of the remaining distance covered per tick:
///   values near `0` converge slowly and smoothly, values near `1` approach a
///   direct jump.
/// - `snap_threshold` is the remaining distance (in frame units) below which
///   the driver snaps to the target and halts.
///
/// # Example
///
/// ```
/// use scrubline_motion::{MotionConfig, MotionConfigError};
///
/// let config = MotionConfig::new(0.2, 0.1, 0.1).unwrap();
/// assert_eq!(config.sensitivity(), 0.2);
///
/// // A smoothing fraction of 1.0 would jump rather than ease.
/// assert_eq!(
///     MotionConfig::new(0.2, 1.0, 0.1),
///     Err(MotionConfigError::SmoothingOutOfRange)
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionConfig {
    sensitivity: f64,
    smoothing: f64,
    snap_threshold: f64,
}

impl MotionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`MotionConfigError`] if `sensitivity` is not finite and
    /// strictly positive, `smoothing` is outside `(0, 1)` exclusive, or
    /// `snap_threshold` is not finite and non-negative.
    pub fn new(
        sensitivity: f64,
        smoothing: f64,
        snap_threshold: f64,
    ) -> Result<Self, MotionConfigError> {
        if !sensitivity.is_finite() || sensitivity <= 0.0 {
            return Err(MotionConfigError::NonPositiveSensitivity);
        }
        if !(smoothing > 0.0 && smoothing < 1.0) {
            return Err(MotionConfigError::SmoothingOutOfRange);
        }
        if !snap_threshold.is_finite() || snap_threshold < 0.0 {
            return Err(MotionConfigError::NegativeSnapThreshold);
        }
        Ok(Self {
            sensitivity,
            smoothing,
            snap_threshold,
        })
    }

    /// Scale factor applied to accumulated input deltas.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Fraction of the remaining distance covered per tick.
    #[must_use]
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Remaining distance below which the driver snaps and halts.
    #[must_use]
    pub fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }
}

impl Default for MotionConfig {
    /// Returns the stock constants: sensitivity `0.2`, smoothing `0.1`,
    /// snap threshold `0.1`.
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            smoothing: DEFAULT_SMOOTHING,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants_validate() {
        let d = MotionConfig::default();
        let validated = MotionConfig::new(d.sensitivity(), d.smoothing(), d.snap_threshold());
        assert_eq!(validated, Ok(d), "default constants must pass validation");
    }

    #[test]
    fn rejects_non_positive_sensitivity() {
        for bad in [0.0, -0.2, f64::NAN, f64::INFINITY] {
            assert_eq!(
                MotionConfig::new(bad, 0.1, 0.1),
                Err(MotionConfigError::NonPositiveSensitivity),
                "sensitivity {bad} must be rejected"
            );
        }
    }

    #[test]
    fn rejects_smoothing_outside_open_unit_interval() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert_eq!(
                MotionConfig::new(0.2, bad, 0.1),
                Err(MotionConfigError::SmoothingOutOfRange),
                "smoothing {bad} must be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_snap_threshold() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            assert_eq!(
                MotionConfig::new(0.2, 0.1, bad),
                Err(MotionConfigError::NegativeSnapThreshold),
                "snap threshold {bad} must be rejected"
            );
        }
    }

    #[test]
    fn zero_snap_threshold_is_allowed() {
        assert!(
            MotionConfig::new(0.2, 0.1, 0.0).is_ok(),
            "an exact-convergence threshold is a valid, if strict, choice"
        );
    }
}
