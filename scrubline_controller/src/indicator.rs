// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear progress-to-offset mapping for the visual indicator.

use core::fmt;

/// Error returned when an [`IndicatorTrack`] bound is not finite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndicatorTrackError;

impl fmt::Display for IndicatorTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indicator offsets must be finite")
    }
}

impl core::error::Error for IndicatorTrackError {}

/// The visual bounds of a progress indicator along one axis.
///
/// Maps a progress fraction in `[0, 1]` linearly onto
/// `[min_offset, max_offset]`. The bounds may be inverted (`min_offset >
/// max_offset`) for axes that grow the other way; the mapping stays linear
/// either way.
///
/// # Example
///
/// ```
/// use scrubline_controller::IndicatorTrack;
///
/// let track = IndicatorTrack::new(10.0, 110.0).unwrap();
/// assert_eq!(track.offset_for(0.0), 10.0);
/// assert_eq!(track.offset_for(0.5), 60.0);
/// assert_eq!(track.offset_for(1.0), 110.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndicatorTrack {
    min_offset: f64,
    max_offset: f64,
}

impl IndicatorTrack {
    /// Creates a track from its two endpoint offsets.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorTrackError`] if either bound is not finite.
    pub fn new(min_offset: f64, max_offset: f64) -> Result<Self, IndicatorTrackError> {
        if !min_offset.is_finite() || !max_offset.is_finite() {
            return Err(IndicatorTrackError);
        }
        Ok(Self {
            min_offset,
            max_offset,
        })
    }

    /// The offset for zero progress.
    #[must_use]
    pub fn min_offset(&self) -> f64 {
        self.min_offset
    }

    /// The offset for full progress.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Maps a progress fraction onto the track.
    ///
    /// Progress is clamped to `[0, 1]` first, so the result always lies
    /// between the two bounds.
    #[must_use]
    pub fn offset_for(&self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        self.min_offset + t * (self.max_offset - self.min_offset)
    }
}
