// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing output seams.
//!
//! The controller never reads state back from its sinks: its own clamped
//! position is the single source of truth, so both traits are fire-and-
//! forget and total over their input domains.

/// Receives frame seeks for the playback library.
pub trait PlaybackSink {
    /// Displays exactly `frame`, with no transition of the sink's own — a
    /// seek, never a play.
    ///
    /// The controller only passes frames in `[0, total_frames - 1]`, so
    /// implementations need no range handling of their own.
    fn seek(&mut self, frame: u64);
}

/// Receives progress-indicator offsets.
pub trait IndicatorSink {
    /// Positions the indicator element at `offset` along its axis.
    ///
    /// Offsets are produced by an [`IndicatorTrack`](crate::IndicatorTrack)
    /// and therefore lie between its configured bounds.
    fn set_offset(&mut self, offset: f64);
}

impl<T: PlaybackSink + ?Sized> PlaybackSink for &mut T {
    fn seek(&mut self, frame: u64) {
        (**self).seek(frame);
    }
}

impl<T: IndicatorSink + ?Sized> IndicatorSink for &mut T {
    fn set_offset(&mut self, offset: f64) {
        (**self).set_offset(offset);
    }
}
