// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host stand-ins for the Scrubline demos.
//!
//! Real hosts wire these seams to a playback library, a DOM element, and an
//! animation-frame scheduler. The demos substitute printing/bookkeeping
//! implementations so a whole scrub session can run in a terminal.

use scrubline_controller::{IndicatorSink, PlaybackSink, TickScheduler};

/// Playback stand-in that prints every seek it receives.
#[derive(Debug, Default)]
pub struct PrintingPlayback {
    /// The most recently displayed frame.
    pub frame: u64,
    /// How many seeks have been issued.
    pub seek_count: usize,
}

impl PlaybackSink for PrintingPlayback {
    fn seek(&mut self, frame: u64) {
        self.frame = frame;
        self.seek_count += 1;
        println!("  seek({frame})");
    }
}

/// Indicator stand-in that remembers the latest offset.
#[derive(Debug, Default)]
pub struct RememberingIndicator {
    /// The most recently applied offset.
    pub offset: f64,
}

impl IndicatorSink for RememberingIndicator {
    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }
}

/// A scheduler pumped by hand from the demo's main loop, standing in for an
/// animation-frame request.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    /// Whether a tick callback is armed.
    pub pending: bool,
}

impl TickScheduler for ManualScheduler {
    fn request_tick(&mut self) {
        self.pending = true;
    }

    fn cancel_tick(&mut self) {
        self.pending = false;
    }
}
