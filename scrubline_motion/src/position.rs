// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped playback position state.

/// Playback position state for one loaded piece of media.
///
/// Holds the `current` position (what is on screen), the `target` position
/// (where accumulated input wants to be), and the maximum addressable
/// position. The fields are private on purpose: every mutation goes through
/// a method that re-establishes `0 <= current <= max` and
/// `0 <= target <= max`, so observers can rely on both invariants at all
/// times.
///
/// Positions are fractional frame indices; [`ScrubPosition::frame`] rounds to
/// the nearest whole frame for the playback boundary.
///
/// # Example
///
/// ```
/// use scrubline_motion::ScrubPosition;
///
/// let mut position = ScrubPosition::for_frame_count(520);
/// assert_eq!(position.max_position(), 519.0);
///
/// // Accumulation clamps: a huge fling cannot leave the timeline.
/// position.accumulate(5000.0, 0.2);
/// assert_eq!(position.target(), 519.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrubPosition {
    current: f64,
    target: f64,
    max: f64,
}

impl ScrubPosition {
    /// Creates position state for media with `total_frames` addressable
    /// frames, starting at frame `0`.
    ///
    /// The maximum position is `total_frames - 1`, or `0` for media with
    /// fewer than two frames.
    #[must_use]
    pub fn for_frame_count(total_frames: u64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            max: total_frames.saturating_sub(1) as f64,
        }
    }

    /// The on-screen position, in fractional frame units.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// The position accumulated input is steering toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The maximum addressable position (`total_frames - 1`).
    #[must_use]
    pub fn max_position(&self) -> f64 {
        self.max
    }

    /// The whole frame nearest to the current position.
    #[must_use]
    pub fn frame(&self) -> u64 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "current is clamped to [0, max] where max came from a u64 frame count"
        )]
        {
            libm::round(self.current) as u64
        }
    }

    /// The current position as a fraction of the full timeline, or `None`
    /// for degenerate media (fewer than two frames).
    ///
    /// When present, the fraction is always in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        if self.max > 0.0 {
            Some(self.current / self.max)
        } else {
            None
        }
    }

    /// Remaining distance from current to target, always non-negative.
    #[must_use]
    pub fn distance_to_target(&self) -> f64 {
        (self.target - self.current).abs()
    }

    /// Accumulates one input delta into the target position.
    ///
    /// The delta is scaled by `sensitivity` and the result is clamped to
    /// `[0, max]` immediately, before anyone can observe it. Deltas arriving
    /// between two ticks all land in the same target; that batching is the
    /// intended behavior, not a loss.
    pub fn accumulate(&mut self, delta: f64, sensitivity: f64) {
        self.target = (self.target + delta * sensitivity).clamp(0.0, self.max);
    }

    /// Moves the current position one easing step toward the target,
    /// covering `smoothing` of the remaining distance.
    ///
    /// Returns the absolute distance actually covered. A return of `0.0`
    /// means the step was too small to represent and the caller should snap.
    pub fn ease_toward_target(&mut self, smoothing: f64) -> f64 {
        let before = self.current;
        self.current += (self.target - self.current) * smoothing;
        // Both endpoints are in [0, max], so the eased point is too; the
        // clamp only guards against rounding at the boundaries.
        self.current = self.current.clamp(0.0, self.max);
        (self.current - before).abs()
    }

    /// Snaps the current position to the target exactly.
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_maps_to_max_position() {
        assert_eq!(ScrubPosition::for_frame_count(520).max_position(), 519.0);
        assert_eq!(ScrubPosition::for_frame_count(2).max_position(), 1.0);
        // Fewer than two frames collapses to a single addressable position.
        assert_eq!(ScrubPosition::for_frame_count(1).max_position(), 0.0);
        assert_eq!(ScrubPosition::for_frame_count(0).max_position(), 0.0);
    }

    #[test]
    fn accumulate_clamps_above_and_below() {
        let mut position = ScrubPosition::for_frame_count(520);

        // Raw delta 5000 at sensitivity 0.2 would be 1000; clamps to 519.
        position.accumulate(5000.0, 0.2);
        assert_eq!(position.target(), 519.0);

        // A large negative fling clamps to 0.
        position.accumulate(-100_000.0, 0.2);
        assert_eq!(position.target(), 0.0);
    }

    #[test]
    fn accumulate_stays_in_range_under_arbitrary_sequences() {
        let mut position = ScrubPosition::for_frame_count(100);
        let deltas = [3.0, -500.0, 1e6, -7.25, 0.0, 42.0, -42.0, 9e9];
        for delta in deltas {
            position.accumulate(delta, 0.2);
            assert!(
                (0.0..=position.max_position()).contains(&position.target()),
                "target {} escaped [0, {}]",
                position.target(),
                position.max_position()
            );
        }
    }

    #[test]
    fn batching_matches_single_accumulation() {
        let scale = 0.2;
        let (d1, d2) = (30.0, 45.0);

        let mut batched = ScrubPosition::for_frame_count(520);
        batched.accumulate(d1, scale);
        batched.accumulate(d2, scale);

        let mut single = ScrubPosition::for_frame_count(520);
        single.accumulate(d1 * scale + d2 * scale, 1.0);

        assert!(
            (batched.target() - single.target()).abs() < 1e-12,
            "two accumulations before a tick must equal their scaled sum"
        );
    }

    #[test]
    fn ease_covers_smoothing_fraction_of_distance() {
        let mut position = ScrubPosition::for_frame_count(520);
        position.accumulate(100.0, 0.2); // target 20

        let moved = position.ease_toward_target(0.1);
        assert!((position.current() - 2.0).abs() < 1e-12, "first step is 10% of 20");
        assert!((moved - 2.0).abs() < 1e-12, "reported movement matches");
    }

    #[test]
    fn snap_reaches_target_exactly() {
        let mut position = ScrubPosition::for_frame_count(520);
        position.accumulate(100.0, 0.2);
        position.snap_to_target();
        assert_eq!(position.current(), position.target());
        assert_eq!(position.distance_to_target(), 0.0);
    }

    #[test]
    fn frame_rounds_to_nearest() {
        let mut position = ScrubPosition::for_frame_count(520);
        position.accumulate(12.4, 1.0);
        position.snap_to_target();
        assert_eq!(position.frame(), 12);

        position.accumulate(0.2, 1.0); // 12.6
        position.snap_to_target();
        assert_eq!(position.frame(), 13);
    }

    #[test]
    fn progress_is_unit_fraction_or_absent() {
        let mut position = ScrubPosition::for_frame_count(520);
        assert_eq!(position.progress(), Some(0.0));

        position.accumulate(10_000.0, 1.0);
        position.snap_to_target();
        assert_eq!(position.progress(), Some(1.0));

        // Degenerate media has no meaningful progress fraction.
        let single = ScrubPosition::for_frame_count(1);
        assert_eq!(single.progress(), None);
    }
}
