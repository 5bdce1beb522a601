// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The idle/converging easing driver.
//!
//! [`MotionDriver`] pairs a [`ScrubPosition`] with a [`MotionConfig`] and a
//! two-state machine:
//!
//! - **Idle**: no tick is pending. The host's per-frame callback is disarmed.
//! - **Converging**: exactly one tick is pending. Each [`MotionDriver::tick`]
//!   either takes one easing step (and stays converging) or snaps to the
//!   target (and returns to idle).
//!
//! The idle→converging transition happens only through an accumulation while
//! idle, reported to the caller as [`Activation::Started`] so it can arm its
//! scheduler exactly once. The converging→idle transition happens only
//! through a settling tick. Because every entry point takes `&mut self`, an
//! accumulation is always processed entirely before or entirely after a
//! tick; there is no interleaving to reason about.

use crate::config::MotionConfig;
use crate::position::ScrubPosition;

/// Result of feeding one delta to a [`MotionDriver`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The driver was idle and is now converging. The host must arm one
    /// tick; nothing else will.
    Started,
    /// The driver was already converging; the pending tick will observe the
    /// updated target.
    AlreadyRunning,
    /// The delta was not finite and was ignored without any state change.
    Rejected,
}

/// What one tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// The whole frame nearest to the position after this tick, ready to
    /// hand to a playback seek.
    pub frame: u64,
    /// `true` if the driver snapped to the target and went idle; no further
    /// tick should be armed until the next accumulation.
    pub settled: bool,
}

/// Eases a [`ScrubPosition`] toward its target, one cooperative tick at a
/// time.
///
/// # Example
///
/// ```
/// use scrubline_motion::{Activation, MotionConfig, MotionDriver, ScrubPosition};
///
/// let mut driver = MotionDriver::new(
///     ScrubPosition::for_frame_count(520),
///     MotionConfig::default(),
/// );
///
/// assert!(!driver.is_converging());
/// assert_eq!(driver.accumulate(100.0), Activation::Started);
/// assert_eq!(driver.accumulate(50.0), Activation::AlreadyRunning);
///
/// // Ticking while idle is a harmless no-op.
/// while driver.tick().is_some_and(|outcome| !outcome.settled) {}
/// assert_eq!(driver.tick(), None);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct MotionDriver {
    position: ScrubPosition,
    config: MotionConfig,
    converging: bool,
}

impl MotionDriver {
    /// Creates an idle driver over the given position state.
    #[must_use]
    pub fn new(position: ScrubPosition, config: MotionConfig) -> Self {
        Self {
            position,
            config,
            converging: false,
        }
    }

    /// Returns the position state.
    #[must_use]
    pub fn position(&self) -> &ScrubPosition {
        &self.position
    }

    /// Returns the motion constants.
    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Returns `true` while a tick is pending.
    #[must_use]
    pub fn is_converging(&self) -> bool {
        self.converging
    }

    /// Accumulates one normalized input delta, scaled by the configured
    /// sensitivity.
    ///
    /// Non-finite deltas are ignored and reported as
    /// [`Activation::Rejected`]; everything else updates the clamped target
    /// and, if the driver was idle, starts a new convergence run.
    pub fn accumulate(&mut self, delta: f64) -> Activation {
        let sensitivity = self.config.sensitivity();
        self.accumulate_with(delta, sensitivity)
    }

    /// Accumulates one delta without sensitivity scaling.
    ///
    /// This is the keyboard path of the original interaction: a key press
    /// contributes its step verbatim while wheel and touch deltas are scaled.
    /// Hosts that want uniform scaling can simply route key steps through
    /// [`MotionDriver::accumulate`] instead.
    pub fn accumulate_raw(&mut self, delta: f64) -> Activation {
        self.accumulate_with(delta, 1.0)
    }

    fn accumulate_with(&mut self, delta: f64, sensitivity: f64) -> Activation {
        if !delta.is_finite() {
            return Activation::Rejected;
        }
        self.position.accumulate(delta, sensitivity);
        if self.converging {
            Activation::AlreadyRunning
        } else {
            self.converging = true;
            Activation::Started
        }
    }

    /// Advances one tick.
    ///
    /// Returns `None` while idle: a stray callback that fires after the
    /// driver settled does nothing. Otherwise either takes one easing step
    /// (`settled: false`, the host re-arms its scheduler) or snaps to the
    /// target and halts (`settled: true`).
    ///
    /// While converging, the remaining distance strictly decreases on every
    /// non-settling tick. A step too small to move the floating-point
    /// position settles immediately, so a zero snap threshold still
    /// terminates.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.converging {
            return None;
        }
        if self.position.distance_to_target() < self.config.snap_threshold() {
            return Some(self.settle());
        }
        let moved = self.position.ease_toward_target(self.config.smoothing());
        if moved == 0.0 {
            return Some(self.settle());
        }
        Some(TickOutcome {
            frame: self.position.frame(),
            settled: false,
        })
    }

    fn settle(&mut self) -> TickOutcome {
        self.position.snap_to_target();
        self.converging = false;
        TickOutcome {
            frame: self.position.frame(),
            settled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(total_frames: u64) -> MotionDriver {
        MotionDriver::new(
            ScrubPosition::for_frame_count(total_frames),
            MotionConfig::new(0.2, 0.1, 0.1).unwrap(),
        )
    }

    /// The reference scenario: 520 frames, wheel delta 100.
    #[test]
    fn wheel_delta_converges_to_scaled_target() {
        let mut driver = driver(520);

        assert_eq!(driver.accumulate(100.0), Activation::Started);
        assert!((driver.position().target() - 20.0).abs() < 1e-12);

        // First tick covers 10% of the distance: current 0 -> 2.
        let first = driver.tick().unwrap();
        assert!(!first.settled);
        assert_eq!(first.frame, 2);
        assert!((driver.position().current() - 2.0).abs() < 1e-12);

        let mut ticks = 1;
        let settled = loop {
            let outcome = driver.tick().unwrap();
            ticks += 1;
            if outcome.settled {
                break outcome;
            }
            assert!(ticks < 200, "driver failed to settle");
        };

        assert_eq!(settled.frame, 20);
        assert_eq!(driver.position().current(), driver.position().target());
        assert!(!driver.is_converging());
    }

    #[test]
    fn remaining_distance_strictly_decreases() {
        let mut driver = driver(520);
        driver.accumulate(400.0); // target 80

        let mut distance = driver.position().distance_to_target();
        while let Some(outcome) = driver.tick() {
            let next = driver.position().distance_to_target();
            if outcome.settled {
                assert_eq!(next, 0.0, "settling lands exactly on the target");
                break;
            }
            assert!(next < distance, "distance must shrink every tick");
            distance = next;
        }
    }

    #[test]
    fn tick_while_idle_is_none() {
        let mut driver = driver(520);
        assert_eq!(driver.tick(), None);
        assert_eq!(driver.tick(), None, "idle ticks stay no-ops");
    }

    #[test]
    fn settling_is_terminal_until_reactivated() {
        let mut driver = driver(520);
        driver.accumulate(10.0); // target 2, within reach quickly

        while driver.tick().is_some_and(|outcome| !outcome.settled) {}
        assert_eq!(driver.tick(), None);

        // New input starts exactly one new run.
        assert_eq!(driver.accumulate(10.0), Activation::Started);
        assert_eq!(driver.accumulate(10.0), Activation::AlreadyRunning);
        assert!(driver.tick().is_some());
    }

    #[test]
    fn target_updates_mid_convergence_without_new_activation() {
        let mut driver = driver(520);
        assert_eq!(driver.accumulate(100.0), Activation::Started);
        driver.tick().unwrap();

        // More input while converging re-aims the same run.
        assert_eq!(driver.accumulate(100.0), Activation::AlreadyRunning);
        assert!((driver.position().target() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn overshoot_input_clamps_to_last_frame() {
        let mut driver = driver(520);
        driver.accumulate(5000.0); // 1000 before clamping
        assert_eq!(driver.position().target(), 519.0);

        while driver.tick().is_some_and(|outcome| !outcome.settled) {}
        assert_eq!(driver.position().frame(), 519);
    }

    #[test]
    fn raw_accumulation_bypasses_sensitivity() {
        let mut driver = driver(520);
        driver.accumulate_raw(30.0);
        assert_eq!(driver.position().target(), 30.0);

        // The scaled path would have produced 6.
        let mut scaled = self::driver(520);
        scaled.accumulate(30.0);
        assert!((scaled.position().target() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_deltas_are_rejected_without_state_change() {
        let mut driver = driver(520);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(driver.accumulate(bad), Activation::Rejected);
            assert_eq!(driver.accumulate_raw(bad), Activation::Rejected);
        }
        assert!(!driver.is_converging(), "rejected input must not activate");
        assert_eq!(driver.position().target(), 0.0);
    }

    #[test]
    fn zero_delta_activation_settles_on_first_tick() {
        let mut driver = driver(520);
        assert_eq!(driver.accumulate(0.0), Activation::Started);

        let outcome = driver.tick().unwrap();
        assert!(outcome.settled, "nothing to chase settles immediately");
        assert_eq!(outcome.frame, 0);
    }

    #[test]
    fn zero_snap_threshold_still_terminates() {
        let mut driver = MotionDriver::new(
            ScrubPosition::for_frame_count(520),
            MotionConfig::new(0.2, 0.5, 0.0).unwrap(),
        );
        driver.accumulate(100.0);

        let mut ticks = 0;
        while driver.tick().is_some_and(|outcome| !outcome.settled) {
            ticks += 1;
            assert!(ticks < 10_000, "exact convergence must not spin forever");
        }
        assert_eq!(driver.position().current(), driver.position().target());
    }

    #[test]
    fn single_frame_media_accepts_input_and_stays_at_zero() {
        let mut driver = MotionDriver::new(
            ScrubPosition::for_frame_count(1),
            MotionConfig::default(),
        );
        assert_eq!(driver.accumulate(500.0), Activation::Started);

        let outcome = driver.tick().unwrap();
        assert!(outcome.settled);
        assert_eq!(outcome.frame, 0);
        assert_eq!(driver.position().progress(), None);
    }
}
