// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrubline_motion --heading-base-level=0

//! Scrubline Motion: clamped playback position state and eased scrub motion.
//!
//! This crate is the headless core of a frame scrubber: input deltas (from a
//! wheel, a touch drag, or a key press) accumulate into a *target* position,
//! and a cooperative per-tick driver eases the *current* position toward that
//! target until the two converge. Both values are always clamped to the
//! addressable frame range of the loaded media.
//!
//! The core concepts are:
//!
//! - [`ScrubPosition`]: the position state. Owns `current`, `target`, and the
//!   maximum addressable position, and only exposes mutations that preserve
//!   the clamping invariant.
//! - [`MotionConfig`]: sensitivity, smoothing, and snap-threshold constants,
//!   validated at construction.
//! - [`MotionDriver`]: a two-state (idle/converging) machine that applies
//!   accumulated deltas and advances one easing step per [`MotionDriver::tick`]
//!   call.
//!
//! This crate deliberately does **not** know about event sources, schedulers,
//! playback libraries, or progress indicators. Hosts are responsible for:
//!
//! - Normalizing raw input into signed scalar deltas (see `scrubline_input`).
//! - Arming one per-frame callback whenever an accumulation reports
//!   [`Activation::Started`], and calling [`MotionDriver::tick`] from it.
//! - Forwarding each [`TickOutcome`] to their playback seek and progress
//!   indicator (see `scrubline_controller`).
//!
//! ## Minimal example
//!
//! ```rust
//! use scrubline_motion::{Activation, MotionConfig, MotionDriver, ScrubPosition};
//!
//! // 520 frames of pre-rendered media, default motion constants.
//! let position = ScrubPosition::for_frame_count(520);
//! let mut driver = MotionDriver::new(position, MotionConfig::default());
//!
//! // A wheel notch worth of input: target becomes 100 * 0.2 = 20.
//! assert_eq!(driver.accumulate(100.0), Activation::Started);
//!
//! // The host now ticks once per frame until the driver settles.
//! let mut last = 0;
//! while let Some(outcome) = driver.tick() {
//!     last = outcome.frame;
//!     if outcome.settled {
//!         break;
//!     }
//! }
//! assert_eq!(last, 20);
//! assert!(!driver.is_converging());
//! ```
//!
//! Ticks are cooperative and re-entrant-safe: the driver never schedules
//! anything itself, it only reports through return values whether another
//! tick is wanted. Calling [`MotionDriver::tick`] while idle is a no-op that
//! returns `None`, so a stray callback after convergence is harmless.
//!
//! All positions are `f64` in frame units; fractional positions are rounded
//! to the nearest frame only at the playback boundary
//! ([`ScrubPosition::frame`]). This crate is `no_std`.

#![no_std]

mod config;
mod driver;
mod position;

pub use config::{MotionConfig, MotionConfigError};
pub use driver::{Activation, MotionDriver, TickOutcome};
pub use position::ScrubPosition;
