// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrubline_controller --heading-base-level=0

//! Scrubline Controller: wires normalized input to eased playback seeks and a
//! progress indicator.
//!
//! [`ScrubController`] is the integration surface of the Scrubline family. It
//! owns an input normalizer (`scrubline_input`), a motion driver
//! (`scrubline_motion`), and three host-provided collaborators behind narrow
//! traits:
//!
//! - [`PlaybackSink`]: receives `seek(frame)` commands — a seek, never a play.
//! - [`IndicatorSink`]: receives one offset per tick, computed by mapping the
//!   progress fraction linearly onto an [`IndicatorTrack`]'s visual bounds.
//! - [`TickScheduler`]: arms and cancels the host's per-frame callback. The
//!   controller requests at most one pending tick at a time.
//!
//! ## Lifecycle
//!
//! 1) Construct the controller with a validated [`ControllerConfig`]. Until
//!    the playback library signals readiness, every input event is ignored.
//! 2) When the media is ready, call [`ScrubController::media_ready`] with the
//!    frame count (read once). This issues the initial `seek(0)` and parks
//!    the indicator at its minimum offset.
//! 3) Feed translated platform events to [`ScrubController::handle`]. A
//!    [`InputResponse::Consumed`] result means the host should suppress the
//!    event's default effect. Whenever an accumulation wakes the idle driver,
//!    the controller arms the scheduler.
//! 4) Call [`ScrubController::on_tick`] from the armed callback. The
//!    controller seeks, updates the indicator, and re-arms until it settles.
//! 5) When the hosting view goes away, call [`ScrubController::detach`]:
//!    any pending tick is cancelled and the controller becomes inert.
//!    Detaching is idempotent.
//!
//! Everything runs on the host's single cooperative scheduler; the `&mut
//! self` entry points make interleaving impossible by construction. Deltas
//! that arrive between two ticks batch into one target, which is the
//! intended behavior.
//!
//! ## Example
//!
//! ```rust
//! use scrubline_controller::{
//!     ControllerConfig, IndicatorSink, IndicatorTrack, PlaybackSink, ScrubController,
//!     TickScheduler,
//! };
//! use scrubline_input::{InputEvent, KeyBindings};
//! use scrubline_motion::MotionConfig;
//!
//! #[derive(Default)]
//! struct Host {
//!     frame: u64,
//!     offset: f64,
//! }
//!
//! impl PlaybackSink for Host {
//!     fn seek(&mut self, frame: u64) {
//!         self.frame = frame;
//!     }
//! }
//! impl IndicatorSink for Host {
//!     fn set_offset(&mut self, offset: f64) {
//!         self.offset = offset;
//!     }
//! }
//!
//! /// A scheduler the test drives by hand.
//! #[derive(Default)]
//! struct Manual(bool);
//! impl TickScheduler for Manual {
//!     fn request_tick(&mut self) {
//!         self.0 = true;
//!     }
//!     fn cancel_tick(&mut self) {
//!         self.0 = false;
//!     }
//! }
//!
//! let config = ControllerConfig::new(
//!     MotionConfig::default(),
//!     30.0,
//!     IndicatorTrack::new(0.0, 200.0).unwrap(),
//! )
//! .unwrap();
//!
//! let bindings = KeyBindings::new("ArrowDown", "ArrowUp");
//! let mut controller =
//!     ScrubController::new(config, bindings, Host::default(), Host::default(), Manual::default());
//!
//! controller.media_ready(520);
//! controller.handle(InputEvent::Wheel { delta_y: 100.0 });
//!
//! // The host's frame callback loop:
//! while controller.scheduler().0 {
//!     controller.scheduler_mut().0 = false;
//!     let _ = controller.on_tick();
//! }
//! assert_eq!(controller.playback().frame, 20);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
mod controller;
mod indicator;
mod scheduler;
mod sinks;

pub use config::{ControllerConfig, ControllerConfigError, KeyScaling};
pub use controller::{InputResponse, ScrubController};
pub use indicator::{IndicatorTrack, IndicatorTrackError};
pub use scheduler::TickScheduler;
pub use sinks::{IndicatorSink, PlaybackSink};
