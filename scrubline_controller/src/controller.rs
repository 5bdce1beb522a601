// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scrub controller: input in, seeks and indicator offsets out.

use scrubline_input::{InputEvent, InputNormalizer, InputSource, KeyBindings};
use scrubline_motion::{Activation, MotionDriver, ScrubPosition, TickOutcome};

use crate::config::{ControllerConfig, KeyScaling};
use crate::scheduler::TickScheduler;
use crate::sinks::{IndicatorSink, PlaybackSink};

/// What [`ScrubController::handle`] did with an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputResponse {
    /// The event produced a scrub delta; the host should suppress the
    /// event's default platform effect.
    Consumed,
    /// The event was ignored (unrecognized, out of state, or arriving
    /// before readiness / after detach). No side effects beyond touch
    /// bookkeeping.
    Ignored,
}

/// Owns the input-to-seek pipeline for one scrubbed animation.
///
/// See the crate documentation for the full lifecycle. Type parameters:
///
/// - `K`: the host's key value type (see [`KeyBindings`]).
/// - `P`: the playback seek sink.
/// - `I`: the indicator offset sink.
/// - `S`: the per-frame tick scheduler.
#[derive(Debug)]
pub struct ScrubController<K, P, I, S> {
    normalizer: InputNormalizer<K>,
    config: ControllerConfig,
    /// `Some` once the playback library has signalled readiness.
    driver: Option<MotionDriver>,
    playback: P,
    indicator: I,
    scheduler: S,
    detached: bool,
}

impl<K, P, I, S> ScrubController<K, P, I, S>
where
    K: PartialEq,
    P: PlaybackSink,
    I: IndicatorSink,
    S: TickScheduler,
{
    /// Creates a controller that is not yet ready: input is ignored until
    /// [`ScrubController::media_ready`] is called.
    #[must_use]
    pub fn new(
        config: ControllerConfig,
        bindings: KeyBindings<K>,
        playback: P,
        indicator: I,
        scheduler: S,
    ) -> Self {
        let normalizer = InputNormalizer::new(bindings, config.keyboard_step());
        Self {
            normalizer,
            config,
            driver: None,
            playback,
            indicator,
            scheduler,
            detached: false,
        }
    }

    /// Marks the media as ready with its total frame count.
    ///
    /// The frame count is read once; repeated calls are ignored, as is a
    /// readiness signal arriving after [`ScrubController::detach`]. Issues
    /// the initial `seek(0)` and parks the indicator at its minimum offset.
    /// For degenerate media (fewer than two frames) the indicator is never
    /// touched.
    pub fn media_ready(&mut self, total_frames: u64) {
        if self.detached || self.driver.is_some() {
            return;
        }
        let position = ScrubPosition::for_frame_count(total_frames);
        let driver = MotionDriver::new(position, self.config.motion());
        self.playback.seek(0);
        if driver.position().progress().is_some() {
            let offset = self.config.indicator().offset_for(0.0);
            self.indicator.set_offset(offset);
        }
        self.driver = Some(driver);
    }

    /// Feeds one translated platform event through the pipeline.
    ///
    /// Accepted events accumulate into the clamped target position. On the
    /// idle-to-converging transition the scheduler is armed exactly once;
    /// deltas arriving while already converging simply re-aim the pending
    /// run.
    pub fn handle(&mut self, event: InputEvent<K>) -> InputResponse {
        if self.detached {
            return InputResponse::Ignored;
        }
        let Some(driver) = self.driver.as_mut() else {
            // Not ready yet: the original design had no listeners installed
            // at this point, so early input is dropped, never buffered.
            return InputResponse::Ignored;
        };
        let Some(delta) = self.normalizer.apply(event) else {
            return InputResponse::Ignored;
        };
        let activation = match (delta.source, self.config.key_scaling()) {
            (InputSource::Keyboard, KeyScaling::Raw) => driver.accumulate_raw(delta.amount),
            _ => driver.accumulate(delta.amount),
        };
        match activation {
            Activation::Started => {
                self.scheduler.request_tick();
                InputResponse::Consumed
            }
            Activation::AlreadyRunning => InputResponse::Consumed,
            Activation::Rejected => InputResponse::Ignored,
        }
    }

    /// Advances one tick: seek, indicator update, and re-arm unless settled.
    ///
    /// Call this exactly once per armed scheduler callback. Returns `None`
    /// when there is nothing to do — before readiness, after detach, or
    /// when a stray callback fires while the driver is idle.
    pub fn on_tick(&mut self) -> Option<TickOutcome> {
        if self.detached {
            return None;
        }
        let driver = self.driver.as_mut()?;
        let outcome = driver.tick()?;
        self.playback.seek(outcome.frame);
        if let Some(progress) = driver.position().progress() {
            let offset = self.config.indicator().offset_for(progress);
            self.indicator.set_offset(offset);
        }
        if !outcome.settled {
            self.scheduler.request_tick();
        }
        Some(outcome)
    }

    /// Stops and detaches the controller.
    ///
    /// Cancels any pending tick through the scheduler and makes every
    /// subsequent call inert. Idempotent: detaching twice cancels nothing
    /// twice.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        if self.driver.is_some_and(|driver| driver.is_converging()) {
            self.scheduler.cancel_tick();
        }
        self.detached = true;
        self.driver = None;
    }

    /// Returns `true` once the media has signalled readiness (and the
    /// controller has not been detached).
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.driver.is_some()
    }

    /// Returns `true` after [`ScrubController::detach`].
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// The position state, once ready.
    #[must_use]
    pub fn position(&self) -> Option<&ScrubPosition> {
        self.driver.as_ref().map(MotionDriver::position)
    }

    /// The configuration the controller was built with.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The playback sink.
    #[must_use]
    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// The indicator sink.
    #[must_use]
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// The tick scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the tick scheduler, for hosts that pump it by hand.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
