// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame callback seam.

/// Arms and cancels the host's per-frame callback.
///
/// The controller holds the scheduling discipline: it calls
/// [`request_tick`](TickScheduler::request_tick) only on the idle-to-
/// converging transition and after a non-settling tick, so at most one tick
/// is pending at any time. Hosts map `request_tick` onto whatever their
/// environment offers — an animation-frame request, a timer, or a manual
/// pump in tests — and call
/// [`ScrubController::on_tick`](crate::ScrubController::on_tick) exactly
/// once per armed callback.
///
/// [`cancel_tick`](TickScheduler::cancel_tick) is invoked from
/// [`ScrubController::detach`](crate::ScrubController::detach) so a torn-down
/// view does not leak a scheduled callback. Cancelling with nothing pending
/// must be a no-op.
pub trait TickScheduler {
    /// Arms one tick callback.
    fn request_tick(&mut self);

    /// Cancels the pending tick callback, if any.
    fn cancel_tick(&mut self);
}

impl<T: TickScheduler + ?Sized> TickScheduler for &mut T {
    fn request_tick(&mut self) {
        (**self).request_tick();
    }

    fn cancel_tick(&mut self) {
        (**self).cancel_tick();
    }
}
