// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-drag state helper: vertical scrub deltas from single-pointer drags.
//!
//! ## Usage
//!
//! 1) On touch-start, call [`TouchScrub::begin`] with the pointer id and
//!    position. While one pointer is tracked, additional pointers are
//!    ignored; multi-finger gestures never produce scrub deltas.
//! 2) On each touch-move for the tracked pointer, call [`TouchScrub::update`]
//!    to get the vertical delta since the previous event. Dragging upward
//!    (decreasing `y`) produces a positive delta, matching the "swipe up to
//!    advance" convention.
//! 3) On touch-end or touch-cancel, call [`TouchScrub::end`] or
//!    [`TouchScrub::cancel`] to stop tracking.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use scrubline_input::touch::TouchScrub;
//!
//! let mut touch = TouchScrub::default();
//!
//! touch.begin(3, Point::new(120.0, 400.0));
//! assert!(touch.is_tracking());
//!
//! // Finger moves up 25 logical pixels: scrub forward by 25.
//! let delta = touch.update(3, Point::new(121.0, 375.0)).unwrap();
//! assert_eq!(delta, 25.0);
//!
//! touch.end(3);
//! assert!(!touch.is_tracking());
//! ```

use kurbo::Point;

/// The pointer currently driving a touch scrub.
#[derive(Copy, Clone, Debug, PartialEq)]
struct ActivePointer {
    id: u64,
    last_y: f64,
}

/// Tracks one active touch pointer and derives vertical scrub deltas from
/// its movement.
///
/// Only the pointer that started the gesture is listened to; a second finger
/// landing mid-drag neither produces deltas nor disturbs the reference
/// coordinate of the first. Horizontal movement is ignored entirely.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TouchScrub {
    active: Option<ActivePointer>,
}

impl TouchScrub {
    /// Starts tracking a pointer at the given position.
    ///
    /// Returns `true` if the pointer is now tracked. Returns `false`, with
    /// no state change, when another pointer is already active or the
    /// position is not finite.
    pub fn begin(&mut self, id: u64, position: Point) -> bool {
        if self.active.is_some() || !position.y.is_finite() {
            return false;
        }
        self.active = Some(ActivePointer {
            id,
            last_y: position.y,
        });
        true
    }

    /// Feeds a move event, returning the scrub delta it contributes.
    ///
    /// The delta is `previous y - current y`, so upward movement is
    /// positive. The reference coordinate advances to the new position on
    /// every accepted move. Moves for untracked pointers and non-finite
    /// positions return `None` without side effects.
    pub fn update(&mut self, id: u64, position: Point) -> Option<f64> {
        let active = self.active.as_mut()?;
        if active.id != id || !position.y.is_finite() {
            return None;
        }
        let delta = active.last_y - position.y;
        active.last_y = position.y;
        Some(delta)
    }

    /// Stops tracking the given pointer; a no-op for any other pointer.
    pub fn end(&mut self, id: u64) {
        if self.active.is_some_and(|active| active.id == id) {
            self.active = None;
        }
    }

    /// Identical to [`TouchScrub::end`]; platform cancel events carry no
    /// extra meaning for scrubbing.
    pub fn cancel(&mut self, id: u64) {
        self.end(id);
    }

    /// Returns `true` while a pointer is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_not_tracking() {
        let touch = TouchScrub::default();
        assert!(!touch.is_tracking());
    }

    #[test]
    fn upward_movement_is_a_positive_delta() {
        let mut touch = TouchScrub::default();
        assert!(touch.begin(1, Point::new(50.0, 300.0)));

        let delta = touch.update(1, Point::new(50.0, 280.0));
        assert_eq!(delta, Some(20.0));
    }

    #[test]
    fn downward_movement_is_a_negative_delta() {
        let mut touch = TouchScrub::default();
        touch.begin(1, Point::new(50.0, 300.0));

        let delta = touch.update(1, Point::new(50.0, 330.0));
        assert_eq!(delta, Some(-30.0));
    }

    #[test]
    fn each_move_advances_the_reference() {
        let mut touch = TouchScrub::default();
        touch.begin(1, Point::new(0.0, 100.0));

        assert_eq!(touch.update(1, Point::new(0.0, 90.0)), Some(10.0));
        assert_eq!(touch.update(1, Point::new(0.0, 85.0)), Some(5.0));
        assert_eq!(touch.update(1, Point::new(0.0, 95.0)), Some(-10.0));
    }

    #[test]
    fn horizontal_movement_contributes_nothing() {
        let mut touch = TouchScrub::default();
        touch.begin(1, Point::new(10.0, 100.0));

        assert_eq!(touch.update(1, Point::new(250.0, 100.0)), Some(0.0));
    }

    #[test]
    fn move_without_begin_returns_none() {
        let mut touch = TouchScrub::default();
        assert_eq!(touch.update(1, Point::new(0.0, 50.0)), None);
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut touch = TouchScrub::default();
        assert!(touch.begin(1, Point::new(0.0, 100.0)));
        assert!(!touch.begin(2, Point::new(0.0, 500.0)));

        // Moves from the second finger produce nothing and do not disturb
        // the first finger's reference.
        assert_eq!(touch.update(2, Point::new(0.0, 400.0)), None);
        assert_eq!(touch.update(1, Point::new(0.0, 90.0)), Some(10.0));
    }

    #[test]
    fn ending_the_wrong_pointer_keeps_tracking() {
        let mut touch = TouchScrub::default();
        touch.begin(1, Point::new(0.0, 100.0));

        touch.end(2);
        assert!(touch.is_tracking());

        touch.end(1);
        assert!(!touch.is_tracking());
    }

    #[test]
    fn cancel_behaves_like_end() {
        let mut touch = TouchScrub::default();
        touch.begin(1, Point::new(0.0, 100.0));

        touch.cancel(1);
        assert!(!touch.is_tracking());
        assert_eq!(touch.update(1, Point::new(0.0, 90.0)), None);
    }

    #[test]
    fn end_allows_a_new_gesture() {
        let mut touch = TouchScrub::default();
        touch.begin(1, Point::new(0.0, 100.0));
        touch.end(1);

        assert!(touch.begin(2, Point::new(0.0, 40.0)));
        assert_eq!(touch.update(2, Point::new(0.0, 30.0)), Some(10.0));
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        let mut touch = TouchScrub::default();
        assert!(!touch.begin(1, Point::new(0.0, f64::NAN)));
        assert!(!touch.is_tracking());

        touch.begin(1, Point::new(0.0, 100.0));
        assert_eq!(touch.update(1, Point::new(0.0, f64::INFINITY)), None);
        // The reference survives the bad sample.
        assert_eq!(touch.update(1, Point::new(0.0, 90.0)), Some(10.0));
    }
}
