// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The combined per-event normalization entry point.

use kurbo::Point;

use crate::keys::KeyBindings;
use crate::touch::TouchScrub;
use crate::wheel::normalize_wheel;

/// One raw input event, as translated by the host from its platform.
///
/// `K` is the host's key value type (see [`KeyBindings`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent<K> {
    /// A wheel event with its vertical scroll amount.
    Wheel {
        /// Vertical scroll amount; positive advances playback.
        delta_y: f64,
    },
    /// A touch pointer landed.
    TouchBegin {
        /// Host pointer identifier.
        id: u64,
        /// Pointer position in the host's coordinate space.
        position: Point,
    },
    /// A tracked touch pointer moved.
    TouchMove {
        /// Host pointer identifier.
        id: u64,
        /// Pointer position in the host's coordinate space.
        position: Point,
    },
    /// A touch pointer lifted.
    TouchEnd {
        /// Host pointer identifier.
        id: u64,
    },
    /// The platform cancelled a touch sequence.
    TouchCancel {
        /// Host pointer identifier.
        id: u64,
    },
    /// A key was pressed.
    Key(K),
}

/// Which modality produced a [`NormalizedDelta`].
///
/// Downstream consumers use this to apply per-modality scaling policy:
/// wheel and touch deltas are conventionally sensitivity-scaled, while the
/// keyboard step is conventionally applied verbatim.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// A wheel event.
    Wheel,
    /// A touch-drag move.
    Touch,
    /// A bound key press.
    Keyboard,
}

/// One normalized scrub delta: a finite signed scalar where positive
/// advances playback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NormalizedDelta {
    /// The delta amount, always finite.
    pub amount: f64,
    /// The modality that produced it.
    pub source: InputSource,
}

/// Normalizes raw input events into scrub deltas.
///
/// Combines the [`wheel`](crate::wheel), [`touch`](crate::touch), and
/// [`keys`](crate::keys) modules behind one entry point. For every accepted
/// event, [`InputNormalizer::apply`] returns exactly one finite
/// [`NormalizedDelta`]; everything else returns `None` with no side effects
/// beyond touch bookkeeping.
///
/// A `Some` result doubles as the host's cue to suppress the event's
/// default platform reaction (native scrolling for wheel and touch, page
/// navigation for the bound keys).
#[derive(Copy, Clone, Debug)]
pub struct InputNormalizer<K> {
    touch: TouchScrub,
    bindings: KeyBindings<K>,
    keyboard_step: f64,
}

impl<K: PartialEq> InputNormalizer<K> {
    /// Creates a normalizer with the given key bindings and keyboard step
    /// magnitude.
    #[must_use]
    pub fn new(bindings: KeyBindings<K>, keyboard_step: f64) -> Self {
        Self {
            touch: TouchScrub::default(),
            bindings,
            keyboard_step,
        }
    }

    /// The delta magnitude a bound key press contributes.
    #[must_use]
    pub fn keyboard_step(&self) -> f64 {
        self.keyboard_step
    }

    /// Returns `true` while a touch pointer is being tracked.
    #[must_use]
    pub fn is_touch_active(&self) -> bool {
        self.touch.is_tracking()
    }

    /// Feeds one event through the appropriate modality.
    pub fn apply(&mut self, event: InputEvent<K>) -> Option<NormalizedDelta> {
        match event {
            InputEvent::Wheel { delta_y } => {
                let amount = normalize_wheel(delta_y)?;
                Some(NormalizedDelta {
                    amount,
                    source: InputSource::Wheel,
                })
            }
            InputEvent::TouchBegin { id, position } => {
                // Starting a gesture produces no delta of its own.
                self.touch.begin(id, position);
                None
            }
            InputEvent::TouchMove { id, position } => {
                let amount = self.touch.update(id, position)?;
                Some(NormalizedDelta {
                    amount,
                    source: InputSource::Touch,
                })
            }
            InputEvent::TouchEnd { id } => {
                self.touch.end(id);
                None
            }
            InputEvent::TouchCancel { id } => {
                self.touch.cancel(id);
                None
            }
            InputEvent::Key(key) => {
                let direction = self.bindings.direction_of(&key)?;
                Some(NormalizedDelta {
                    amount: direction.delta(self.keyboard_step),
                    source: InputSource::Keyboard,
                })
            }
        }
    }
}
