// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings for the two scrub directions.
//!
//! Scrubbing only understands two keys: one bound to each direction of the
//! indicator axis. The key type is host-chosen — a DOM key string, a
//! keycode, an enum from a windowing crate — anything `PartialEq`. A match
//! means the host should also suppress the key's default page-navigation
//! effect.

/// A scrub direction selected by a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrubDirection {
    /// Toward the last frame.
    Forward,
    /// Toward frame zero.
    Backward,
}

impl ScrubDirection {
    /// The delta a press in this direction contributes, for a given step
    /// magnitude.
    #[must_use]
    pub fn delta(self, step: f64) -> f64 {
        match self {
            Self::Forward => step,
            Self::Backward => -step,
        }
    }
}

/// Maps two host key values onto the two scrub directions.
///
/// # Example
///
/// ```
/// use scrubline_input::{KeyBindings, ScrubDirection};
///
/// let bindings = KeyBindings::new("ArrowDown", "ArrowUp");
/// assert_eq!(bindings.direction_of(&"ArrowDown"), Some(ScrubDirection::Forward));
/// assert_eq!(bindings.direction_of(&"ArrowUp"), Some(ScrubDirection::Backward));
/// assert_eq!(bindings.direction_of(&"Space"), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings<K> {
    forward: K,
    backward: K,
}

impl<K: PartialEq> KeyBindings<K> {
    /// Creates bindings from the forward and backward key values.
    #[must_use]
    pub fn new(forward: K, backward: K) -> Self {
        Self { forward, backward }
    }

    /// Resolves a pressed key to a scrub direction, if it is bound.
    #[must_use]
    pub fn direction_of(&self, key: &K) -> Option<ScrubDirection> {
        if *key == self.forward {
            Some(ScrubDirection::Forward)
        } else if *key == self.backward {
            Some(ScrubDirection::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_resolve_to_their_directions() {
        let bindings = KeyBindings::new(40_u32, 38_u32);
        assert_eq!(bindings.direction_of(&40), Some(ScrubDirection::Forward));
        assert_eq!(bindings.direction_of(&38), Some(ScrubDirection::Backward));
    }

    #[test]
    fn unbound_keys_resolve_to_none() {
        let bindings = KeyBindings::new(40_u32, 38_u32);
        assert_eq!(bindings.direction_of(&32), None);
    }

    #[test]
    fn direction_deltas_are_signed_steps() {
        assert_eq!(ScrubDirection::Forward.delta(30.0), 30.0);
        assert_eq!(ScrubDirection::Backward.delta(30.0), -30.0);
    }
}
