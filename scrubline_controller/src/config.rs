// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use core::fmt;

use scrubline_motion::MotionConfig;

use crate::indicator::IndicatorTrack;

/// How the keyboard step relates to the sensitivity factor.
///
/// The original interaction applied the wheel/touch sensitivity only to
/// wheel and touch deltas; a key press contributed its step verbatim, giving
/// the keyboard a different input-to-motion ratio than the other
/// modalities. That asymmetry is kept as the default but made explicit here
/// so hosts can opt into uniform scaling instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum KeyScaling {
    /// The keyboard step is accumulated verbatim (the classic behavior).
    #[default]
    Raw,
    /// The keyboard step is scaled by the motion sensitivity, like wheel
    /// and touch deltas.
    Scaled,
}

/// Error returned when a [`ControllerConfig`] value is out of bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControllerConfigError {
    /// The keyboard step was not finite and non-negative.
    InvalidKeyboardStep,
}

impl fmt::Display for ControllerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyboardStep => {
                write!(f, "keyboard step must be finite and >= 0")
            }
        }
    }
}

impl core::error::Error for ControllerConfigError {}

/// Validated configuration for a [`ScrubController`](crate::ScrubController).
///
/// Combines the motion constants, the keyboard step magnitude and scaling
/// policy, and the indicator's visual bounds. Motion constants and indicator
/// bounds validate themselves at their own construction sites; only the
/// keyboard step is checked here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    motion: MotionConfig,
    keyboard_step: f64,
    key_scaling: KeyScaling,
    indicator: IndicatorTrack,
}

impl ControllerConfig {
    /// Creates a configuration with the default [`KeyScaling::Raw`] policy.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerConfigError::InvalidKeyboardStep`] if
    /// `keyboard_step` is not finite and non-negative.
    pub fn new(
        motion: MotionConfig,
        keyboard_step: f64,
        indicator: IndicatorTrack,
    ) -> Result<Self, ControllerConfigError> {
        if !keyboard_step.is_finite() || keyboard_step < 0.0 {
            return Err(ControllerConfigError::InvalidKeyboardStep);
        }
        Ok(Self {
            motion,
            keyboard_step,
            key_scaling: KeyScaling::default(),
            indicator,
        })
    }

    /// Replaces the keyboard scaling policy.
    #[must_use]
    pub fn with_key_scaling(mut self, key_scaling: KeyScaling) -> Self {
        self.key_scaling = key_scaling;
        self
    }

    /// The motion constants.
    #[must_use]
    pub fn motion(&self) -> MotionConfig {
        self.motion
    }

    /// The delta magnitude one key press contributes.
    #[must_use]
    pub fn keyboard_step(&self) -> f64 {
        self.keyboard_step
    }

    /// The keyboard scaling policy.
    #[must_use]
    pub fn key_scaling(&self) -> KeyScaling {
        self.key_scaling
    }

    /// The indicator's visual bounds.
    #[must_use]
    pub fn indicator(&self) -> IndicatorTrack {
        self.indicator
    }
}
