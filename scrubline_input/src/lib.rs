// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scrubline_input --heading-base-level=0

//! Scrubline Input: wheel, touch, and keyboard normalization into scrub deltas.
//!
//! This crate turns heterogeneous raw input events into one common currency:
//! a signed scalar delta where **positive advances playback**. Each supported
//! modality has its own small module:
//!
//! - [`wheel`]: vertical wheel amounts pass through with their sign intact.
//! - [`touch`]: a single-pointer vertical drag tracker; each move event
//!   yields the distance traveled since the previous one, with upward drags
//!   counting as forward.
//! - [`keys`]: two host-chosen key values bound to the forward and backward
//!   directions, each press contributing a fixed step.
//!
//! [`InputNormalizer`] combines the three behind a single
//! [`apply`](InputNormalizer::apply) entry point that accepts an
//! [`InputEvent`] and produces at most one [`NormalizedDelta`] per event.
//! Events outside the recognized set, out-of-state touch moves, and
//! non-finite coordinates all produce `None` with no side effects.
//!
//! The crate does not listen to anything itself. Hosts own their event loop,
//! translate platform events into [`InputEvent`] values, and are expected to
//! suppress the platform's default reaction (page scroll, page navigation)
//! exactly when normalization returns `Some`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use scrubline_input::{InputEvent, InputNormalizer, InputSource, KeyBindings};
//!
//! // Host key values can be any `PartialEq` type; here, plain strings.
//! let bindings = KeyBindings::new("ArrowDown", "ArrowUp");
//! let mut normalizer = InputNormalizer::new(bindings, 30.0);
//!
//! // A wheel event passes its vertical amount through.
//! let wheel = normalizer.apply(InputEvent::Wheel { delta_y: 100.0 }).unwrap();
//! assert_eq!(wheel.amount, 100.0);
//! assert_eq!(wheel.source, InputSource::Wheel);
//!
//! // A downward-bound key press contributes +step.
//! let key = normalizer.apply(InputEvent::Key("ArrowDown")).unwrap();
//! assert_eq!(key.amount, 30.0);
//!
//! // Touch moves report the vertical distance since the previous move;
//! // dragging upward scrubs forward.
//! let began = normalizer.apply(InputEvent::TouchBegin { id: 7, position: Point::new(50.0, 300.0) });
//! assert!(began.is_none(), "touch start contributes no delta");
//! let drag = normalizer
//!     .apply(InputEvent::TouchMove { id: 7, position: Point::new(50.0, 280.0) })
//!     .unwrap();
//! assert_eq!(drag.amount, 20.0);
//! assert_eq!(drag.source, InputSource::Touch);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod keys;
pub mod touch;
pub mod wheel;

mod normalizer;

pub use keys::{KeyBindings, ScrubDirection};
pub use normalizer::{InputEvent, InputNormalizer, InputSource, NormalizedDelta};
pub use touch::TouchScrub;
