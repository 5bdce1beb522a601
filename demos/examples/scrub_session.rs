// Copyright 2026 the Scrubline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full scrub session in the terminal.
//!
//! Drives a `ScrubController` over simulated wheel, keyboard, and touch
//! input against printing host stand-ins, pumping the manual scheduler the
//! way a real host would pump animation-frame callbacks.
//!
//! Run:
//! - `cargo run -p scrubline_demos --example scrub_session`

use kurbo::Point;
use scrubline_controller::{ControllerConfig, IndicatorTrack, ScrubController};
use scrubline_demos::{ManualScheduler, PrintingPlayback, RememberingIndicator};
use scrubline_input::{InputEvent, KeyBindings};
use scrubline_motion::MotionConfig;

type DemoController =
    ScrubController<&'static str, PrintingPlayback, RememberingIndicator, ManualScheduler>;

/// Runs armed ticks to completion, like a host's frame-callback loop.
fn pump(controller: &mut DemoController) {
    while controller.scheduler().pending {
        controller.scheduler_mut().pending = false;
        let _ = controller.on_tick();
    }
}

fn main() {
    let config = ControllerConfig::new(
        MotionConfig::default(),
        30.0,
        IndicatorTrack::new(0.0, 200.0).unwrap(),
    )
    .unwrap();

    let mut controller = ScrubController::new(
        config,
        KeyBindings::new("ArrowDown", "ArrowUp"),
        PrintingPlayback::default(),
        RememberingIndicator::default(),
        ManualScheduler::default(),
    );

    // The playback library signals readiness with 520 rendered frames.
    println!("media ready (520 frames):");
    controller.media_ready(520);

    println!("wheel delta +100 (target becomes 20):");
    controller.handle(InputEvent::Wheel { delta_y: 100.0 });
    pump(&mut controller);

    println!("forward key, three presses (+30 each, unscaled):");
    for _ in 0..3 {
        controller.handle(InputEvent::Key("ArrowDown"));
    }
    pump(&mut controller);

    println!("touch drag, 150 pixels upward in three moves:");
    controller.handle(InputEvent::TouchBegin {
        id: 1,
        position: Point::new(60.0, 400.0),
    });
    for y in [350.0, 300.0, 250.0] {
        controller.handle(InputEvent::TouchMove {
            id: 1,
            position: Point::new(60.0, y),
        });
    }
    controller.handle(InputEvent::TouchEnd { id: 1 });
    pump(&mut controller);

    let position = controller.position().unwrap();
    println!(
        "settled at frame {} of {} (indicator offset {:.1})",
        position.frame(),
        position.max_position(),
        controller.indicator().offset,
    );

    controller.detach();
    println!("detached; further input is inert");
}
