// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted bottom-sheet session on a virtual clock.
//!
//! The sheet is presented with three snap points, dragged up, flicked down,
//! pushed around by the keyboard, and finally swiped away.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example bottom_sheet_session`

use kurbo::{Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_bottom_sheet::{
    BottomSheet, Curve, KeyboardInfo, PanPhase, PanSample, SheetConfig, SheetSize,
};
use understory_demos::SteppedHost;

const FRAME: f64 = 1.0 / 60.0;

fn settle(sheet: &mut BottomSheet<SteppedHost>) {
    while sheet.host().is_animating() {
        for id in sheet.host_mut().advance(FRAME) {
            sheet.animation_finished(id);
        }
    }
    if sheet.host().teardown_requested {
        sheet.host_mut().teardown_requested = false;
        sheet.teardown_finished();
    }
    let layout = sheet.host().layout();
    println!(
        "  committed={:?} height={:.1} translation={:.1} bottom={:.1}",
        sheet.state().committed_size(),
        layout.container_height,
        layout.container_translation,
        layout.container_bottom_offset,
    );
}

/// Drag from rest by `dy` over a few frames and release at `velocity` points per second.
fn drag(sheet: &mut BottomSheet<SteppedHost>, dy: f64, velocity: f64) {
    sheet.handle_pan(PanSample::new(PanPhase::Began, Vec2::ZERO, Vec2::ZERO));
    for step in 1..=4 {
        let translation = Vec2::new(0.0, dy * f64::from(step) / 4.0);
        sheet.handle_pan(PanSample::new(
            PanPhase::Changed,
            translation,
            Vec2::new(0.0, velocity),
        ));
    }
    sheet.handle_pan(PanSample::new(
        PanPhase::Ended,
        Vec2::new(0.0, dy),
        Vec2::new(0.0, velocity),
    ));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sheet = BottomSheet::new(
        SteppedHost::phone(),
        SheetConfig::default().top_corners_radius(12.0),
        [
            SheetSize::FullScreen,
            SheetSize::Fixed(200.0),
            SheetSize::HalfScreen,
        ],
    );
    sheet.set_will_dismiss(|state| println!("will dismiss at {:?}", state.committed_size()));
    sheet.set_did_dismiss(|_| println!("did dismiss"));

    println!("present");
    sheet.appear();
    settle(&mut sheet);

    println!("drag up 150pt, slow release");
    drag(&mut sheet, -150.0, -100.0);
    settle(&mut sheet);

    println!("flick down from half screen");
    drag(&mut sheet, 60.0, 1200.0);
    settle(&mut sheet);

    println!("keyboard shows");
    let keyboard = KeyboardInfo {
        end_frame: Some(Rect::new(0.0, 476.0, 375.0, 812.0)),
        duration: Some(0.25),
        curve: Some(Curve::EaseInOut),
    };
    sheet.keyboard_will_change_frame(Some(&keyboard));
    settle(&mut sheet);

    println!("keyboard hides");
    sheet.keyboard_will_hide(Some(&KeyboardInfo {
        end_frame: None,
        ..keyboard
    }));
    settle(&mut sheet);

    println!("swipe away");
    drag(&mut sheet, 180.0, 800.0);
    settle(&mut sheet);
    println!("final state: {:?}", sheet.state().presentation());
}
