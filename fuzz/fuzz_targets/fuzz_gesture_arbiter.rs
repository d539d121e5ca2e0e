#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use modgest_core::geometry::Delta2D;
use modgest_core::{
    ArbiterConfig, GestureArbiter, GestureEvent, GesturePhase, InputEvent, MagnifyEvent,
    Modifiers, ScrollEvent, ScrollGate, ScrollSource,
};

#[derive(Debug, Arbitrary)]
enum Step {
    Flags(u64),
    ScrollBegan,
    ScrollChanged(f64, f64),
    ScrollCancelled,
    ScrollEnded(Option<(f64, f64)>),
    MagnifyBegan,
    MagnifyChanged(f64, f64),
    MagnifyCancelled,
    MagnifyEnded,
    Shutdown,
}

#[derive(Debug, Arbitrary)]
struct Input {
    move_mods: u32,
    resize_delta_mods: u32,
    resize_factor_mods: u32,
    swipe_mods: u32,
    begin_early: bool,
    swipe_threshold: f64,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    let config = ArbiterConfig::default()
        .with_move_mods(Modifiers::from_bits_truncate(input.move_mods))
        .with_resize_delta_mods(Modifiers::from_bits_truncate(input.resize_delta_mods))
        .with_resize_factor_mods(Modifiers::from_bits_truncate(input.resize_factor_mods))
        .with_swipe_mods(Modifiers::from_bits_truncate(input.swipe_mods))
        .with_begin_early(input.begin_early)
        .with_swipe_threshold(input.swipe_threshold);

    // Rejected configs are fine; they just must not panic.
    let Ok(arbiter) = GestureArbiter::new(config, ScrollGate::new()) else {
        return;
    };
    let mut arbiter = arbiter.with_delegate(Vec::<GestureEvent>::new());

    for step in input.steps.into_iter().take(512) {
        match step {
            Step::Flags(raw) => arbiter.handle_input(InputEvent::Modifiers(raw)),
            Step::ScrollBegan => arbiter.handle_scroll(ScrollEvent::Began),
            Step::ScrollChanged(x, y) => {
                arbiter.handle_scroll(ScrollEvent::Changed(Delta2D::new(x, y)));
            }
            Step::ScrollCancelled => arbiter.handle_scroll(ScrollEvent::Cancelled),
            Step::ScrollEnded(d) => {
                arbiter.handle_scroll(ScrollEvent::Ended(d.map(Delta2D::from)));
            }
            Step::MagnifyBegan => arbiter.handle_magnify(MagnifyEvent::Began),
            Step::MagnifyChanged(magnification, angle) => {
                arbiter.handle_magnify(MagnifyEvent::Changed {
                    magnification,
                    angle,
                });
            }
            Step::MagnifyCancelled => arbiter.handle_magnify(MagnifyEvent::Cancelled),
            Step::MagnifyEnded => arbiter.handle_magnify(MagnifyEvent::Ended),
            Step::Shutdown => arbiter.shutdown(),
        }

        // Idle arbiters keep the scroll source paused.
        if arbiter.modifiers().is_empty() {
            assert_eq!(arbiter.phase(), GesturePhase::Ended);
            assert!(arbiter.scroll_source().is_paused());
        }
    }

    // Began and Ended strictly alternate; motion only inside a gesture.
    let mut open = false;
    for event in arbiter.delegate().expect("delegate attached") {
        match event {
            GestureEvent::Began => {
                assert!(!open, "Began while open");
                open = true;
            }
            GestureEvent::Ended => {
                assert!(open, "Ended while closed");
                open = false;
            }
            _ => assert!(open, "motion outside a gesture"),
        }
    }
    assert_eq!(open, arbiter.is_active());
});
