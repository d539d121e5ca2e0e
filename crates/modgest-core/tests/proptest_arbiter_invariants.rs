//! Property-based invariant tests for the gesture arbiter.
//!
//! These tests verify structural invariants of the emitted gesture stream:
//!
//! 1. `Began` and `Ended` strictly alternate, starting with `Began`
//! 2. Motion events only appear between a `Began` and the next `Ended`
//! 3. Releasing all modifiers leaves the arbiter idle, and nothing is emitted
//!    until a trigger set is held again
//! 4. The phase agrees with the emitted stream
//! 5. Swipe classification matches the sign table for arbitrary deltas
//! 6. Determinism: same inputs yield the same stream

use modgest_core::geometry::Delta2D;
use modgest_core::{
    ArbiterConfig, GestureArbiter, GestureEvent, GesturePhase, InputEvent, MagnifyEvent,
    Modifiers, ScrollEvent, ScrollGate, ScrollSource, SwipeDirection, classify,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn modifiers_strategy() -> impl Strategy<Value = Modifiers> {
    prop_oneof![
        Just(Modifiers::NONE),
        Just(Modifiers::COMMAND),
        Just(Modifiers::COMMAND | Modifiers::SHIFT),
        Just(Modifiers::OPTION),
        Just(Modifiers::COMMAND | Modifiers::OPTION),
        any::<u32>().prop_map(Modifiers::from_bits_truncate),
    ]
}

fn delta_strategy() -> impl Strategy<Value = Delta2D> {
    (-200.0f64..200.0, -200.0f64..200.0).prop_map(|(x, y)| Delta2D::new(x, y))
}

fn input_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        2 => modifiers_strategy().prop_map(|m| InputEvent::Modifiers(m.to_raw())),
        // Device-dependent noise in the low word must not matter.
        1 => (modifiers_strategy(), 0u64..0xFFFF)
            .prop_map(|(m, noise)| InputEvent::Modifiers(m.to_raw() | noise)),
        1 => Just(InputEvent::Scroll(ScrollEvent::Began)),
        3 => delta_strategy().prop_map(|d| InputEvent::Scroll(ScrollEvent::Changed(d))),
        1 => Just(InputEvent::Scroll(ScrollEvent::Cancelled)),
        2 => proptest::option::of(delta_strategy())
            .prop_map(|d| InputEvent::Scroll(ScrollEvent::Ended(d))),
        1 => Just(InputEvent::Magnify(MagnifyEvent::Began)),
        2 => (-2.0f64..2.0, -3.2f64..3.2).prop_map(|(magnification, angle)| {
            InputEvent::Magnify(MagnifyEvent::Changed { magnification, angle })
        }),
        1 => Just(InputEvent::Magnify(MagnifyEvent::Cancelled)),
        1 => Just(InputEvent::Magnify(MagnifyEvent::Ended)),
    ]
}

fn config_strategy() -> impl Strategy<Value = ArbiterConfig> {
    let set = prop_oneof![
        Just(Modifiers::COMMAND),
        Just(Modifiers::COMMAND | Modifiers::SHIFT),
        Just(Modifiers::OPTION),
    ];
    (set.clone(), set.clone(), set.clone(), set, any::<bool>(), 0.0f64..60.0).prop_map(
        |(mv, rd, rf, sw, early, threshold)| {
            ArbiterConfig::default()
                .with_move_mods(mv)
                .with_resize_delta_mods(rd)
                .with_resize_factor_mods(rf)
                .with_swipe_mods(sw)
                .with_begin_early(early)
                .with_swipe_threshold(threshold)
        },
    )
}

type Arbiter = GestureArbiter<Vec<GestureEvent>>;

fn run(config: ArbiterConfig, inputs: &[InputEvent]) -> Arbiter {
    let mut arbiter = GestureArbiter::new(config, ScrollGate::new())
        .unwrap()
        .with_delegate(Vec::new());
    for input in inputs {
        arbiter.handle_input(*input);
    }
    arbiter
}

fn stream(arbiter: &Arbiter) -> &[GestureEvent] {
    arbiter.delegate().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// 1–2. Well-formed lifecycle
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn began_and_ended_alternate(
        config in config_strategy(),
        inputs in proptest::collection::vec(input_strategy(), 0..120),
    ) {
        let arbiter = run(config, &inputs);
        let mut open = false;
        for event in stream(&arbiter) {
            match event {
                GestureEvent::Began => {
                    prop_assert!(!open, "Began while already open");
                    open = true;
                }
                GestureEvent::Ended => {
                    prop_assert!(open, "Ended without Began");
                    open = false;
                }
                _ => prop_assert!(open, "motion event outside a gesture: {:?}", event),
            }
        }
    }

    #[test]
    fn phase_matches_stream(
        config in config_strategy(),
        inputs in proptest::collection::vec(input_strategy(), 0..120),
    ) {
        let arbiter = run(config, &inputs);
        let events = stream(&arbiter);
        let expected = match events.iter().rposition(|e| e.is_lifecycle()) {
            None => GesturePhase::Ended,
            Some(i) if events[i] == GestureEvent::Ended => GesturePhase::Ended,
            Some(i) if i + 1 == events.len() => GesturePhase::Began,
            Some(_) => GesturePhase::Changed,
        };
        prop_assert_eq!(arbiter.phase(), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Empty-modifier kill switch
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn release_ends_and_silences(
        config in config_strategy(),
        prefix in proptest::collection::vec(input_strategy(), 0..60),
        motion in proptest::collection::vec(input_strategy(), 0..60),
    ) {
        let mut arbiter = run(config, &prefix);
        let was_active = arbiter.is_active();
        let before = stream(&arbiter).len();

        arbiter.handle_input(InputEvent::Modifiers(0));
        prop_assert_eq!(arbiter.phase(), GesturePhase::Ended);
        prop_assert!(arbiter.scroll_source().is_paused());
        let after_release = stream(&arbiter).len();
        if was_active {
            prop_assert_eq!(after_release, before + 1);
            prop_assert_eq!(stream(&arbiter).last(), Some(&GestureEvent::Ended));
        } else {
            prop_assert_eq!(after_release, before);
        }

        // Raw motion alone (no modifier changes) must stay silent.
        for input in motion.iter().filter(|i| !matches!(i, InputEvent::Modifiers(_))) {
            arbiter.handle_input(*input);
        }
        prop_assert_eq!(stream(&arbiter).len(), after_release);
        prop_assert_eq!(arbiter.phase(), GesturePhase::Ended);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Classification
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn classify_matches_sign_table(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        threshold in 0.0f64..100.0,
    ) {
        let sx: i8 = if x.abs() > threshold { if x < 0.0 { -1 } else { 1 } } else { 0 };
        let sy: i8 = if y.abs() > threshold { if y < 0.0 { -1 } else { 1 } } else { 0 };
        let result = classify(Delta2D::new(x, y), threshold);
        match result {
            None => prop_assert_eq!((sx, sy), (0, 0)),
            Some(dir) => prop_assert_eq!(dir.signs(), (sx, sy)),
        }
    }

    #[test]
    fn positive_x_is_never_rightward(
        x in 30.5f64..500.0,
        y in -500.0f64..500.0,
    ) {
        let dir = classify(Delta2D::new(x, y), 30.0).unwrap();
        prop_assert!(matches!(
            dir,
            SwipeDirection::Left | SwipeDirection::TopLeft | SwipeDirection::BottomLeft
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Determinism
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_inputs_same_stream(
        config in config_strategy(),
        inputs in proptest::collection::vec(input_strategy(), 0..80),
    ) {
        let a = run(config.clone(), &inputs);
        let b = run(config, &inputs);
        prop_assert_eq!(stream(&a), stream(&b));
        prop_assert_eq!(a.phase(), b.phase());
    }
}
