#![forbid(unsafe_code)]

//! The consumer interface.
//!
//! Implement [`GestureDelegate`] to receive gestures. Every method has a
//! no-op default, so a consumer only overrides what it cares about. The
//! arbiter calls [`handle`](GestureDelegate::handle), which routes to the
//! specific methods; override `handle` instead to receive the stream as
//! [`GestureEvent`] values.
//!
//! `Vec<GestureEvent>` implements the trait by recording every event, which
//! is what the tests in this crate use.

use crate::event::GestureEvent;
use crate::geometry::Delta2D;
use crate::swipe::SwipeDirection;

/// Receives gestures from a [`GestureArbiter`](crate::arbiter::GestureArbiter).
///
/// All calls are synchronous, from inside the arbiter's handlers.
pub trait GestureDelegate {
    /// A gesture session started.
    fn on_gesture_began(&mut self) {}

    /// Move by `delta`.
    fn on_move_gesture(&mut self, delta: Delta2D) {
        let _ = delta;
    }

    /// Resize by `delta`.
    fn on_resize_delta_gesture(&mut self, delta: Delta2D) {
        let _ = delta;
    }

    /// Resize by `factor`.
    fn on_resize_factor_gesture(&mut self, factor: Delta2D) {
        let _ = factor;
    }

    /// A swipe completed.
    fn on_swipe_gesture(&mut self, direction: SwipeDirection) {
        let _ = direction;
    }

    /// The gesture session ended.
    fn on_gesture_ended(&mut self) {}

    /// Route one event to the matching method.
    fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Began => self.on_gesture_began(),
            GestureEvent::Move(delta) => self.on_move_gesture(delta),
            GestureEvent::ResizeDelta(delta) => self.on_resize_delta_gesture(delta),
            GestureEvent::ResizeFactor(factor) => self.on_resize_factor_gesture(factor),
            GestureEvent::Swipe(direction) => self.on_swipe_gesture(direction),
            GestureEvent::Ended => self.on_gesture_ended(),
        }
    }
}

impl GestureDelegate for Vec<GestureEvent> {
    fn on_gesture_began(&mut self) {
        self.push(GestureEvent::Began);
    }

    fn on_move_gesture(&mut self, delta: Delta2D) {
        self.push(GestureEvent::Move(delta));
    }

    fn on_resize_delta_gesture(&mut self, delta: Delta2D) {
        self.push(GestureEvent::ResizeDelta(delta));
    }

    fn on_resize_factor_gesture(&mut self, factor: Delta2D) {
        self.push(GestureEvent::ResizeFactor(factor));
    }

    fn on_swipe_gesture(&mut self, direction: SwipeDirection) {
        self.push(GestureEvent::Swipe(direction));
    }

    fn on_gesture_ended(&mut self) {
        self.push(GestureEvent::Ended);
    }
}

macro_rules! forward_delegate {
    ($($ty:ty),*) => {$(
        impl<D: GestureDelegate + ?Sized> GestureDelegate for $ty {
            fn on_gesture_began(&mut self) {
                (**self).on_gesture_began();
            }

            fn on_move_gesture(&mut self, delta: Delta2D) {
                (**self).on_move_gesture(delta);
            }

            fn on_resize_delta_gesture(&mut self, delta: Delta2D) {
                (**self).on_resize_delta_gesture(delta);
            }

            fn on_resize_factor_gesture(&mut self, factor: Delta2D) {
                (**self).on_resize_factor_gesture(factor);
            }

            fn on_swipe_gesture(&mut self, direction: SwipeDirection) {
                (**self).on_swipe_gesture(direction);
            }

            fn on_gesture_ended(&mut self) {
                (**self).on_gesture_ended();
            }

            fn handle(&mut self, event: GestureEvent) {
                (**self).handle(event);
            }
        }
    )*};
}

forward_delegate!(&mut D, Box<D>);
