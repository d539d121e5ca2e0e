#![forbid(unsafe_code)]

//! Gesture output types.
//!
//! [`GestureEvent`] is the single, mutually exclusive stream the arbiter
//! produces. Every sequence it emits is well formed:
//! `Began` → zero or more motion events → `Ended`.

use crate::geometry::Delta2D;
use crate::swipe::SwipeDirection;

/// Lifecycle phase of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// A gesture has begun; nothing emitted yet.
    Began,
    /// At least one motion event has been emitted.
    Changed,
    /// No gesture in progress.
    #[default]
    Ended,
}

impl GesturePhase {
    /// Returns true while a gesture is in progress.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Ended)
    }
}

/// Interpretation chosen for a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureType {
    Move,
    ResizeDelta,
    ResizeFactor,
    Swipe(SwipeDirection),
}

/// A high-level gesture event delivered to the consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A gesture session started.
    Began,
    /// Move by the accumulated scroll delta.
    Move(Delta2D),
    /// Resize by the accumulated scroll delta.
    ResizeDelta(Delta2D),
    /// Resize by a factor derived from magnification and rotation.
    ResizeFactor(Delta2D),
    /// A directional swipe completed.
    Swipe(SwipeDirection),
    /// The gesture session ended.
    Ended,
}

impl GestureEvent {
    /// The gesture type of a motion event; `None` for `Began` and `Ended`.
    #[must_use]
    pub const fn gesture_type(&self) -> Option<GestureType> {
        match self {
            Self::Move(_) => Some(GestureType::Move),
            Self::ResizeDelta(_) => Some(GestureType::ResizeDelta),
            Self::ResizeFactor(_) => Some(GestureType::ResizeFactor),
            Self::Swipe(dir) => Some(GestureType::Swipe(*dir)),
            Self::Began | Self::Ended => None,
        }
    }

    /// Returns true for `Began` and `Ended`.
    #[must_use]
    pub const fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Began | Self::Ended)
    }
}
