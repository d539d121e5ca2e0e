#![forbid(unsafe_code)]

//! Raw input vocabularies and source capabilities.
//!
//! The platform layer translates its trackpad and keyboard callbacks into
//! these types. The arbiter never talks to the platform directly; the only
//! thing it asks of a source is to stop or restart scroll delivery through
//! [`ScrollSource`].

use crate::geometry::Delta2D;

/// A callback from the scroll stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// Two-finger scroll started.
    Began,
    /// Scroll moved; the delta is accumulated since `Began`.
    Changed(Delta2D),
    /// The platform cancelled the scroll.
    Cancelled,
    /// Scroll finished. Degenerate gestures carry no final delta.
    Ended(Option<Delta2D>),
}

/// A callback from the magnification/rotation stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagnifyEvent {
    /// Pinch started.
    Began,
    /// Pinch moved. `angle` is in radians.
    Changed { magnification: f64, angle: f64 },
    /// The platform cancelled the pinch.
    Cancelled,
    /// Pinch finished.
    Ended,
}

/// Any raw input the arbiter consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A raw modifier flag word, as reported by the platform.
    Modifiers(u64),
    Scroll(ScrollEvent),
    Magnify(MagnifyEvent),
}

impl From<ScrollEvent> for InputEvent {
    fn from(event: ScrollEvent) -> Self {
        Self::Scroll(event)
    }
}

impl From<MagnifyEvent> for InputEvent {
    fn from(event: MagnifyEvent) -> Self {
        Self::Magnify(event)
    }
}

/// Pause/resume control over the scroll stream.
///
/// While paused the source must deliver no scroll events. Both calls must be
/// idempotent; the arbiter may issue them repeatedly.
pub trait ScrollSource {
    /// Stop delivering scroll events.
    fn pause(&mut self);

    /// Resume delivering scroll events.
    fn resume(&mut self);

    /// Whether delivery is currently paused.
    fn is_paused(&self) -> bool;
}

/// A scroll source that is just a flag.
///
/// Suits platform layers that forward every scroll callback and consult
/// [`is_paused`](ScrollSource::is_paused) before doing so. Starts paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollGate {
    paused: bool,
}

impl ScrollGate {
    /// Create a paused gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { paused: true }
    }
}

impl Default for ScrollGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSource for ScrollGate {
    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl<S: ScrollSource + ?Sized> ScrollSource for &mut S {
    fn pause(&mut self) {
        (**self).pause();
    }

    fn resume(&mut self) {
        (**self).resume();
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }
}

impl<S: ScrollSource + ?Sized> ScrollSource for Box<S> {
    fn pause(&mut self) {
        (**self).pause();
    }

    fn resume(&mut self) {
        (**self).resume();
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }
}
