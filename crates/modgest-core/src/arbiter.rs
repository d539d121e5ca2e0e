#![forbid(unsafe_code)]

//! Gesture arbitration: fuses modifier, scroll, and magnify streams into one
//! gesture stream.
//!
//! [`GestureArbiter`] owns the only mutable gesture state: the current
//! [`GesturePhase`] and the held [`Modifiers`]. Every raw callback goes
//! through it, and it decides which single interpretation, if any, a motion
//! event gets.
//!
//! # State Machine
//!
//! ```text
//!            scroll/magnify Began, first emission,
//!            or trigger press with begin_early
//!   Ended ───────────────────────────────────────▶ Began
//!     ▲                                              │ any emission
//!     │ modifiers released / shutdown                ▼
//!     └──────────────────────────────────────────── Changed ◀─┐
//!                                                     └────────┘
//! ```
//!
//! # Resolution
//!
//! The held set is compared by equality on every event; nothing is cached
//! per gesture.
//!
//! - Scroll `Changed`: `move_mods` first, then `resize_delta_mods`.
//! - Magnify `Changed`: `resize_factor_mods` only.
//! - Scroll `Ended`: `swipe_mods` only, and only with a final delta.
//!
//! # Invariants
//!
//! 1. `Began` and `Ended` strictly alternate in the output, starting with
//!    `Began`.
//! 2. No motion event is emitted while the phase is `Ended`; an emission from
//!    `Ended` first emits `Began`.
//! 3. With no modifiers held, every raw-motion event is ignored. Scroll
//!    events are also ignored while the scroll source is paused, which
//!    covers teardown and unmatched sets held after a release.
//! 4. Only a release of all modifiers or [`shutdown`](GestureArbiter::shutdown)
//!    ends a gesture. Scroll `Ended` and magnify `Ended` do not.
//!
//! # Failure Modes
//!
//! - If the held set changes from one trigger to another without passing
//!   through empty, later events are interpreted with the new set inside the
//!   same gesture. The switch is logged at debug level.
//! - Without a delegate every emission is dropped, but phase tracking
//!   continues, so attaching a delegate mid-gesture sees no `Began`.

use std::fmt;
use std::mem;

use crate::config::ArbiterConfig;
use crate::delegate::GestureDelegate;
use crate::error::Result;
use crate::event::{GestureEvent, GesturePhase, GestureType};
use crate::geometry::Delta2D;
use crate::modifiers::Modifiers;
use crate::source::{InputEvent, MagnifyEvent, ScrollEvent, ScrollGate, ScrollSource};
use crate::swipe::classify;
use crate::tracker::{ModifierTracker, ModifierTransition};

#[cfg(feature = "tracing")]
use crate::logging::{debug, trace};
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace};

/// Resize factor for a pinch: the magnification vector rotated by `angle`
/// (radians) and negated.
#[inline]
#[must_use]
pub fn resize_factor(magnification: f64, angle: f64) -> Delta2D {
    -Delta2D::from_polar(magnification, angle)
}

/// Stateful arbiter turning raw input into a [`GestureEvent`] stream.
///
/// Feed modifier snapshots to [`on_modifier_change`](Self::on_modifier_change),
/// scroll callbacks to [`handle_scroll`](Self::handle_scroll), and pinch
/// callbacks to [`handle_magnify`](Self::handle_magnify). All handlers are
/// synchronous and constant time.
pub struct GestureArbiter<D, S = ScrollGate> {
    config: ArbiterConfig,
    tracker: ModifierTracker,
    phase: GesturePhase,
    current_type: Option<GestureType>,
    scroll: S,
    delegate: Option<D>,
}

impl<D, S> fmt::Debug for GestureArbiter<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureArbiter")
            .field("phase", &self.phase)
            .field("modifiers", &self.tracker.current())
            .field("current_type", &self.current_type)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl<D: GestureDelegate, S: ScrollSource> GestureArbiter<D, S> {
    /// Create an arbiter with no delegate.
    ///
    /// Nothing is held yet, so scroll listening is paused immediately.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ArbiterConfig::validate`].
    pub fn new(config: ArbiterConfig, mut scroll: S) -> Result<Self> {
        config.validate()?;
        scroll.pause();
        Ok(Self {
            config,
            tracker: ModifierTracker::new(),
            phase: GesturePhase::Ended,
            current_type: None,
            scroll,
            delegate: None,
        })
    }

    /// Attach a delegate, builder style.
    #[must_use]
    pub fn with_delegate(mut self, delegate: D) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Attach a delegate, returning the previous one.
    pub fn set_delegate(&mut self, delegate: D) -> Option<D> {
        self.delegate.replace(delegate)
    }

    /// Detach the delegate. Later emissions are dropped.
    pub fn take_delegate(&mut self) -> Option<D> {
        self.delegate.take()
    }

    #[inline]
    #[must_use]
    pub fn delegate(&self) -> Option<&D> {
        self.delegate.as_ref()
    }

    #[inline]
    pub fn delegate_mut(&mut self) -> Option<&mut D> {
        self.delegate.as_mut()
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Takes effect from the next event; the held set is not re-classified.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ArbiterConfig::validate`] and keeps the old
    /// configuration.
    pub fn set_config(&mut self, config: ArbiterConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether a gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// The held modifier set.
    #[inline]
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.tracker.current()
    }

    /// Type of the last motion event emitted in the current gesture.
    #[inline]
    #[must_use]
    pub fn current_type(&self) -> Option<GestureType> {
        self.current_type
    }

    #[inline]
    #[must_use]
    pub fn scroll_source(&self) -> &S {
        &self.scroll
    }

    #[inline]
    pub fn scroll_source_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    /// Apply any raw input.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Modifiers(raw) => self.on_modifier_change(raw),
            InputEvent::Scroll(scroll) => self.handle_scroll(scroll),
            InputEvent::Magnify(magnify) => self.handle_magnify(magnify),
        }
    }

    /// Apply a raw modifier flag snapshot.
    pub fn on_modifier_change(&mut self, raw: u64) {
        let transition = self.tracker.update(raw, &self.config);
        self.apply_transition(transition);
    }

    /// Apply an already-normalized modifier set.
    pub fn on_modifiers(&mut self, mods: Modifiers) {
        let transition = self.tracker.set(mods, &self.config);
        self.apply_transition(transition);
    }

    /// Apply a scroll callback.
    pub fn handle_scroll(&mut self, event: ScrollEvent) {
        if self.tracker.is_empty() {
            trace!(?event, "scroll ignored: no modifiers held");
            return;
        }
        if self.scroll.is_paused() {
            trace!(?event, "scroll ignored: listening paused");
            return;
        }
        match event {
            ScrollEvent::Began => self.begin(),
            ScrollEvent::Changed(delta) => {
                if self.tracker.holds(self.config.move_mods) {
                    self.emit(GestureEvent::Move(delta));
                } else if self.tracker.holds(self.config.resize_delta_mods) {
                    self.emit(GestureEvent::ResizeDelta(delta));
                } else {
                    trace!(modifiers = %self.tracker.current(), "scroll change unmatched");
                }
            }
            ScrollEvent::Cancelled => {}
            ScrollEvent::Ended(final_delta) => {
                if !self.tracker.holds(self.config.swipe_mods) {
                    return;
                }
                let Some(delta) = final_delta else {
                    return;
                };
                match classify(delta, self.config.swipe_threshold) {
                    Some(direction) => {
                        debug!(%direction, x = delta.x, y = delta.y, "swipe classified");
                        self.emit(GestureEvent::Swipe(direction));
                    }
                    None => {
                        trace!(x = delta.x, y = delta.y, "scroll ended below swipe threshold");
                    }
                }
            }
        }
    }

    /// Apply a magnify callback.
    pub fn handle_magnify(&mut self, event: MagnifyEvent) {
        if self.tracker.is_empty() {
            trace!(?event, "magnify ignored: no modifiers held");
            return;
        }
        match event {
            MagnifyEvent::Began => self.begin(),
            MagnifyEvent::Changed {
                magnification,
                angle,
            } => {
                if self.tracker.holds(self.config.resize_factor_mods) {
                    self.emit(GestureEvent::ResizeFactor(resize_factor(
                        magnification,
                        angle,
                    )));
                } else {
                    trace!(modifiers = %self.tracker.current(), "magnify change unmatched");
                }
            }
            MagnifyEvent::Cancelled | MagnifyEvent::Ended => {}
        }
    }

    /// Tear down: pause scroll listening and end any active gesture.
    ///
    /// Scroll input is dropped from then on until a trigger set is pressed
    /// again. Idempotent.
    pub fn shutdown(&mut self) {
        self.scroll.pause();
        self.end();
    }
}

// ---------------------------------------------------------------------------
// Internal transitions
// ---------------------------------------------------------------------------

impl<D: GestureDelegate, S: ScrollSource> GestureArbiter<D, S> {
    fn apply_transition(&mut self, transition: ModifierTransition) {
        match transition {
            ModifierTransition::Released => {
                if !self.scroll.is_paused() {
                    debug!("modifiers released, scroll listening paused");
                }
                self.scroll.pause();
                self.end();
            }
            ModifierTransition::Armed => {
                if self.config.begin_early {
                    self.begin();
                }
                if self.scroll.is_paused() {
                    debug!(modifiers = %self.tracker.current(), "scroll listening resumed");
                }
                self.scroll.resume();
            }
            ModifierTransition::Unmatched => {
                trace!(modifiers = %self.tracker.current(), "modifiers match no trigger");
            }
        }
    }

    fn begin(&mut self) {
        if self.phase.is_active() {
            return;
        }
        self.phase = GesturePhase::Began;
        self.current_type = None;
        debug!(modifiers = %self.tracker.current(), "gesture began");
        self.notify(GestureEvent::Began);
    }

    fn end(&mut self) {
        if !self.phase.is_active() {
            return;
        }
        self.phase = GesturePhase::Ended;
        self.current_type = None;
        debug!("gesture ended");
        self.notify(GestureEvent::Ended);
    }

    fn emit(&mut self, event: GestureEvent) {
        self.begin();
        self.phase = GesturePhase::Changed;
        if let Some(kind) = event.gesture_type() {
            if let Some(previous) = self.current_type
                && mem::discriminant(&previous) != mem::discriminant(&kind)
            {
                debug!(?previous, current = ?kind, "gesture type switched mid-gesture");
            }
            self.current_type = Some(kind);
        }
        self.notify(event);
    }

    fn notify(&mut self, event: GestureEvent) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.handle(event);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
