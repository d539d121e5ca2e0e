// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: modifier-gated trackpad gesture arbitration.
//!
//! # Role
//! `modgest-core` turns three raw input streams (held modifier keys, two-finger
//! scroll, and pinch magnification/rotation) into one mutually exclusive
//! stream of window-manipulation gestures: move, resize by delta, resize by
//! factor, and eight-way swipe. Which gesture a motion becomes depends only on
//! which modifier set is held, compared by exact equality against four
//! configured trigger sets.
//!
//! # Primary responsibilities
//! - **GestureArbiter**: the phase state machine and the single writer of all
//!   gesture state.
//! - **ModifierTracker**: normalizes raw modifier flags and decides when to
//!   suspend or resume recognition.
//! - **classify**: pure swipe classification over a fixed sign table.
//! - **GestureSession**: installs global and local modifier monitors, funnels
//!   every callback through one queue, and tears down deterministically.
//!
//! # How it fits in the system
//! The platform layer translates OS callbacks into [`InputEvent`]s and
//! implements [`ScrollSource`] and [`ModifierMonitor`]. The consumer (typically
//! a window-manipulation layer) implements [`GestureDelegate`]. Window geometry
//! is the consumer's business; this crate only classifies intent.
//!
//! ```
//! use modgest_core::{ArbiterConfig, GestureArbiter, GestureEvent, Modifiers, ScrollEvent, ScrollGate};
//! use modgest_core::geometry::Delta2D;
//!
//! let mut arbiter = GestureArbiter::new(ArbiterConfig::default(), ScrollGate::new())?
//!     .with_delegate(Vec::<GestureEvent>::new());
//!
//! arbiter.on_modifiers(Modifiers::COMMAND);
//! arbiter.handle_scroll(ScrollEvent::Changed(Delta2D::new(12.0, -3.0)));
//! arbiter.on_modifiers(Modifiers::NONE);
//!
//! assert_eq!(
//!     arbiter.delegate().unwrap().as_slice(),
//!     &[
//!         GestureEvent::Began,
//!         GestureEvent::Move(Delta2D::new(12.0, -3.0)),
//!         GestureEvent::Ended,
//!     ]
//! );
//! # Ok::<(), modgest_core::Error>(())
//! ```

pub mod arbiter;
pub mod config;
pub mod delegate;
pub mod error;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod modifiers;
pub mod session;
pub mod source;
pub mod subscription;
pub mod swipe;
pub mod tracker;

pub use arbiter::{GestureArbiter, resize_factor};
pub use config::{ArbiterConfig, PRIMARY_MODIFIER, SECONDARY_MODIFIER};
pub use delegate::GestureDelegate;
pub use error::{Error, Result, TriggerRole};
pub use event::{GestureEvent, GesturePhase, GestureType};
pub use modifiers::Modifiers;
pub use session::GestureSession;
pub use source::{InputEvent, MagnifyEvent, ScrollEvent, ScrollGate, ScrollSource};
pub use subscription::{EventSink, ModifierMonitor, MonitorScope, Subscription};
pub use swipe::{SwipeDirection, classify};
pub use tracker::{ModifierTracker, ModifierTransition};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
