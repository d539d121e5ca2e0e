#![forbid(unsafe_code)]

//! Scoped modifier-monitor registrations.
//!
//! A platform modifier monitor hands back a [`Subscription`] when installed.
//! The subscription owns the code that removes the monitor and runs it
//! exactly once: on [`release`](Subscription::release) or on drop, whichever
//! comes first. Unwinding drops it too, so a monitor can never outlive its
//! owner.

use std::fmt;

use crate::source::InputEvent;

#[cfg(feature = "tracing")]
use crate::logging::{debug, warn};
#[cfg(not(feature = "tracing"))]
use crate::{debug, warn};

/// Where a modifier monitor listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitorScope {
    /// System-wide, while another application has focus.
    Global,
    /// Inside the owning application.
    Local,
}

/// Sending half of a session's input queue.
///
/// Cheap to clone and `Send`, so platform callbacks on any thread can feed
/// the arbiter. Events are applied in send order when the owner pumps.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: std::sync::mpsc::Sender<InputEvent>,
}

impl EventSink {
    pub(crate) fn new(tx: std::sync::mpsc::Sender<InputEvent>) -> Self {
        Self { tx }
    }

    /// Queue one event.
    ///
    /// # Errors
    ///
    /// [`Error::SessionClosed`](crate::Error::SessionClosed) when the owning
    /// session has been dropped.
    pub fn send(&self, event: impl Into<InputEvent>) -> crate::Result<()> {
        self.tx.send(event.into()).map_err(|_| {
            warn!("input dropped: gesture session closed");
            crate::Error::SessionClosed
        })
    }

    /// Queue a raw modifier flag snapshot.
    ///
    /// # Errors
    ///
    /// As for [`send`](Self::send).
    pub fn send_modifiers(&self, raw: u64) -> crate::Result<()> {
        self.send(InputEvent::Modifiers(raw))
    }
}

/// Installs modifier-change monitors.
///
/// Implementations register a platform observer that forwards every modifier
/// change, as a raw flag word, to `sink`. The returned subscription must undo
/// the registration when released.
pub trait ModifierMonitor {
    fn install(&mut self, scope: MonitorScope, sink: EventSink) -> Subscription;
}

type Release = Box<dyn FnOnce() + Send>;

/// Handle for one installed monitor.
pub struct Subscription {
    scope: MonitorScope,
    release: Option<Release>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("scope", &self.scope)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    /// Wrap the teardown for a monitor installed in `scope`.
    pub fn new(scope: MonitorScope, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            scope,
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to tear down.
    #[must_use]
    pub fn detached(scope: MonitorScope) -> Self {
        Self {
            scope,
            release: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn scope(&self) -> MonitorScope {
        self.scope
    }

    /// Whether the monitor is still installed.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Remove the monitor. Later calls do nothing.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            debug!(scope = ?self.scope, "modifier monitor released");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
