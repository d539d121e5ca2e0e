#![forbid(unsafe_code)]

//! Gesture session: an arbiter plus its monitors and input queue.
//!
//! [`GestureSession`] is the owner-side object an application keeps for its
//! lifetime. On construction it installs a global and a local modifier
//! monitor, both feeding one queue. Platform callbacks push into that queue
//! through an [`EventSink`] from whatever thread they run on; the owner calls
//! [`pump`](GestureSession::pump) on its own thread to apply them. The
//! arbiter therefore only ever has one writer and needs no lock.
//!
//! # Example
//!
//! ```
//! use modgest_core::{
//!     ArbiterConfig, EventSink, GestureEvent, GestureSession, ModifierMonitor, Modifiers,
//!     MonitorScope, ScrollEvent, ScrollGate, Subscription,
//! };
//! use modgest_core::geometry::Delta2D;
//!
//! #[derive(Default)]
//! struct Monitors(Vec<EventSink>);
//!
//! impl ModifierMonitor for Monitors {
//!     fn install(&mut self, scope: MonitorScope, sink: EventSink) -> Subscription {
//!         self.0.push(sink);
//!         Subscription::detached(scope)
//!     }
//! }
//!
//! let mut monitors = Monitors::default();
//! let mut session = GestureSession::new(
//!     ArbiterConfig::default(),
//!     ScrollGate::new(),
//!     &mut monitors,
//!     Vec::<GestureEvent>::new(),
//! )?;
//!
//! monitors.0[0].send_modifiers(Modifiers::COMMAND.to_raw())?;
//! session.sink().send(ScrollEvent::Changed(Delta2D::new(4.0, 2.0)))?;
//! session.pump();
//!
//! assert!(session.arbiter().is_active());
//! # Ok::<(), modgest_core::Error>(())
//! ```

use std::fmt;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::arbiter::GestureArbiter;
use crate::config::ArbiterConfig;
use crate::delegate::GestureDelegate;
use crate::error::Result;
use crate::source::{InputEvent, ScrollSource};
use crate::subscription::{EventSink, ModifierMonitor, MonitorScope, Subscription};

#[cfg(feature = "tracing")]
use crate::logging::{debug, debug_span};
#[cfg(not(feature = "tracing"))]
use crate::{debug, debug_span};

/// An arbiter wired to its modifier monitors.
///
/// Dropping the session (or calling [`close`](Self::close)) removes both
/// monitors and then ends any active gesture.
pub struct GestureSession<D: GestureDelegate, S: ScrollSource> {
    arbiter: GestureArbiter<D, S>,
    sink: EventSink,
    inbox: Receiver<InputEvent>,
    global: Subscription,
    local: Subscription,
}

impl<D: GestureDelegate, S: ScrollSource> fmt::Debug for GestureSession<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureSession")
            .field("arbiter", &self.arbiter)
            .field("global", &self.global)
            .field("local", &self.local)
            .finish_non_exhaustive()
    }
}

impl<D: GestureDelegate, S: ScrollSource> GestureSession<D, S> {
    /// Build the arbiter and install global and local monitors.
    ///
    /// # Errors
    ///
    /// Returns the error from [`ArbiterConfig::validate`]. No monitor is
    /// installed in that case.
    pub fn new<M: ModifierMonitor + ?Sized>(
        config: ArbiterConfig,
        scroll: S,
        monitor: &mut M,
        delegate: D,
    ) -> Result<Self> {
        let arbiter = GestureArbiter::new(config, scroll)?.with_delegate(delegate);
        let (tx, inbox) = mpsc::channel();
        let sink = EventSink::new(tx);
        let global = monitor.install(MonitorScope::Global, sink.clone());
        let local = monitor.install(MonitorScope::Local, sink.clone());
        debug!("gesture session opened");
        Ok(Self {
            arbiter,
            sink,
            inbox,
            global,
            local,
        })
    }

    /// A handle for queueing input from any thread.
    #[must_use]
    pub fn sink(&self) -> EventSink {
        self.sink.clone()
    }

    /// Apply every queued event. Returns how many were applied.
    ///
    /// Never blocks.
    pub fn pump(&mut self) -> usize {
        let _span = debug_span!("modgest.pump").entered();
        let mut applied = 0;
        loop {
            match self.inbox.try_recv() {
                Ok(event) => {
                    self.arbiter.handle_input(event);
                    applied += 1;
                }
                // The session holds a sender, so the queue never disconnects.
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Apply one event directly, ahead of anything still queued.
    pub fn dispatch(&mut self, event: impl Into<InputEvent>) {
        self.arbiter.handle_input(event.into());
    }

    #[inline]
    #[must_use]
    pub fn arbiter(&self) -> &GestureArbiter<D, S> {
        &self.arbiter
    }

    #[inline]
    pub fn arbiter_mut(&mut self) -> &mut GestureArbiter<D, S> {
        &mut self.arbiter
    }

    /// Whether both monitors are still installed.
    #[must_use]
    pub fn is_monitoring(&self) -> bool {
        self.global.is_active() && self.local.is_active()
    }

    /// Tear down now. Equivalent to dropping the session.
    pub fn close(self) {}

    fn teardown(&mut self) {
        self.global.release();
        self.local.release();
        self.arbiter.shutdown();
    }
}

impl<D: GestureDelegate, S: ScrollSource> Drop for GestureSession<D, S> {
    fn drop(&mut self) {
        self.teardown();
        debug!("gesture session closed");
    }
}
