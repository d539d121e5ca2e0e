#![forbid(unsafe_code)]

//! Modifier tracking.
//!
//! [`ModifierTracker`] holds the normalized modifier set and classifies each
//! change into a [`ModifierTransition`]. It decides; the arbiter acts.
//!
//! | New set                        | Transition  |
//! |--------------------------------|-------------|
//! | empty                          | `Released`  |
//! | equal to any configured set    | `Armed`     |
//! | anything else                  | `Unmatched` |
//!
//! The platform reports modifier changes through both a global and a local
//! monitor, so the same snapshot may arrive twice. Classification depends only
//! on the new set, never on the previous one, which makes duplicates harmless.

use crate::config::ArbiterConfig;
use crate::modifiers::Modifiers;

/// What a modifier change means for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierTransition {
    /// No modifiers are held: suspend listening and end any gesture.
    Released,
    /// A configured trigger set is held: resume listening.
    Armed,
    /// Held modifiers match no trigger set: leave everything as it is.
    Unmatched,
}

/// Current modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierTracker {
    current: Modifiers,
}

impl ModifierTracker {
    /// Create a tracker with nothing held.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Modifiers::NONE,
        }
    }

    /// Record a raw flag snapshot and classify it against `config`.
    pub fn update(&mut self, raw: u64, config: &ArbiterConfig) -> ModifierTransition {
        self.set(Modifiers::from_raw(raw), config)
    }

    /// Record an already-normalized set and classify it against `config`.
    pub fn set(&mut self, mods: Modifiers, config: &ArbiterConfig) -> ModifierTransition {
        self.current = mods;
        if mods.is_empty() {
            ModifierTransition::Released
        } else if config.is_trigger(mods) {
            ModifierTransition::Armed
        } else {
            ModifierTransition::Unmatched
        }
    }

    /// The held set.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Modifiers {
        self.current
    }

    /// Whether nothing is held.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Whether the held set is exactly `set`.
    #[inline]
    #[must_use]
    pub fn holds(&self, set: Modifiers) -> bool {
        self.current == set
    }
}
