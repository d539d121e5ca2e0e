#![forbid(unsafe_code)]

//! Arbiter configuration.
//!
//! The four trigger sets decide which gesture a held modifier combination
//! selects. Sets may overlap or be identical; the arbiter resolves overlaps
//! with a fixed checking order (move before resize-delta for scroll changes).

use crate::error::{Error, Result, TriggerRole};
use crate::modifiers::Modifiers;
use crate::swipe::DEFAULT_SWIPE_THRESHOLD;

/// Modifier that every default trigger set contains.
pub const PRIMARY_MODIFIER: Modifiers = Modifiers::COMMAND;

/// Modifier added to the primary one for resize-by-delta.
pub const SECONDARY_MODIFIER: Modifiers = Modifiers::SHIFT;

/// Trigger sets, swipe threshold, and begin policy for a [`GestureArbiter`].
///
/// [`GestureArbiter`]: crate::arbiter::GestureArbiter
#[derive(Debug, Clone, PartialEq)]
pub struct ArbiterConfig {
    /// Held set that turns scroll motion into move gestures (default: primary).
    pub move_mods: Modifiers,
    /// Held set that turns scroll motion into resize-by-delta gestures
    /// (default: primary + secondary).
    pub resize_delta_mods: Modifiers,
    /// Held set that turns magnification into resize-by-factor gestures
    /// (default: primary).
    pub resize_factor_mods: Modifiers,
    /// Held set under which a finished scroll is classified as a swipe
    /// (default: primary).
    pub swipe_mods: Modifiers,
    /// Begin the gesture as soon as a trigger set is pressed rather than on
    /// first motion (default: false).
    pub begin_early: bool,
    /// Per-axis travel a swipe must strictly exceed (default: 30.0).
    pub swipe_threshold: f64,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            move_mods: PRIMARY_MODIFIER,
            resize_delta_mods: PRIMARY_MODIFIER | SECONDARY_MODIFIER,
            resize_factor_mods: PRIMARY_MODIFIER,
            swipe_mods: PRIMARY_MODIFIER,
            begin_early: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl ArbiterConfig {
    /// Set the move trigger.
    #[must_use]
    pub fn with_move_mods(mut self, mods: Modifiers) -> Self {
        self.move_mods = mods;
        self
    }

    /// Set the resize-by-delta trigger.
    #[must_use]
    pub fn with_resize_delta_mods(mut self, mods: Modifiers) -> Self {
        self.resize_delta_mods = mods;
        self
    }

    /// Set the resize-by-factor trigger.
    #[must_use]
    pub fn with_resize_factor_mods(mut self, mods: Modifiers) -> Self {
        self.resize_factor_mods = mods;
        self
    }

    /// Set the swipe trigger.
    #[must_use]
    pub fn with_swipe_mods(mut self, mods: Modifiers) -> Self {
        self.swipe_mods = mods;
        self
    }

    /// Enable or disable beginning on trigger press.
    #[must_use]
    pub fn with_begin_early(mut self, begin_early: bool) -> Self {
        self.begin_early = begin_early;
        self
    }

    /// Set the swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// The trigger sets paired with their role, in resolution order.
    #[must_use]
    pub fn triggers(&self) -> [(TriggerRole, Modifiers); 4] {
        [
            (TriggerRole::Move, self.move_mods),
            (TriggerRole::ResizeDelta, self.resize_delta_mods),
            (TriggerRole::ResizeFactor, self.resize_factor_mods),
            (TriggerRole::Swipe, self.swipe_mods),
        ]
    }

    /// Whether `mods` equals any configured trigger set.
    #[must_use]
    pub fn is_trigger(&self, mods: Modifiers) -> bool {
        self.triggers().iter().any(|(_, set)| *set == mods)
    }

    /// Check the configuration for settings that could never work.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSwipeThreshold`] when the threshold is NaN, infinite,
    /// or negative; [`Error::EmptyTrigger`] when a trigger set is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(Error::InvalidSwipeThreshold(self.swipe_threshold));
        }
        if let Some((role, _)) = self.triggers().into_iter().find(|(_, set)| set.is_empty()) {
            return Err(Error::EmptyTrigger { role });
        }
        Ok(())
    }
}
