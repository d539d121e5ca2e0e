#![forbid(unsafe_code)]

//! Modifier key sets.
//!
//! [`Modifiers`] is the canonical, device-independent view of the modifier
//! keys a user is holding. Raw platform flag words carry device-dependent
//! bits (left vs. right Shift, and so on) in their low half; those are
//! dropped by [`Modifiers::from_raw`] so that two snapshots of "Command is
//! held" compare equal regardless of which physical key produced them.
//!
//! # Design Notes
//!
//! - Bit positions match the platform's device-independent flag layout, so
//!   normalization is a mask and a truncation.
//! - Comparison against configured trigger sets is exact set equality, never
//!   containment: holding Command+Shift does not match a `{Command}` trigger.

use std::fmt;

use bitflags::bitflags;

/// Mask selecting the device-independent half of a raw modifier flag word.
pub const DEVICE_INDEPENDENT_MASK: u64 = 0xFFFF_0000;

bitflags! {
    /// Device-independent modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// No modifiers.
        const NONE        = 0;
        /// Caps Lock is engaged.
        const CAPS_LOCK   = 1 << 16;
        /// Shift key.
        const SHIFT       = 1 << 17;
        /// Control key.
        const CONTROL     = 1 << 18;
        /// Option/Alt key.
        const OPTION      = 1 << 19;
        /// Command/Super key.
        const COMMAND     = 1 << 20;
        /// Key on the numeric keypad.
        const NUMERIC_PAD = 1 << 21;
        /// Help key.
        const HELP        = 1 << 22;
        /// Function (fn) key.
        const FUNCTION    = 1 << 23;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// Normalize a raw platform flag word into the canonical set.
    ///
    /// Device-dependent bits and unknown device-independent bits are dropped.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self::from_bits_truncate((raw & DEVICE_INDEPENDENT_MASK) as u32)
    }

    /// The raw flag word this set corresponds to.
    #[inline]
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.bits() as u64
    }
}

impl From<u64> for Modifiers {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

// Display order is stable so log lines diff cleanly.
const DISPLAY_ORDER: [(Modifiers, &str); 8] = [
    (Modifiers::FUNCTION, "fn"),
    (Modifiers::CONTROL, "ctrl"),
    (Modifiers::OPTION, "opt"),
    (Modifiers::SHIFT, "shift"),
    (Modifiers::COMMAND, "cmd"),
    (Modifiers::CAPS_LOCK, "caps"),
    (Modifiers::NUMERIC_PAD, "numpad"),
    (Modifiers::HELP, "help"),
];

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in DISPLAY_ORDER {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
