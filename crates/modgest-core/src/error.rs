#![forbid(unsafe_code)]

//! Error types.
//!
//! Event handling never fails. Errors come only from configuration
//! validation and from feeding a session that no longer exists.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which configured modifier set an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerRole {
    Move,
    ResizeDelta,
    ResizeFactor,
    Swipe,
}

impl fmt::Display for TriggerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Move => "move",
            Self::ResizeDelta => "resize-delta",
            Self::ResizeFactor => "resize-factor",
            Self::Swipe => "swipe",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("swipe threshold must be finite and non-negative, got {0}")]
    InvalidSwipeThreshold(f64),

    #[error("{role} modifier set is empty and can never trigger a gesture")]
    EmptyTrigger { role: TriggerRole },

    #[error("gesture session has been closed")]
    SessionClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidSwipeThreshold(-1.0).to_string(),
            "swipe threshold must be finite and non-negative, got -1"
        );
        assert_eq!(
            Error::EmptyTrigger {
                role: TriggerRole::ResizeFactor
            }
            .to_string(),
            "resize-factor modifier set is empty and can never trigger a gesture"
        );
        assert_eq!(
            Error::SessionClosed.to_string(),
            "gesture session has been closed"
        );
    }
}
