#![forbid(unsafe_code)]

//! Swipe classification.
//!
//! [`classify`] maps the final accumulated delta of a scroll gesture to one of
//! eight compass directions, or to no swipe at all when neither axis moved
//! far enough.
//!
//! # Axis convention
//!
//! The horizontal axis is inverted relative to the scroll delta: a positive
//! `x` classifies as a *left* swipe and a negative `x` as a *right* swipe.
//! The vertical axis is not inverted: positive `y` is *top*. Consumers rely on
//! this exact mapping.
//!
//! | (sx, sy) | Result        |
//! |----------|---------------|
//! | (-1, -1) | `BottomRight` |
//! | (-1,  0) | `Right`       |
//! | (-1,  1) | `TopRight`    |
//! | ( 0, -1) | `Bottom`      |
//! | ( 0,  0) | none          |
//! | ( 0,  1) | `Top`         |
//! | ( 1, -1) | `BottomLeft`  |
//! | ( 1,  0) | `Left`        |
//! | ( 1,  1) | `TopLeft`     |
//!
//! ```
//! use modgest_core::geometry::Delta2D;
//! use modgest_core::swipe::{classify, SwipeDirection};
//!
//! assert_eq!(classify(Delta2D::new(-40.0, 0.0), 30.0), Some(SwipeDirection::Right));
//! assert_eq!(classify(Delta2D::new(10.0, 10.0), 30.0), None);
//! ```

use std::fmt;

use crate::geometry::Delta2D;

/// Default minimum per-axis travel before an axis counts toward a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 30.0;

/// Compass direction of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl SwipeDirection {
    /// All directions, clockwise from `Top`.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// Look up the direction for a pair of axis signs.
    ///
    /// Total over all inputs: `(0, 0)` and anything outside `-1..=1` yield
    /// `None`.
    #[must_use]
    pub const fn from_signs(sx: i8, sy: i8) -> Option<Self> {
        match (sx, sy) {
            (-1, -1) => Some(Self::BottomRight),
            (-1, 0) => Some(Self::Right),
            (-1, 1) => Some(Self::TopRight),
            (0, -1) => Some(Self::Bottom),
            (0, 1) => Some(Self::Top),
            (1, -1) => Some(Self::BottomLeft),
            (1, 0) => Some(Self::Left),
            (1, 1) => Some(Self::TopLeft),
            _ => None,
        }
    }

    /// The axis signs that classify as this direction.
    #[must_use]
    pub const fn signs(self) -> (i8, i8) {
        match self {
            Self::BottomRight => (-1, -1),
            Self::Right => (-1, 0),
            Self::TopRight => (-1, 1),
            Self::Bottom => (0, -1),
            Self::Top => (0, 1),
            Self::BottomLeft => (1, -1),
            Self::Left => (1, 0),
            Self::TopLeft => (1, 1),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::TopRight => Self::BottomLeft,
            Self::Right => Self::Left,
            Self::BottomRight => Self::TopLeft,
            Self::Bottom => Self::Top,
            Self::BottomLeft => Self::TopRight,
            Self::Left => Self::Right,
            Self::TopLeft => Self::BottomRight,
        }
    }

    /// Returns true for the four corner directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::TopRight | Self::BottomRight | Self::BottomLeft | Self::TopLeft
        )
    }

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Right => "right",
            Self::BottomRight => "bottom-right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::Left => "left",
            Self::TopLeft => "top-left",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a final scroll delta as a swipe.
///
/// An axis contributes its sign only when its magnitude is strictly greater
/// than `threshold`. Returns `None` when neither axis qualifies.
#[must_use]
pub fn classify(delta: Delta2D, threshold: f64) -> Option<SwipeDirection> {
    let (sx, sy) = delta.signs_beyond(threshold);
    SwipeDirection::from_signs(sx, sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Option<SwipeDirection> {
        classify(Delta2D::new(x, y), DEFAULT_SWIPE_THRESHOLD)
    }

    #[test]
    fn cardinal_directions() {
        assert_eq!(c(-40.0, 0.0), Some(SwipeDirection::Right));
        assert_eq!(c(40.0, 0.0), Some(SwipeDirection::Left));
        assert_eq!(c(0.0, 40.0), Some(SwipeDirection::Top));
        assert_eq!(c(0.0, -40.0), Some(SwipeDirection::Bottom));
    }

    #[test]
    fn diagonal_directions() {
        assert_eq!(c(-40.0, 40.0), Some(SwipeDirection::TopRight));
        assert_eq!(c(-40.0, -40.0), Some(SwipeDirection::BottomRight));
        assert_eq!(c(40.0, 40.0), Some(SwipeDirection::TopLeft));
        assert_eq!(c(40.0, -40.0), Some(SwipeDirection::BottomLeft));
    }

    #[test]
    fn below_threshold_is_none() {
        assert_eq!(c(10.0, 10.0), None);
        assert_eq!(c(0.0, 0.0), None);
        assert_eq!(c(-29.9, 29.9), None);
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(c(30.0, 0.0), None);
        assert_eq!(c(0.0, -30.0), None);
        assert_eq!(c(30.001, 0.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn one_axis_below_threshold_gives_cardinal() {
        // Large x with small y is a pure horizontal swipe, no tie-break needed.
        assert_eq!(c(-100.0, 29.0), Some(SwipeDirection::Right));
        assert_eq!(c(5.0, -100.0), Some(SwipeDirection::Bottom));
    }

    #[test]
    fn zero_threshold_counts_any_motion() {
        assert_eq!(
            classify(Delta2D::new(0.1, 0.0), 0.0),
            Some(SwipeDirection::Left)
        );
        assert_eq!(classify(Delta2D::new(0.0, 0.0), 0.0), None);
    }

    #[test]
    fn nan_delta_is_none() {
        assert_eq!(c(f64::NAN, f64::NAN), None);
    }

    #[test]
    fn from_signs_is_total() {
        let mut hits = 0;
        for sx in i8::MIN..=i8::MAX {
            for sy in -2i8..=2 {
                let dir = SwipeDirection::from_signs(sx, sy);
                let in_domain = (-1..=1).contains(&sx) && (-1..=1).contains(&sy);
                if !in_domain || (sx, sy) == (0, 0) {
                    assert_eq!(dir, None, "({sx}, {sy})");
                } else {
                    assert!(dir.is_some(), "({sx}, {sy})");
                    hits += 1;
                }
            }
        }
        assert_eq!(hits, 8);
    }

    #[test]
    fn signs_inverts_from_signs() {
        for dir in SwipeDirection::ALL {
            let (sx, sy) = dir.signs();
            assert_eq!(SwipeDirection::from_signs(sx, sy), Some(dir));
        }
    }

    #[test]
    fn opposite_negates_signs() {
        for dir in SwipeDirection::ALL {
            let (sx, sy) = dir.signs();
            assert_eq!(dir.opposite().signs(), (-sx, -sy));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn diagonals() {
        let diagonals = SwipeDirection::ALL
            .iter()
            .filter(|d| d.is_diagonal())
            .count();
        assert_eq!(diagonals, 4);
        assert!(!SwipeDirection::Top.is_diagonal());
        assert!(SwipeDirection::TopLeft.is_diagonal());
    }

    #[test]
    fn display_names() {
        assert_eq!(SwipeDirection::BottomRight.to_string(), "bottom-right");
        assert_eq!(SwipeDirection::Top.to_string(), "top");
    }
}
