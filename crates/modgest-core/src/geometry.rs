#![forbid(unsafe_code)]

//! Geometric primitives.

use std::ops::Neg;

/// A signed 2D motion vector.
///
/// Scroll deltas are accumulated since the gesture began; resize factors are
/// derived from magnification and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta2D {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Delta2D {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new delta.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a vector of length `magnitude` pointing along `angle` (radians).
    #[inline]
    #[must_use]
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    /// Per-axis sign, counting only components whose magnitude strictly
    /// exceeds `threshold`.
    ///
    /// Each component of the result is `-1`, `0`, or `1`. NaN components
    /// never exceed the threshold and yield `0`.
    #[must_use]
    pub fn signs_beyond(self, threshold: f64) -> (i8, i8) {
        (axis_sign(self.x, threshold), axis_sign(self.y, threshold))
    }
}

fn axis_sign(value: f64, threshold: f64) -> i8 {
    if value.abs() > threshold {
        if value.is_sign_negative() { -1 } else { 1 }
    } else {
        0
    }
}

impl From<(f64, f64)> for Delta2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Neg for Delta2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn zero_is_default() {
        assert_eq!(Delta2D::default(), Delta2D::ZERO);
    }

    #[test]
    fn from_tuple() {
        let d: Delta2D = (3.0, -4.0).into();
        assert_eq!(d, Delta2D::new(3.0, -4.0));
    }

    #[test]
    fn negation() {
        assert_eq!(-Delta2D::new(1.0, 2.0), Delta2D::new(-1.0, -2.0));
    }

    #[test]
    fn from_polar_axes() {
        let east = Delta2D::from_polar(2.0, 0.0);
        assert!((east.x - 2.0).abs() < EPS);
        assert!(east.y.abs() < EPS);

        let north = Delta2D::from_polar(1.0, std::f64::consts::FRAC_PI_2);
        assert!(north.x.abs() < EPS);
        assert!((north.y - 1.0).abs() < EPS);
    }

    #[test]
    fn signs_beyond_is_strict() {
        assert_eq!(Delta2D::new(30.0, -30.0).signs_beyond(30.0), (0, 0));
        assert_eq!(Delta2D::new(30.5, -30.5).signs_beyond(30.0), (1, -1));
        assert_eq!(Delta2D::new(-31.0, 2.0).signs_beyond(30.0), (-1, 0));
    }

    #[test]
    fn signs_beyond_nan_is_zero() {
        assert_eq!(Delta2D::new(f64::NAN, 50.0).signs_beyond(30.0), (0, 1));
    }
}
