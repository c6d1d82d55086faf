//! Easing functions for camera and transition interpolation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out (slow start, fast middle, slow end).
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_shape() {
        let f = EasingFunction::CubicInOut;
        assert_eq!(f.evaluate(0.0), 0.0);
        assert!((f.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((f.evaluate(1.0) - 1.0).abs() < 1e-6);
        // Slow start, slow finish.
        assert!(f.evaluate(0.1) < 0.1);
        assert!(f.evaluate(0.9) > 0.9);
        // Symmetric around the midpoint.
        assert!((f.evaluate(0.25) + f.evaluate(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        for f in [
            EasingFunction::Linear,
            EasingFunction::QuadraticOut,
            EasingFunction::CubicInOut,
        ] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = f.evaluate(i as f32 / 100.0);
                assert!(v >= prev, "{f:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_input_clamping() {
        let f = EasingFunction::CubicInOut;
        assert_eq!(f.evaluate(-0.5), 0.0);
        assert!((f.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }
}
