use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, follow and focus parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye offset from the avatar while following.
    #[schemars(skip)]
    pub follow_offset: [f32; 3],
    /// Fraction of the remaining distance covered per frame while
    /// following.
    #[schemars(title = "Follow Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub follow_blend: f32,
    /// How far the look-at point leans toward the next node mid-hop.
    #[schemars(title = "Look Ahead", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub look_ahead: f32,
    /// Eye offset from the focused node.
    #[schemars(skip)]
    pub focus_offset: [f32; 3],
    /// Focus progress added per tick.
    #[schemars(title = "Focus Speed", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub focus_rate: f32,
    /// Curve applied to focus progress.
    #[schemars(skip)]
    pub focus_easing: EasingFunction,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 500.0,
            follow_offset: [0.0, 6.0, 10.0],
            follow_blend: 0.08,
            look_ahead: 0.3,
            focus_offset: [0.0, 1.5, 4.0],
            focus_rate: 0.02,
            focus_easing: EasingFunction::CubicInOut,
        }
    }
}
