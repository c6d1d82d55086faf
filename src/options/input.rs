use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Analog and touch input parameters.
pub struct InputOptions {
    /// Axis values with a smaller magnitude are clamped to exactly zero.
    #[schemars(title = "Stick Deadzone", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub deadzone: f32,
    /// Drag distance (physical pixels) that maps to a full touch-stick
    /// deflection.
    #[schemars(title = "Touch Stick Radius", range(min = 20.0, max = 200.0), extend("step" = 5.0))]
    pub touch_stick_radius: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            deadzone: 0.12,
            touch_stick_radius: 60.0,
        }
    }
}
