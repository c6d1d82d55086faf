use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Avatar", inline)]
#[serde(default)]
/// Avatar traversal parameters.
pub struct AvatarOptions {
    /// Edge progress added per tick (0.025 = 40 ticks per hop).
    #[schemars(title = "Hop Speed", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub edge_step: f32,
    /// Height of the arc control point above the edge midpoint.
    #[schemars(title = "Hop Height", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub hop_height: f32,
    /// Minimum alignment score (dot product) for a directional move.
    #[schemars(skip)]
    pub min_alignment: f32,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            edge_step: 0.025,
            hop_height: 1.2,
            min_alignment: 0.3,
        }
    }
}
