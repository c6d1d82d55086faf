use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of the simulated loading sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PseudoAsset {
    /// Label shown next to the progress bar.
    pub name: String,
    /// Share of the total percentage this entry accounts for.
    pub weight: f32,
    /// Simulated time the entry takes, in milliseconds.
    pub delay_ms: u64,
}

impl PseudoAsset {
    fn new(name: &str, weight: f32, delay_ms: u64) -> Self {
        Self {
            name: name.to_owned(),
            weight,
            delay_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Loading", inline)]
#[serde(default)]
/// Simulated load-progress parameters, used until the asset loader reports.
pub struct LoadingOptions {
    /// Weighted pseudo-assets, completed in order.
    pub assets: Vec<PseudoAsset>,
    /// Maximum relative deviation applied to each delay (0.25 = ±25%).
    #[schemars(range(min = 0.0, max = 0.9))]
    pub jitter: f32,
    /// Seed for the delay jitter.
    pub seed: u64,
}

impl Default for LoadingOptions {
    fn default() -> Self {
        Self {
            assets: vec![
                PseudoAsset::new("scene geometry", 40.0, 900),
                PseudoAsset::new("textures", 25.0, 700),
                PseudoAsset::new("shaders", 15.0, 400),
                PseudoAsset::new("fonts", 10.0, 250),
                PseudoAsset::new("audio", 10.0, 300),
            ],
            jitter: 0.25,
            seed: 7,
        }
    }
}
