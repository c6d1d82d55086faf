use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Detail Overlay", inline)]
#[serde(default)]
/// Reveal sequencing of the project-detail overlay, in milliseconds after
/// mount.
pub struct OverlayOptions {
    /// Backdrop fade-in start.
    pub backdrop_ms: u64,
    /// Panel slide-in start.
    pub panel_ms: u64,
    /// Content reveal; the destination scene counts as ready here.
    pub content_ms: u64,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            backdrop_ms: 0,
            panel_ms: 150,
            content_ms: 350,
        }
    }
}
