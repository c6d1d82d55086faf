//! Centralized navigation options with TOML preset support.
//!
//! All tweakable settings (input, avatar traversal, camera, transitions,
//! loading simulation, overlay sequencing, keybindings) are consolidated
//! here. Options serialize to/from TOML for presets stored in
//! `assets/presets/`.

mod avatar;
mod camera;
mod input;
mod keybindings;
mod loading;
mod overlay;
mod transition;

use std::path::Path;

pub use avatar::AvatarOptions;
pub use camera::CameraOptions;
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use loading::{LoadingOptions, PseudoAsset};
pub use overlay::OverlayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::WayfarerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Deadzone and touch parameters.
    pub input: InputOptions,
    /// Avatar traversal parameters.
    pub avatar: AvatarOptions,
    /// Camera projection, follow and focus parameters.
    pub camera: CameraOptions,
    /// Cross-view transition timing.
    pub transition: TransitionOptions,
    /// Simulated loading sequence.
    pub loading: LoadingOptions,
    /// Detail overlay reveal sequencing.
    pub overlay: OverlayOptions,
    /// Keyboard and gamepad bindings.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, WayfarerError> {
        let content = std::fs::read_to_string(path).map_err(WayfarerError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// Floats that are NaN, infinite or outside the `f32` range are
    /// rejected, naming the offending key.
    pub fn from_toml(content: &str) -> Result<Self, WayfarerError> {
        let table: toml::Table = content
            .parse()
            .map_err(|e: toml::de::Error| WayfarerError::OptionsParse(e.to_string()))?;
        for (key, value) in &table {
            check_finite(key, value)?;
        }
        toml::from_str(content)
            .map_err(|e| WayfarerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), WayfarerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WayfarerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WayfarerError::Io)?;
        }
        std::fs::write(path, content).map_err(WayfarerError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

fn check_finite(key: &str, value: &toml::Value) -> Result<(), WayfarerError> {
    match value {
        toml::Value::Float(f) if !(f.is_finite() && f.abs() <= f64::from(f32::MAX)) => Err(
            WayfarerError::OptionsParse(format!("{key}: {f} is not a usable number")),
        ),
        toml::Value::Table(table) => table
            .iter()
            .try_for_each(|(k, v)| check_finite(&format!("{key}.{k}"), v)),
        toml::Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, v)| check_finite(&format!("{key}[{i}]"), v)),
        _ => Ok(()),
    }
}
