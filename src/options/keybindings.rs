use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::{GamepadButton, InputAction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard and gamepad bindings.
///
/// ```toml
/// [keybindings.keys]
/// confirm = ["Enter", "Space"]
/// nav_up = ["ArrowUp", "KeyW"]
///
/// [keybindings.buttons]
/// south = "confirm"
/// ```
pub struct KeybindingOptions {
    /// Maps action → key strings (winit `KeyCode` debug names).
    pub keys: BTreeMap<InputAction, Vec<String>>,
    /// Maps gamepad button → action.
    pub buttons: BTreeMap<GamepadButton, InputAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let keys = BTreeMap::from([
            (InputAction::Confirm, keys(&["Enter", "Space", "NumpadEnter"])),
            (InputAction::Back, keys(&["Escape", "Backspace"])),
            (InputAction::MenuToggle, keys(&["Tab", "KeyM"])),
            (InputAction::NavUp, keys(&["ArrowUp", "KeyW"])),
            (InputAction::NavDown, keys(&["ArrowDown", "KeyS"])),
            (InputAction::NavLeft, keys(&["ArrowLeft", "KeyA"])),
            (InputAction::NavRight, keys(&["ArrowRight", "KeyD"])),
        ]);
        let buttons = BTreeMap::from([
            (GamepadButton::South, InputAction::Confirm),
            (GamepadButton::East, InputAction::Back),
            (GamepadButton::Start, InputAction::MenuToggle),
            (GamepadButton::Select, InputAction::MenuToggle),
            (GamepadButton::DPadUp, InputAction::NavUp),
            (GamepadButton::DPadDown, InputAction::NavDown),
            (GamepadButton::DPadLeft, InputAction::NavLeft),
            (GamepadButton::DPadRight, InputAction::NavRight),
        ]);
        Self { keys, buttons }
    }
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|&k| k.to_owned()).collect()
}

impl KeybindingOptions {
    /// Look up the action bound to a key string. When a key is bound to
    /// several actions the first in declaration order wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<InputAction> {
        self.keys
            .iter()
            .find(|(_, bound)| bound.iter().any(|k| k == key))
            .map(|(action, _)| *action)
    }

    /// Look up the action bound to a gamepad button.
    #[must_use]
    pub fn button_action(&self, button: GamepadButton) -> Option<InputAction> {
        self.buttons.get(&button).copied()
    }
}
