use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Semantic actions produced by every input source.
///
/// Serde serializes as `snake_case` strings so TOML bindings stay
/// readable:
/// ```toml
/// [keybindings.keys]
/// menu_toggle = ["Tab"]
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Accept / open the focused item.
    Confirm,
    /// Leave the current view.
    Back,
    /// Open or close the overlay menu.
    MenuToggle,
    /// Move up / forward.
    NavUp,
    /// Move down / backward.
    NavDown,
    /// Move left.
    NavLeft,
    /// Move right.
    NavRight,
}

impl InputAction {
    /// Movement intent `(dx, dz)` for navigation actions.
    ///
    /// Up points into the scene (−Z), matching the analog convention where
    /// pushing a stick forward reports a negative y.
    #[must_use]
    pub fn intent(self) -> Option<Vec2> {
        match self {
            Self::NavUp => Some(Vec2::new(0.0, -1.0)),
            Self::NavDown => Some(Vec2::new(0.0, 1.0)),
            Self::NavLeft => Some(Vec2::new(-1.0, 0.0)),
            Self::NavRight => Some(Vec2::new(1.0, 0.0)),
            Self::Confirm | Self::Back | Self::MenuToggle => None,
        }
    }
}

/// Which device family the user is currently driving the UI with.
/// Exposed for on-screen button hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keyboard (the startup default).
    #[default]
    Keyboard,
    /// A polled gamepad.
    Gamepad,
    /// Touch virtual stick.
    Touch,
}
