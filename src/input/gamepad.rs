//! Polled gamepad abstraction and per-frame button edge detection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-layout gamepad button.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GamepadButton {
    /// A / Cross.
    South,
    /// B / Circle.
    East,
    /// X / Square.
    West,
    /// Y / Triangle.
    North,
    /// Left shoulder.
    LeftBumper,
    /// Right shoulder.
    RightBumper,
    /// Back / View / Share.
    Select,
    /// Start / Menu / Options.
    Start,
    /// D-pad up.
    DPadUp,
    /// D-pad down.
    DPadDown,
    /// D-pad left.
    DPadLeft,
    /// D-pad right.
    DPadRight,
}

impl GamepadButton {
    /// Every button, in edge-dispatch order.
    pub const ALL: [Self; 12] = [
        Self::South,
        Self::East,
        Self::West,
        Self::North,
        Self::LeftBumper,
        Self::RightBumper,
        Self::Select,
        Self::Start,
        Self::DPadUp,
        Self::DPadDown,
        Self::DPadLeft,
        Self::DPadRight,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of pressed buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSet(u16);

impl ButtonSet {
    /// No buttons pressed.
    pub const EMPTY: Self = Self(0);

    /// Set containing exactly `buttons`.
    #[must_use]
    pub fn from_buttons(buttons: &[GamepadButton]) -> Self {
        let mut set = Self::EMPTY;
        for &b in buttons {
            set.insert(b);
        }
        set
    }

    /// Mark `button` as pressed.
    pub fn insert(&mut self, button: GamepadButton) {
        self.0 |= button.bit();
    }

    /// Whether `button` is pressed.
    #[must_use]
    pub fn contains(self, button: GamepadButton) -> bool {
        self.0 & button.bit() != 0
    }

    /// Whether no button is pressed.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Buttons in `self` that are not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Pressed buttons in [`GamepadButton::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = GamepadButton> {
        GamepadButton::ALL
            .into_iter()
            .filter(move |&b| self.contains(b))
    }
}

/// One frame's raw gamepad sample. Stick values are unfiltered; the hub
/// applies the deadzone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GamepadSnapshot {
    /// Buttons held this frame.
    pub buttons: ButtonSet,
    /// Left stick, +y toward the player.
    pub left_stick: Vec2,
    /// Right stick, +y toward the player.
    pub right_stick: Vec2,
}

/// Platform gamepad interface, polled once per frame.
pub trait GamepadSource {
    /// Sample the first connected pad. `None` means no pad is available
    /// (unsupported platform or disconnected).
    fn poll(&mut self) -> Option<GamepadSnapshot>;
}

/// Source for platforms without gamepad support; never yields a sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGamepad;

impl GamepadSource for NullGamepad {
    fn poll(&mut self) -> Option<GamepadSnapshot> {
        None
    }
}

/// Released → pressed edge detector.
///
/// Must see every frame's sample: skipping a poll would compare against a
/// stale previous state and either repeat or lose an edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonTracker {
    previous: ButtonSet,
}

impl ButtonTracker {
    /// Record this frame's buttons and return the ones that went down
    /// since the previous frame.
    pub fn update(&mut self, current: ButtonSet) -> ButtonSet {
        let pressed = current.difference(self.previous);
        self.previous = current;
        pressed
    }

    /// Forget the previous sample (pad lost).
    pub fn reset(&mut self) {
        self.previous = ButtonSet::EMPTY;
    }
}
