//! Input handling: semantic actions, analog axes, gamepad polling, touch
//! sticks, and the hub that merges them.

/// Semantic actions and input modes.
pub mod action;
/// Analog axis state and deadzone filtering.
pub mod axis;
/// Platform-agnostic discrete events.
pub mod event;
/// Gamepad polling interface and edge detection.
pub mod gamepad;
/// The input hub.
pub mod hub;
/// Touch virtual stick.
pub mod touch;

pub use action::{InputAction, InputMode};
pub use axis::{apply_deadzone, AxisReader, AxisState};
pub use event::InputEvent;
pub use gamepad::{
    ButtonSet, ButtonTracker, GamepadButton, GamepadSnapshot, GamepadSource,
    NullGamepad,
};
pub use hub::InputHub;
pub use touch::VirtualStick;
