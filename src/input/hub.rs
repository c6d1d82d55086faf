//! Merges keyboard, touch and a polled gamepad into one action stream.
//!
//! The `InputHub` owns all transient input state (held keys, previous
//! gamepad sample, active touch stick) and is the single writer of the
//! shared [`AxisState`] cell. It sits between raw platform events and
//! everything that consumes [`InputAction`]s.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::action::{InputAction, InputMode};
use super::axis::{apply_deadzone, AxisReader, AxisState};
use super::event::InputEvent;
use super::gamepad::{ButtonTracker, GamepadSource};
use super::touch::VirtualStick;
use crate::options::{InputOptions, KeybindingOptions};
use crate::util::listeners::{ListenerToken, Listeners};

/// Unified input front-end.
///
/// # Usage
///
/// ```ignore
/// let token = hub.subscribe(|action| log::info!("{action:?}"));
/// // In the event loop:
/// hub.handle_event(&event);
/// // Once per frame, without skipping frames:
/// hub.poll();
/// ```
pub struct InputHub {
    bindings: KeybindingOptions,
    deadzone: f32,
    touch_radius: f32,
    gamepad: Box<dyn GamepadSource>,
    gamepad_connected: bool,
    buttons: ButtonTracker,
    held_keys: FxHashSet<String>,
    touch: Option<VirtualStick>,
    axes: Rc<Cell<AxisState>>,
    mode: InputMode,
    listeners: Listeners<InputAction>,
}

impl InputHub {
    /// Create a hub polling `gamepad` every frame.
    #[must_use]
    pub fn new(
        options: &InputOptions,
        bindings: KeybindingOptions,
        gamepad: Box<dyn GamepadSource>,
    ) -> Self {
        Self {
            bindings,
            deadzone: options.deadzone,
            touch_radius: options.touch_stick_radius,
            gamepad,
            gamepad_connected: false,
            buttons: ButtonTracker::default(),
            held_keys: FxHashSet::default(),
            touch: None,
            axes: Rc::new(Cell::new(AxisState::default())),
            mode: InputMode::default(),
            listeners: Listeners::new(),
        }
    }

    /// Register an action listener. Every emitted action reaches every
    /// listener registered at that moment.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&InputAction) + 'static,
    ) -> ListenerToken {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns `false` for an unknown token.
    pub fn unsubscribe(&mut self, token: ListenerToken) -> bool {
        self.listeners.unsubscribe(token)
    }

    /// Read-only handle to the latest axis values.
    #[must_use]
    pub fn axes(&self) -> AxisReader {
        AxisReader::new(Rc::clone(&self.axes))
    }

    /// Device family used most recently.
    #[must_use]
    pub fn active_mode(&self) -> InputMode {
        self.mode
    }

    /// Whether the last poll got a gamepad sample.
    #[must_use]
    pub fn gamepad_connected(&self) -> bool {
        self.gamepad_connected
    }

    /// Read-only access to the bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Apply new deadzone and touch-stick parameters. An active touch
    /// keeps its radius until released.
    pub fn set_options(&mut self, options: &InputOptions) {
        self.deadzone = options.deadzone;
        self.touch_radius = options.touch_stick_radius;
    }

    /// Replace the bindings (e.g. after loading a preset).
    pub fn set_bindings(&mut self, bindings: KeybindingOptions) {
        self.bindings = bindings;
    }

    /// Process a discrete platform event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { code, pressed } => self.handle_key(code, *pressed),
            InputEvent::TouchStart { id, x, y } => {
                if self.touch.is_none() {
                    self.touch = Some(VirtualStick::new(
                        *id,
                        Vec2::new(*x, *y),
                        self.touch_radius,
                    ));
                    self.set_mode(InputMode::Touch);
                }
            }
            InputEvent::TouchMove { id, x, y } => {
                if let Some(stick) = self.touch.as_mut().filter(|s| s.id() == *id) {
                    stick.drag_to(Vec2::new(*x, *y));
                }
            }
            InputEvent::TouchEnd { id } => {
                if self.touch.is_some_and(|s| s.id() == *id) {
                    self.touch = None;
                }
            }
            InputEvent::FocusLost => {
                self.held_keys.clear();
                self.touch = None;
            }
        }
    }

    /// Key-down fires once; OS auto-repeat is swallowed until the key is
    /// released.
    fn handle_key(&mut self, code: &str, pressed: bool) {
        if !pressed {
            let _ = self.held_keys.remove(code);
            return;
        }
        if !self.held_keys.insert(code.to_owned()) {
            return;
        }
        self.set_mode(InputMode::Keyboard);
        if let Some(action) = self.bindings.lookup(code) {
            self.listeners.emit(&action);
        }
    }

    /// Per-frame tick: sample the gamepad, fire button edges, and
    /// overwrite the axis cell. Must run every frame.
    pub fn poll(&mut self) {
        let sample = self.gamepad.poll();
        if sample.is_some() != self.gamepad_connected {
            self.gamepad_connected = sample.is_some();
            if self.gamepad_connected {
                log::info!("gamepad connected");
            } else {
                log::info!("gamepad unavailable, keyboard only");
            }
        }

        let (mut left, right) = match sample {
            Some(snapshot) => {
                let left = apply_deadzone(snapshot.left_stick, self.deadzone);
                let right = apply_deadzone(snapshot.right_stick, self.deadzone);
                if !snapshot.buttons.is_empty()
                    || left != Vec2::ZERO
                    || right != Vec2::ZERO
                {
                    self.set_mode(InputMode::Gamepad);
                }
                let pressed = self.buttons.update(snapshot.buttons);
                for button in pressed.iter() {
                    if let Some(action) = self.bindings.button_action(button) {
                        self.listeners.emit(&action);
                    }
                }
                (left, right)
            }
            None => {
                self.buttons.reset();
                (Vec2::ZERO, Vec2::ZERO)
            }
        };

        if left == Vec2::ZERO {
            if let Some(stick) = &self.touch {
                left = apply_deadzone(stick.vector(), self.deadzone);
            }
        }

        self.axes.set(AxisState { left, right });
    }

    fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            log::debug!("input mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::input::{ButtonSet, GamepadButton, GamepadSnapshot, NullGamepad};

    /// Gamepad replaying a fixed script; `None` entries simulate a
    /// disconnected pad.
    struct ScriptedPad(Rc<RefCell<VecDeque<Option<GamepadSnapshot>>>>);

    impl GamepadSource for ScriptedPad {
        fn poll(&mut self) -> Option<GamepadSnapshot> {
            self.0.borrow_mut().pop_front().flatten()
        }
    }

    fn hub_with_pad(
        script: Vec<Option<GamepadSnapshot>>,
    ) -> (InputHub, Rc<RefCell<Vec<InputAction>>>) {
        let pad = ScriptedPad(Rc::new(RefCell::new(script.into())));
        let mut hub = InputHub::new(
            &InputOptions::default(),
            KeybindingOptions::default(),
            Box::new(pad),
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _ = hub.subscribe(move |a| sink.borrow_mut().push(*a));
        (hub, seen)
    }

    fn pressing(buttons: &[GamepadButton]) -> Option<GamepadSnapshot> {
        Some(GamepadSnapshot {
            buttons: ButtonSet::from_buttons(buttons),
            ..GamepadSnapshot::default()
        })
    }

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    #[test]
    fn held_button_emits_exactly_once() {
        let n = 30;
        let (mut hub, seen) =
            hub_with_pad(vec![pressing(&[GamepadButton::South]); n]);
        for _ in 0..n {
            hub.poll();
        }
        assert_eq!(*seen.borrow(), [InputAction::Confirm]);
        assert_eq!(hub.active_mode(), InputMode::Gamepad);
    }

    #[test]
    fn release_and_repress_emits_again() {
        let (mut hub, seen) = hub_with_pad(vec![
            pressing(&[GamepadButton::DPadRight]),
            pressing(&[GamepadButton::DPadRight]),
            pressing(&[]),
            pressing(&[GamepadButton::DPadRight]),
        ]);
        for _ in 0..4 {
            hub.poll();
        }
        assert_eq!(*seen.borrow(), [InputAction::NavRight, InputAction::NavRight]);
    }

    #[test]
    fn key_repeat_is_swallowed_until_release() {
        let (mut hub, seen) = hub_with_pad(vec![]);
        hub.handle_event(&key("ArrowUp", true));
        hub.handle_event(&key("ArrowUp", true));
        hub.handle_event(&key("ArrowUp", true));
        hub.handle_event(&key("ArrowUp", false));
        hub.handle_event(&key("KeyW", true));
        hub.handle_event(&key("KeyQ", true));
        assert_eq!(*seen.borrow(), [InputAction::NavUp, InputAction::NavUp]);
        assert_eq!(hub.active_mode(), InputMode::Keyboard);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let (mut hub, seen) = hub_with_pad(vec![]);
        hub.handle_event(&key("Enter", true));
        hub.handle_event(&InputEvent::FocusLost);
        hub.handle_event(&key("Enter", true));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn every_listener_gets_every_action_until_unsubscribed() {
        let mut hub = InputHub::new(
            &InputOptions::default(),
            KeybindingOptions::default(),
            Box::new(NullGamepad),
        );
        let a = Rc::new(RefCell::new(0));
        let b = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&a);
        let token_a = hub.subscribe(move |_| *sink.borrow_mut() += 1);
        let sink = Rc::clone(&b);
        let _token_b = hub.subscribe(move |_| *sink.borrow_mut() += 1);

        hub.handle_event(&key("Escape", true));
        assert!(hub.unsubscribe(token_a));
        hub.handle_event(&key("Tab", true));

        assert_eq!(*a.borrow(), 1);
        assert_eq!(*b.borrow(), 2);
    }

    #[test]
    fn deadzone_zeroes_small_stick_values() {
        let (mut hub, _) = hub_with_pad(vec![Some(GamepadSnapshot {
            left_stick: Vec2::new(0.05, 0.6),
            right_stick: Vec2::new(-0.11, 0.0),
            ..GamepadSnapshot::default()
        })]);
        let axes = hub.axes();
        hub.poll();
        let state = axes.get();
        assert_eq!(state.left.x, 0.0);
        assert_eq!(state.left.y, 0.6);
        assert_eq!(state.right, Vec2::ZERO);
    }

    #[test]
    fn axis_noise_alone_does_not_switch_mode() {
        let (mut hub, _) = hub_with_pad(vec![Some(GamepadSnapshot {
            left_stick: Vec2::new(0.05, -0.05),
            ..GamepadSnapshot::default()
        })]);
        hub.poll();
        assert_eq!(hub.active_mode(), InputMode::Keyboard);
        assert!(hub.gamepad_connected());
    }

    #[test]
    fn missing_gamepad_holds_axes_at_zero() {
        let (mut hub, seen) = hub_with_pad(vec![
            Some(GamepadSnapshot {
                left_stick: Vec2::new(0.9, 0.0),
                ..GamepadSnapshot::default()
            }),
            None,
        ]);
        let axes = hub.axes();
        hub.poll();
        assert_eq!(axes.get().left, Vec2::new(0.9, 0.0));
        hub.poll();
        assert_eq!(axes.get(), AxisState::default());
        assert!(!hub.gamepad_connected());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn reconnect_with_button_held_fires_once() {
        let (mut hub, seen) = hub_with_pad(vec![
            pressing(&[GamepadButton::East]),
            None,
            pressing(&[GamepadButton::East]),
            pressing(&[GamepadButton::East]),
        ]);
        for _ in 0..4 {
            hub.poll();
        }
        assert_eq!(*seen.borrow(), [InputAction::Back, InputAction::Back]);
    }

    #[test]
    fn touch_drag_drives_left_axis() {
        let (mut hub, _) = hub_with_pad(vec![]);
        let axes = hub.axes();
        hub.handle_event(&InputEvent::TouchStart {
            id: 4,
            x: 200.0,
            y: 300.0,
        });
        hub.handle_event(&InputEvent::TouchMove {
            id: 4,
            x: 260.0,
            y: 300.0,
        });
        hub.poll();
        assert_eq!(axes.get().left, Vec2::new(1.0, 0.0));
        assert_eq!(hub.active_mode(), InputMode::Touch);

        // A second finger does not steal the stick.
        hub.handle_event(&InputEvent::TouchMove {
            id: 9,
            x: 0.0,
            y: 0.0,
        });
        hub.poll();
        assert_eq!(axes.get().left, Vec2::new(1.0, 0.0));

        hub.handle_event(&InputEvent::TouchEnd { id: 4 });
        hub.poll();
        assert_eq!(axes.get().left, Vec2::ZERO);
    }

    #[test]
    fn key_press_switches_back_to_keyboard_mode() {
        let (mut hub, _) = hub_with_pad(vec![pressing(&[GamepadButton::North])]);
        hub.poll();
        assert_eq!(hub.active_mode(), InputMode::Gamepad);
        hub.handle_event(&key("KeyZ", true));
        assert_eq!(hub.active_mode(), InputMode::Keyboard);
    }
}
