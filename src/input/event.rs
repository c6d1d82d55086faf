/// Platform-agnostic discrete input events.
///
/// These are fed into an [`InputHub`](super::InputHub), which maps them to
/// [`InputAction`](super::InputAction)s and touch-stick state. Gamepads are
/// not event-driven; the hub polls them.
///
/// # Example
///
/// ```ignore
/// hub.handle_event(&InputEvent::Key { code: "ArrowUp".into(), pressed: true });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key changed state.
    Key {
        /// Key code string (winit `KeyCode` debug format, e.g. `"KeyW"`).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Finger touched the screen.
    TouchStart {
        /// Touch id.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Finger moved.
    TouchMove {
        /// Touch id.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Finger lifted or the touch was cancelled.
    TouchEnd {
        /// Touch id.
        id: u64,
    },
    /// Window lost focus; held keys will not report their release.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event. Auto-repeat presses are passed
    /// through; the hub ignores presses of keys it already considers held.
    #[must_use]
    pub fn from_winit_key(event: &winit::event::KeyEvent) -> Option<Self> {
        use winit::keyboard::PhysicalKey;
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        Some(Self::Key {
            code: format!("{code:?}"),
            pressed: event.state == winit::event::ElementState::Pressed,
        })
    }

    /// Convert a winit touch event.
    #[must_use]
    pub fn from_winit_touch(touch: &winit::event::Touch) -> Self {
        use winit::event::TouchPhase;
        let (x, y) = (touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            TouchPhase::Started => Self::TouchStart { id: touch.id, x, y },
            TouchPhase::Moved => Self::TouchMove { id: touch.id, x, y },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                Self::TouchEnd { id: touch.id }
            }
        }
    }
}
