use glam::Vec2;

/// On-screen joystick driven by a single touch drag.
///
/// The stick centre is wherever the finger first landed; dragging
/// `radius` pixels away gives a full-magnitude vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualStick {
    id: u64,
    origin: Vec2,
    current: Vec2,
    radius: f32,
}

impl VirtualStick {
    /// Start a stick at the touch-down point.
    #[must_use]
    pub fn new(id: u64, origin: Vec2, radius: f32) -> Self {
        Self {
            id,
            origin,
            current: origin,
            radius: radius.max(1.0),
        }
    }

    /// Touch id driving this stick.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Move the finger.
    pub fn drag_to(&mut self, position: Vec2) {
        self.current = position;
    }

    /// Deflection in `[-1, 1]²`, clamped to the unit circle. Screen +y is
    /// down, which already matches the axis convention.
    #[must_use]
    pub fn vector(&self) -> Vec2 {
        ((self.current - self.origin) / self.radius).clamp_length_max(1.0)
    }
}
