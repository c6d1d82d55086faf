use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

/// Latest analog stick values after deadzone filtering.
///
/// Axis convention: +x is right, +y is toward the viewer (down on a
/// stick), so a vector can be used directly as an `(dx, dz)` intent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    /// Left virtual stick (movement).
    pub left: Vec2,
    /// Right virtual stick (free look).
    pub right: Vec2,
}

/// Clamp every component whose magnitude is below `threshold` to exactly
/// zero. Values at or above the threshold pass through unchanged.
#[must_use]
pub fn apply_deadzone(v: Vec2, threshold: f32) -> Vec2 {
    let filter = |c: f32| if c.abs() < threshold { 0.0 } else { c };
    Vec2::new(filter(v.x), filter(v.y))
}

/// Read-only view of the shared axis cell.
///
/// The input hub is the only writer; it overwrites the cell once per
/// poll. Readers see the latest value with no buffering.
#[derive(Debug, Clone)]
pub struct AxisReader {
    cell: Rc<Cell<AxisState>>,
}

impl AxisReader {
    pub(crate) fn new(cell: Rc<Cell<AxisState>>) -> Self {
        Self { cell }
    }

    /// Latest axis state.
    #[must_use]
    pub fn get(&self) -> AxisState {
        self.cell.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_clamp_to_exactly_zero() {
        let v = apply_deadzone(Vec2::new(0.05, -0.11), 0.12);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn components_filter_independently() {
        let v = apply_deadzone(Vec2::new(0.05, -0.8), 0.12);
        assert_eq!(v, Vec2::new(0.0, -0.8));
        let v = apply_deadzone(Vec2::new(0.12, 0.3), 0.12);
        assert_eq!(v, Vec2::new(0.12, 0.3));
    }

    #[test]
    fn reader_sees_latest_write() {
        let cell = Rc::new(Cell::new(AxisState::default()));
        let reader = AxisReader::new(Rc::clone(&cell));
        cell.set(AxisState {
            left: Vec2::X,
            right: Vec2::ZERO,
        });
        assert_eq!(reader.get().left, Vec2::X);
    }
}
