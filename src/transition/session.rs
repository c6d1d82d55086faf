//! Transition session state.

use std::fmt;

/// Which way the transition sweeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransitionDirection {
    /// Progress runs 0 → 1 (entering the destination view).
    #[default]
    Forward,
    /// Progress runs 1 → 0 (returning to the previous view).
    Reverse,
}

/// A request to start a transition.
#[derive(Default)]
pub struct TransitionRequest {
    /// Sweep 1 → 0 instead of 0 → 1.
    pub reverse: bool,
    /// Hold near the end until the destination reports ready.
    pub wait_for_scene: bool,
    /// Runs once when this transition completes. Not run on `stop`.
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

impl TransitionRequest {
    /// Forward transition that does not wait.
    #[must_use]
    pub fn forward() -> Self {
        Self::default()
    }

    /// Reverse transition that does not wait.
    #[must_use]
    pub fn reverse() -> Self {
        Self {
            reverse: true,
            ..Self::default()
        }
    }

    /// Wait for scene-ready past the checkpoint.
    #[must_use]
    pub fn waiting_for_scene(mut self) -> Self {
        self.wait_for_scene = true;
        self
    }

    /// Attach a completion callback.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Sweep direction implied by the `reverse` flag.
    #[must_use]
    pub fn direction(&self) -> TransitionDirection {
        if self.reverse {
            TransitionDirection::Reverse
        } else {
            TransitionDirection::Forward
        }
    }
}

impl fmt::Debug for TransitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRequest")
            .field("reverse", &self.reverse)
            .field("wait_for_scene", &self.wait_for_scene)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// The single transition session. `Default` is the idle shape, restored on
/// completion and on stop.
#[derive(Default)]
pub struct TransitionSession {
    pub(crate) active: bool,
    pub(crate) direction: TransitionDirection,
    /// Fraction of the sweep covered, independent of direction.
    pub(crate) travelled: f32,
    pub(crate) wait_for_scene: bool,
    pub(crate) callbacks: Vec<Box<dyn FnOnce()>>,
}

impl TransitionSession {
    /// Whether a transition is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sweep direction of the running (or last idle) session.
    #[must_use]
    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    /// Visual progress in `[0, 1]`: rises for forward sweeps, falls for
    /// reverse ones.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.direction {
            TransitionDirection::Forward => self.travelled,
            TransitionDirection::Reverse => 1.0 - self.travelled,
        }
    }

    /// Whether this session holds for scene-ready.
    #[must_use]
    pub fn waits_for_scene(&self) -> bool {
        self.wait_for_scene
    }

    /// Completion callbacks queued on this session.
    #[must_use]
    pub fn pending_callbacks(&self) -> usize {
        self.callbacks.len()
    }
}

impl fmt::Debug for TransitionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionSession")
            .field("active", &self.active)
            .field("direction", &self.direction)
            .field("progress", &self.progress())
            .field("wait_for_scene", &self.wait_for_scene)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
