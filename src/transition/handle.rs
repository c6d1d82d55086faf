//! Shared access to the transition session.
//!
//! Views that start transitions or report readiness hold a
//! [`TransitionHandle`]. Signals are queued and applied by the
//! orchestrator on its next tick, so senders never re-enter it.
//! Completion is broadcast through the handle as well, so a view can
//! learn a sweep finished without a reference to the orchestrator.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use super::session::{TransitionDirection, TransitionRequest};
use crate::util::listeners::{ListenerToken, Listeners};

/// Broadcast when a transition runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCompleted {
    /// Direction of the finished sweep.
    pub direction: TransitionDirection,
}

/// Messages a handle can send to the orchestrator.
#[derive(Debug)]
pub enum TransitionSignal {
    /// Start a transition (ignored if one is active).
    Start(TransitionRequest),
    /// The destination view finished mounting.
    SceneReady,
    /// Abort the running transition without completing it.
    Stop,
}

/// Read-only view of the session, refreshed by the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionSnapshot {
    /// Whether a transition is running.
    pub active: bool,
    /// Sweep direction.
    pub direction: TransitionDirection,
    /// Visual progress in `[0, 1]`.
    pub progress: f32,
    /// Whether the session is slowed waiting for scene-ready.
    pub holding: bool,
}

/// Cloneable handle to the orchestrator's session.
#[derive(Clone, Default)]
pub struct TransitionHandle {
    pub(crate) signals: Rc<RefCell<VecDeque<TransitionSignal>>>,
    pub(crate) snapshot: Rc<Cell<TransitionSnapshot>>,
    completed: Rc<RefCell<Listeners<TransitionCompleted>>>,
}

impl TransitionHandle {
    /// Queue a signal for the next orchestrator tick.
    pub fn send(&self, signal: TransitionSignal) {
        self.signals.borrow_mut().push_back(signal);
    }

    /// Queue a start request.
    pub fn start(&self, request: TransitionRequest) {
        self.send(TransitionSignal::Start(request));
    }

    /// Report that the destination scene is ready.
    pub fn notify_scene_ready(&self) {
        self.send(TransitionSignal::SceneReady);
    }

    /// Abort the running transition.
    pub fn stop(&self) {
        self.send(TransitionSignal::Stop);
    }

    /// Session state as of the last orchestrator tick.
    #[must_use]
    pub fn snapshot(&self) -> TransitionSnapshot {
        self.snapshot.get()
    }

    /// Visual progress as of the last orchestrator tick.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.snapshot.get().progress
    }

    /// Whether a transition was running at the last orchestrator tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.snapshot.get().active
    }

    /// Listen for completed transitions.
    ///
    /// Listeners run inside the orchestrator's tick, after the session's
    /// own callbacks. They may queue signals on any handle but must not
    /// subscribe or unsubscribe from within the broadcast.
    pub fn subscribe_complete(
        &self,
        listener: impl FnMut(&TransitionCompleted) + 'static,
    ) -> ListenerToken {
        self.completed.borrow_mut().subscribe(listener)
    }

    /// Remove a completion listener. Returns `false` if it was already gone.
    pub fn unsubscribe_complete(&self, token: ListenerToken) -> bool {
        self.completed.borrow_mut().unsubscribe(token)
    }

    pub(crate) fn take_signals(&self) -> Vec<TransitionSignal> {
        self.signals.borrow_mut().drain(..).collect()
    }

    pub(crate) fn broadcast_complete(&self, event: &TransitionCompleted) {
        self.completed.borrow_mut().emit(event);
    }
}

impl fmt::Debug for TransitionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionHandle")
            .field("queued", &self.signals.borrow().len())
            .field("snapshot", &self.snapshot.get())
            .field("listeners", &self.completed.borrow().len())
            .finish()
    }
}
