//! Host-facing commands and read-only queries for [`Showcase`].

use glam::Vec2;

use super::{Phase, Showcase, ShowcaseEvent};
use crate::avatar::{AvatarController, MoveOutcome};
use crate::camera::{CameraRig, CameraUniform};
use crate::graph::{NavigationGraph, NodeId};
use crate::input::{AxisReader, InputAction, InputEvent, InputHub};
use crate::loading::LoadingCoordinator;
use crate::modal::DetailOverlay;
use crate::options::Options;
use crate::transition::TransitionHandle;
use crate::util::listeners::ListenerToken;

// ── Commands ──

impl Showcase {
    /// Forward a platform input event. Resulting actions are routed on
    /// the next [`frame`](Self::frame).
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.handle_event(event);
    }

    /// Step toward the neighbor best aligned with `(dx, dz)`.
    pub fn move_toward(&mut self, dx: f32, dz: f32) -> MoveOutcome {
        self.request_move(Vec2::new(dx, dz))
    }

    /// Walk to `target` along a shortest path, then zoom onto it and open
    /// its detail overlay. Selecting the current node focuses it at once.
    pub fn select_node(&mut self, target: &NodeId) -> MoveOutcome {
        if self.phase != Phase::Exploring {
            return MoveOutcome::Blocked;
        }
        let gate = self.gate();
        let outcome = self.avatar.select_node(&self.graph, target, gate);
        match &outcome {
            MoveOutcome::Started { to, .. } => self.focus_on_arrival = Some(to.clone()),
            MoveOutcome::AlreadyThere => self.begin_focus(),
            _ => {}
        }
        outcome
    }

    /// Zoom onto the current node and open its detail overlay, as if
    /// `Confirm` had been pressed.
    pub fn focus_current(&mut self) {
        self.begin_focus();
    }

    /// Authoritative asset-loading percentage.
    pub fn report_load_progress(&mut self, percent: f32) {
        self.loading.report_progress(percent);
        self.sync_loading();
    }

    /// Update the viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Listen to the raw action stream alongside the showcase's own
    /// routing.
    pub fn subscribe_actions(
        &mut self,
        listener: impl FnMut(&InputAction) + 'static,
    ) -> ListenerToken {
        self.input.subscribe(listener)
    }

    /// Remove an action listener added with
    /// [`subscribe_actions`](Self::subscribe_actions).
    pub fn unsubscribe_actions(&mut self, token: ListenerToken) -> bool {
        self.input.unsubscribe(token)
    }

    /// Take every event raised since the last call.
    pub fn drain_events(&mut self) -> Vec<ShowcaseEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

// ── Queries ──

impl Showcase {
    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The node dataset.
    #[must_use]
    pub fn graph(&self) -> &NavigationGraph {
        &self.graph
    }

    /// Avatar state.
    #[must_use]
    pub fn avatar(&self) -> &AvatarController {
        &self.avatar
    }

    /// Camera rig.
    #[must_use]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Uniform block for the rendering collaborator.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera.uniform()
    }

    /// Input hub (mode, gamepad status, bindings).
    #[must_use]
    pub fn input(&self) -> &InputHub {
        &self.input
    }

    /// Latest analog axes.
    #[must_use]
    pub fn axes(&self) -> AxisReader {
        self.axes.clone()
    }

    /// Open detail overlay.
    #[must_use]
    pub fn overlay(&self) -> Option<&DetailOverlay> {
        self.overlay.as_ref()
    }

    /// Loading progress.
    #[must_use]
    pub fn loading(&self) -> &LoadingCoordinator {
        &self.loading
    }

    /// Handle onto the transition session, for views that mount
    /// destinations or drive transitions themselves.
    #[must_use]
    pub fn transition_handle(&self) -> TransitionHandle {
        self.transition.handle()
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
