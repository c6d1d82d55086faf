//! Per-frame tick and action routing.

use std::rc::Rc;
use std::time::Duration;

use glam::Vec2;

use super::{Phase, Showcase, ShowcaseEvent};
use crate::avatar::{AvatarEvent, MoveGate, MoveOutcome};
use crate::camera::{CameraEvent, FollowTarget};
use crate::graph::NodeId;
use crate::input::InputAction;
use crate::modal::{DetailOverlay, ModalEffect, ModalNavigator};
use crate::transition::{TransitionDirection, TransitionRequest};

// ── Frame ──

impl Showcase {
    /// Advance everything by `dt`. Call exactly once per display frame.
    pub fn frame(&mut self, dt: Duration) {
        let _ = self.scheduler.advance(dt);

        if self.phase == Phase::Loading {
            self.loading.tick(dt);
            self.sync_loading();
        }

        self.input.poll();
        let actions: Vec<InputAction> = self.actions.borrow_mut().drain(..).collect();
        for action in actions {
            self.route_action(action);
        }
        self.route_axes();

        if let Some(AvatarEvent::Arrived(node)) = self.avatar.tick(&self.graph) {
            if self.focus_on_arrival.take().is_some_and(|n| n == node) {
                self.begin_focus();
            }
            self.push_event(ShowcaseEvent::Arrived(node));
        }

        let follow = self.follow_target();
        if let Some(CameraEvent::FocusCompleted(node)) = self.camera.update(follow) {
            self.enter_detail(&node);
        }

        self.transition.tick(dt);
        self.handle_completions();
    }

    pub(super) fn sync_loading(&mut self) {
        if self.phase == Phase::Loading && self.loading.is_dismissed() {
            self.phase = Phase::Exploring;
            self.push_event(ShowcaseEvent::LoadingDismissed);
        }
    }

    pub(super) fn push_event(&self, event: ShowcaseEvent) {
        self.events.borrow_mut().push(event);
    }

    fn follow_target(&self) -> FollowTarget {
        FollowTarget {
            position: self.avatar.position(),
            heading_to: self
                .avatar
                .traversal()
                .and_then(|t| self.graph.position(t.next())),
        }
    }
}

// ── Routing ──

impl Showcase {
    fn route_action(&mut self, action: InputAction) {
        match self.phase {
            Phase::Exploring => {
                if let Some(intent) = action.intent() {
                    let _ = self.request_move(intent);
                } else if action == InputAction::Confirm {
                    self.begin_focus();
                }
            }
            Phase::Focusing => {
                if action == InputAction::Back {
                    self.camera.release_focus();
                    self.phase = Phase::Exploring;
                }
            }
            Phase::Viewing => {
                let effect = self
                    .overlay
                    .as_mut()
                    .map_or(ModalEffect::None, |o| o.dispatch(action));
                if effect == ModalEffect::Close {
                    self.exit_detail();
                }
            }
            Phase::Loading | Phase::Entering | Phase::Exiting => {
                log::debug!("{action:?} dropped while {:?}", self.phase);
            }
        }
    }

    /// Held stick: keep stepping while idle.
    fn route_axes(&mut self) {
        if self.phase != Phase::Exploring || self.avatar.is_traversing() {
            return;
        }
        let left = self.axes.get().left;
        if left != Vec2::ZERO {
            let _ = self.request_move(left);
        }
    }

    pub(super) fn gate(&self) -> MoveGate {
        MoveGate {
            overlay_open: self.overlay.is_some(),
            focus_active: self.camera.is_focus_active(),
        }
    }

    pub(super) fn request_move(&mut self, intent: Vec2) -> MoveOutcome {
        if self.phase != Phase::Exploring {
            return MoveOutcome::Blocked;
        }
        let gate = self.gate();
        let outcome = self.avatar.request_move(&self.graph, intent, gate);
        if matches!(outcome, MoveOutcome::Started { .. }) {
            self.focus_on_arrival = None;
        }
        outcome
    }

    pub(super) fn begin_focus(&mut self) {
        if self.phase != Phase::Exploring || self.avatar.is_traversing() {
            return;
        }
        let node = self.avatar.current_node().clone();
        let Some(position) = self.graph.position(&node) else {
            return;
        };
        self.camera.focus_on(node, position);
        self.phase = Phase::Focusing;
    }
}

// ── Overlay lifecycle ──

impl Showcase {
    fn enter_detail(&mut self, node: &NodeId) {
        if self.phase != Phase::Focusing {
            return;
        }
        let Some(payload) = self.graph.node(node).map(|n| n.payload().clone()) else {
            return;
        };
        let content = self.details.detail(&payload);
        let links = Rc::new(content.links);
        let events = Rc::clone(&self.events);
        let navigator = ModalNavigator::new(links.len(), content.image_count).on_open_link(
            move |index| {
                if let Some(link) = links.get(index) {
                    log::info!("open link {link}");
                    events
                        .borrow_mut()
                        .push(ShowcaseEvent::LinkOpened(link.clone()));
                }
            },
        );

        if !self
            .transition
            .start(TransitionRequest::forward().waiting_for_scene())
        {
            log::warn!("detail entry skipped: transition already running");
            self.camera.release_focus();
            self.phase = Phase::Exploring;
            return;
        }
        self.overlay = Some(DetailOverlay::open(
            payload,
            navigator,
            &self.options.overlay,
            self.scheduler.clone(),
            self.transition.handle(),
        ));
        self.phase = Phase::Entering;
    }

    fn exit_detail(&mut self) {
        if self.transition.start(TransitionRequest::reverse()) {
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.close();
            }
            self.phase = Phase::Exiting;
        }
    }

    fn finish_exit(&mut self, announce: bool) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.close();
            if announce {
                self.push_event(ShowcaseEvent::OverlayClosed(overlay.payload().clone()));
            }
        }
        self.camera.release_focus();
        self.phase = Phase::Exploring;
    }

    fn handle_completions(&mut self) {
        let done: Vec<_> = self.completed.borrow_mut().drain(..).collect();
        for completed in done {
            match (self.phase, completed.direction) {
                (Phase::Entering, TransitionDirection::Forward) => {
                    self.phase = Phase::Viewing;
                    if let Some(overlay) = &self.overlay {
                        self.push_event(ShowcaseEvent::OverlayOpened(overlay.payload().clone()));
                    }
                }
                (Phase::Exiting, TransitionDirection::Reverse) => self.finish_exit(true),
                _ => {}
            }
        }

        // Stopped through a handle: no completion will come.
        match self.phase {
            Phase::Entering if !self.transition.is_active() => {
                log::warn!("entry transition stopped; dropping overlay");
                self.finish_exit(false);
            }
            Phase::Exiting if !self.transition.is_active() => self.finish_exit(true),
            _ => {}
        }
    }
}
