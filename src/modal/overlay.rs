//! One open detail overlay.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::fsm::{ModalEffect, ModalNavigator};
use crate::graph::PayloadRef;
use crate::input::InputAction;
use crate::options::OverlayOptions;
use crate::transition::TransitionHandle;
use crate::util::scheduler::{Scheduler, TimerGroup};

/// How far the overlay's mount animation has progressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealStage {
    /// Mounted, nothing shown yet.
    #[default]
    Hidden,
    /// Backdrop fading in.
    Backdrop,
    /// Panel sliding in.
    Panel,
    /// Content visible; the destination counts as ready.
    Content,
}

/// Overlay session for one payload. Created on open, dropped on close;
/// dropping cancels any reveal step still pending.
#[derive(Debug)]
pub struct DetailOverlay {
    payload: PayloadRef,
    navigator: ModalNavigator,
    stage: Rc<Cell<RevealStage>>,
    timers: TimerGroup,
}

impl DetailOverlay {
    /// Mount the overlay and schedule its reveal. Reaching
    /// [`RevealStage::Content`] reports scene-ready through `transition`.
    #[must_use]
    pub fn open(
        payload: PayloadRef,
        navigator: ModalNavigator,
        options: &OverlayOptions,
        scheduler: Scheduler,
        transition: TransitionHandle,
    ) -> Self {
        log::debug!("overlay open: {}", payload.as_str());
        let stage = Rc::new(Cell::new(RevealStage::Hidden));
        let mut timers = TimerGroup::new(scheduler);

        for (delay_ms, next) in [
            (options.backdrop_ms, RevealStage::Backdrop),
            (options.panel_ms, RevealStage::Panel),
        ] {
            let stage = Rc::clone(&stage);
            let _ = timers.schedule(Duration::from_millis(delay_ms), move || {
                stage.set(stage.get().max(next));
            });
        }
        let content = Rc::clone(&stage);
        let _ = timers.schedule(Duration::from_millis(options.content_ms), move || {
            content.set(RevealStage::Content);
            transition.notify_scene_ready();
        });

        Self {
            payload,
            navigator,
            stage,
            timers,
        }
    }

    /// Payload being shown.
    #[must_use]
    pub fn payload(&self) -> &PayloadRef {
        &self.payload
    }

    /// Current reveal stage.
    #[must_use]
    pub fn stage(&self) -> RevealStage {
        self.stage.get()
    }

    /// Whether the content is visible.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.stage.get() == RevealStage::Content
    }

    /// Reveal steps not yet run.
    #[must_use]
    pub fn pending_reveals(&self) -> usize {
        self.timers.pending_count()
    }

    /// Menu state machine.
    #[must_use]
    pub fn navigator(&self) -> &ModalNavigator {
        &self.navigator
    }

    /// Route an action into the menu state machine.
    pub fn dispatch(&mut self, action: InputAction) -> ModalEffect {
        self.navigator.dispatch(action)
    }

    /// Cancel pending reveal steps. The overlay stays at its current stage.
    pub fn close(&mut self) {
        self.timers.cancel_all();
    }
}
