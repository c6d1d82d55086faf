//! Application root.
//!
//! [`Showcase`] owns every navigation component and runs them in a fixed
//! per-frame order:
//!
//! 1. scheduler (deferred callbacks)
//! 2. loading progress
//! 3. input poll
//! 4. action routing
//! 5. avatar traversal
//! 6. camera rig
//! 7. transition session
//!
//! Hosts forward platform events with
//! [`handle_event`](Showcase::handle_event), call
//! [`frame`](Showcase::frame) once per display frame, and collect
//! [`ShowcaseEvent`]s with [`drain_events`](Showcase::drain_events).

mod accessors;
mod construction;
mod detail;
mod frame;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

pub use detail::{DetailContent, DetailSource, StaticDetails};

use crate::avatar::AvatarController;
use crate::camera::CameraRig;
use crate::graph::{NavigationGraph, NodeId, PayloadRef};
use crate::input::{AxisReader, InputAction, InputHub};
use crate::loading::LoadingCoordinator;
use crate::modal::DetailOverlay;
use crate::options::Options;
use crate::transition::{TransitionCompleted, TransitionOrchestrator};
use crate::util::scheduler::Scheduler;

/// Coarse interaction state of the showcase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Loading screen up; input is discarded.
    #[default]
    Loading,
    /// Free navigation across the graph.
    Exploring,
    /// Camera zooming onto the current node.
    Focusing,
    /// Transition into the detail overlay.
    Entering,
    /// Detail overlay open and interactive.
    Viewing,
    /// Transition back out of the overlay.
    Exiting,
}

/// Notifications for the host, collected with
/// [`Showcase::drain_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEvent {
    /// The loading screen was dismissed.
    LoadingDismissed,
    /// The avatar reached the end of a move.
    Arrived(NodeId),
    /// The detail overlay for this payload finished its entry transition.
    OverlayOpened(PayloadRef),
    /// The detail overlay for this payload finished its exit transition.
    OverlayClosed(PayloadRef),
    /// The user confirmed a link in the overlay dropdown.
    LinkOpened(String),
}

/// The navigation showcase: graph, input, avatar, camera, overlay and
/// transitions wired together.
pub struct Showcase {
    options: Options,
    graph: NavigationGraph,
    scheduler: Scheduler,

    /// Keyboard, touch and gamepad arbitration.
    input: InputHub,
    axes: AxisReader,
    /// Actions emitted by the hub, routed once per frame.
    actions: Rc<RefCell<VecDeque<InputAction>>>,

    avatar: AvatarController,
    /// Destination of a `select_node` walk, focused on arrival.
    focus_on_arrival: Option<NodeId>,
    camera: CameraRig,
    transition: TransitionOrchestrator,
    /// Completions broadcast by the orchestrator, handled after its tick.
    completed: Rc<RefCell<Vec<TransitionCompleted>>>,
    loading: LoadingCoordinator,

    details: Box<dyn DetailSource>,
    overlay: Option<DetailOverlay>,
    phase: Phase,
    events: Rc<RefCell<Vec<ShowcaseEvent>>>,
}

impl fmt::Debug for Showcase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Showcase")
            .field("phase", &self.phase)
            .field("node", self.avatar.current_node())
            .field("nodes", &self.graph.len())
            .field("overlay", &self.overlay.as_ref().map(DetailOverlay::payload))
            .field("transition", self.transition.session())
            .finish_non_exhaustive()
    }
}
