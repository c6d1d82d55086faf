//! Building a [`Showcase`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{DetailSource, Phase, Showcase};
use crate::avatar::AvatarController;
use crate::camera::CameraRig;
use crate::error::WayfarerError;
use crate::graph::{NavigationGraph, NodeId};
use crate::input::{GamepadSource, InputHub};
use crate::loading::LoadingCoordinator;
use crate::options::Options;
use crate::transition::TransitionOrchestrator;
use crate::util::scheduler::Scheduler;

impl Showcase {
    /// Showcase with the avatar standing on `start`, behind a loading
    /// screen.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::Path`] if `start` is not in `graph`.
    pub fn new(
        graph: NavigationGraph,
        start: &NodeId,
        options: Options,
        gamepad: Box<dyn GamepadSource>,
        details: Box<dyn DetailSource>,
        aspect: f32,
    ) -> Result<Self, WayfarerError> {
        let avatar = AvatarController::new(&graph, start, options.avatar.clone())?;
        let camera = CameraRig::new(options.camera.clone(), aspect, avatar.position());

        let mut input = InputHub::new(
            &options.input,
            options.keybindings.clone(),
            gamepad,
        );
        let axes = input.axes();
        let actions = Rc::new(RefCell::new(VecDeque::new()));
        let queue = Rc::clone(&actions);
        let _ = input.subscribe(move |action| {
            queue.borrow_mut().push_back(*action);
        });

        let scheduler = Scheduler::new();
        let transition =
            TransitionOrchestrator::new(options.transition.clone(), scheduler.clone());
        let completed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&completed);
        let _ = transition.subscribe_complete(move |done| sink.borrow_mut().push(*done));

        let loading = LoadingCoordinator::new(&options.loading);
        log::info!(
            "showcase ready: {} nodes, starting at {start}",
            graph.len()
        );

        Ok(Self {
            options,
            graph,
            scheduler,
            input,
            axes,
            actions,
            avatar,
            focus_on_arrival: None,
            camera,
            transition,
            completed,
            loading,
            details,
            overlay: None,
            phase: Phase::Loading,
            events: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Replace every tunable. Changes apply from the next frame; the loading
    /// sequence is not restarted.
    pub fn set_options(&mut self, options: Options) {
        self.input.set_bindings(options.keybindings.clone());
        self.input.set_options(&options.input);
        self.avatar.set_options(options.avatar.clone());
        self.camera.set_options(options.camera.clone());
        self.transition.set_options(options.transition.clone());
        self.options = options;
    }
}
