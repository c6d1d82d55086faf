//! Drives the transition session each frame.

use std::cell::Cell;
use std::mem;
use std::rc::Rc;
use std::time::Duration;

use super::handle::{TransitionCompleted, TransitionHandle, TransitionSignal, TransitionSnapshot};
use super::session::{TransitionRequest, TransitionSession};
use crate::options::TransitionOptions;
use crate::util::listeners::ListenerToken;
use crate::util::scheduler::{Scheduler, TimerGroup};

/// Owner of the one transition session.
///
/// A scene-waiting session sweeps at normal speed up to the checkpoint,
/// then crawls at `slow_factor` until scene-ready arrives or the fallback
/// timer (armed at start) fires, after which it finishes at normal speed.
#[derive(Debug)]
pub struct TransitionOrchestrator {
    options: TransitionOptions,
    session: TransitionSession,
    released: Rc<Cell<bool>>,
    fallback: TimerGroup,
    scheduler: Scheduler,
    handle: TransitionHandle,
}

impl TransitionOrchestrator {
    /// Idle orchestrator arming its fallback timers on `scheduler`.
    #[must_use]
    pub fn new(options: TransitionOptions, scheduler: Scheduler) -> Self {
        Self {
            options,
            session: TransitionSession::default(),
            released: Rc::new(Cell::new(false)),
            fallback: TimerGroup::new(scheduler.clone()),
            scheduler,
            handle: TransitionHandle::default(),
        }
    }

    /// A new handle onto this session.
    #[must_use]
    pub fn handle(&self) -> TransitionHandle {
        self.handle.clone()
    }

    /// The session itself.
    #[must_use]
    pub fn session(&self) -> &TransitionSession {
        &self.session
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.active
    }

    /// Visual progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.session.progress()
    }

    /// Replace the timing parameters. Applies to the running session too.
    pub fn set_options(&mut self, options: TransitionOptions) {
        self.options = options;
    }

    /// Listen for completed transitions. Same registry as
    /// [`TransitionHandle::subscribe_complete`].
    pub fn subscribe_complete(
        &self,
        listener: impl FnMut(&TransitionCompleted) + 'static,
    ) -> ListenerToken {
        self.handle.subscribe_complete(listener)
    }

    /// Remove a completion listener.
    pub fn unsubscribe_complete(&self, token: ListenerToken) -> bool {
        self.handle.unsubscribe_complete(token)
    }

    /// Begin a transition. Returns `false`, dropping the request and its
    /// callback, if one is already running.
    pub fn start(&mut self, request: TransitionRequest) -> bool {
        if self.session.active {
            log::debug!("transition start ignored: session active");
            return false;
        }
        let direction = request.direction();
        log::debug!(
            "transition start {direction:?} (wait_for_scene={})",
            request.wait_for_scene
        );

        self.session = TransitionSession {
            active: true,
            direction,
            travelled: 0.0,
            wait_for_scene: request.wait_for_scene,
            callbacks: request.on_complete.into_iter().collect(),
        };

        self.released = Rc::new(Cell::new(!request.wait_for_scene));
        if request.wait_for_scene {
            let released = Rc::clone(&self.released);
            let _ = self.fallback.schedule(self.options.fallback(), move || {
                if !released.get() {
                    log::warn!("scene-ready not received; releasing transition");
                    released.set(true);
                }
            });
        }
        self.publish();
        true
    }

    /// Release a scene-waiting session. Ignored when nothing waits.
    pub fn notify_scene_ready(&mut self) {
        if self.session.active && self.session.wait_for_scene {
            self.released.set(true);
            self.fallback.cancel_all();
            self.publish();
        } else {
            log::debug!("scene-ready ignored: no waiting transition");
        }
    }

    /// Force the session idle. Queued callbacks are discarded, not run.
    pub fn stop(&mut self) {
        if self.session.active {
            log::debug!("transition stopped at {:.2}", self.session.progress());
        }
        self.fallback.cancel_all();
        self.session = TransitionSession::default();
        self.released.set(false);
        self.publish();
    }

    /// Apply queued handle signals, then advance the session by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for signal in self.handle.take_signals() {
            match signal {
                TransitionSignal::Start(request) => {
                    let _ = self.start(request);
                }
                TransitionSignal::SceneReady => self.notify_scene_ready(),
                TransitionSignal::Stop => self.stop(),
            }
        }
        if !self.session.active {
            return;
        }

        let duration = self.options.duration().as_secs_f32();
        if duration <= 0.0 {
            self.session.travelled = 1.0;
        } else {
            let mut budget = dt.as_secs_f32() / duration;
            let checkpoint = self.options.checkpoint.clamp(0.0, 1.0);
            if !self.released.get() {
                let to_checkpoint = (checkpoint - self.session.travelled).max(0.0);
                let fast = budget.min(to_checkpoint);
                self.session.travelled += fast;
                budget = (budget - fast) * self.options.slow_factor.max(0.0);
            }
            self.session.travelled = (self.session.travelled + budget).min(1.0);
        }

        if self.session.travelled >= 1.0 {
            self.complete();
        } else {
            self.publish();
        }
    }

    fn complete(&mut self) {
        let finished = mem::take(&mut self.session);
        self.fallback.cancel_all();
        self.released.set(false);
        self.publish();
        log::debug!(
            "transition {:?} complete at t={:?}",
            finished.direction,
            self.scheduler.now()
        );

        for callback in finished.callbacks {
            callback();
        }
        self.handle.broadcast_complete(&TransitionCompleted {
            direction: finished.direction,
        });
    }

    fn publish(&self) {
        let holding = self.session.active
            && !self.released.get()
            && self.session.travelled >= self.options.checkpoint;
        self.handle.snapshot.set(TransitionSnapshot {
            active: self.session.active,
            direction: self.session.direction,
            progress: self.session.progress(),
            holding,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::transition::TransitionDirection;

    const FRAME: Duration = Duration::from_millis(16);

    struct Rig {
        scheduler: Scheduler,
        orchestrator: TransitionOrchestrator,
    }

    impl Rig {
        fn new() -> Self {
            let scheduler = Scheduler::new();
            let orchestrator =
                TransitionOrchestrator::new(TransitionOptions::default(), scheduler.clone());
            Self {
                scheduler,
                orchestrator,
            }
        }

        fn frame(&mut self) {
            let _ = self.scheduler.advance(FRAME);
            self.orchestrator.tick(FRAME);
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn forward_completes_over_duration() {
        let mut rig = Rig::new();
        let (count, cb) = counter();
        assert!(rig.orchestrator.start(TransitionRequest::forward().on_complete(cb)));

        let mut last = 0.0;
        let mut frames = 0;
        while rig.orchestrator.is_active() {
            rig.frame();
            frames += 1;
            if rig.orchestrator.is_active() {
                assert!(rig.orchestrator.progress() >= last);
                last = rig.orchestrator.progress();
            }
            assert!(frames < 1000);
        }
        assert_eq!(count.get(), 1);
        // 1.6 s at 16 ms per frame, give or take float accumulation.
        assert!((100..=101).contains(&frames), "{frames}");
        assert_eq!(rig.orchestrator.progress(), 0.0);
    }

    #[test]
    fn reverse_runs_progress_downward() {
        let mut rig = Rig::new();
        assert!(rig.orchestrator.start(TransitionRequest::reverse()));
        assert_eq!(rig.orchestrator.progress(), 1.0);
        rig.frame();
        let p = rig.orchestrator.progress();
        assert!(p < 1.0 && p > 0.9);
        for _ in 0..200 {
            rig.frame();
        }
        assert!(!rig.orchestrator.is_active());
    }

    #[test]
    fn start_while_active_leaves_session_untouched() {
        let mut rig = Rig::new();
        let (first, cb) = counter();
        assert!(rig.orchestrator.start(TransitionRequest::forward().on_complete(cb)));
        for _ in 0..10 {
            rig.frame();
        }
        let before = rig.orchestrator.progress();

        let (second, cb) = counter();
        assert!(!rig
            .orchestrator
            .start(TransitionRequest::reverse().waiting_for_scene().on_complete(cb)));
        assert_eq!(rig.orchestrator.progress(), before);
        assert_eq!(rig.orchestrator.session().direction(), TransitionDirection::Forward);
        assert_eq!(rig.orchestrator.session().pending_callbacks(), 1);
        assert!(!rig.orchestrator.session().waits_for_scene());

        for _ in 0..200 {
            rig.frame();
        }
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn waiting_session_holds_past_checkpoint() {
        let mut rig = Rig::new();
        assert!(rig
            .orchestrator
            .start(TransitionRequest::forward().waiting_for_scene()));
        // 2 s: full speed would have finished.
        for _ in 0..125 {
            rig.frame();
        }
        assert!(rig.orchestrator.is_active());
        let p = rig.orchestrator.progress();
        assert!(p >= 0.75 && p < 0.9, "{p}");
        assert!(rig.orchestrator.handle().snapshot().holding);

        rig.orchestrator.notify_scene_ready();
        assert_eq!(rig.scheduler.pending_count(), 0);
        for _ in 0..30 {
            rig.frame();
        }
        assert!(!rig.orchestrator.is_active());
    }

    #[test]
    fn fallback_completes_once_within_bound() {
        let mut rig = Rig::new();
        let (count, cb) = counter();
        assert!(rig
            .orchestrator
            .start(TransitionRequest::forward().waiting_for_scene().on_complete(cb)));

        let limit = TransitionOptions::default().duration() + Duration::from_secs_f32(3.5);
        let mut elapsed = Duration::ZERO;
        while rig.orchestrator.is_active() {
            rig.frame();
            elapsed += FRAME;
            assert!(elapsed <= limit + FRAME, "ran past {limit:?}");
        }
        assert_eq!(count.get(), 1);
        for _ in 0..400 {
            rig.frame();
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stop_cancels_fallback_and_skips_callbacks() {
        let mut rig = Rig::new();
        let (count, cb) = counter();
        assert!(rig
            .orchestrator
            .start(TransitionRequest::forward().waiting_for_scene().on_complete(cb)));
        assert_eq!(rig.scheduler.pending_count(), 1);
        rig.frame();
        rig.orchestrator.stop();

        assert!(!rig.orchestrator.is_active());
        assert_eq!(rig.orchestrator.progress(), 0.0);
        assert_eq!(rig.scheduler.pending_count(), 0);
        for _ in 0..400 {
            rig.frame();
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn handle_signals_apply_on_next_tick() {
        let mut rig = Rig::new();
        let handle = rig.orchestrator.handle();
        handle.start(TransitionRequest::forward().waiting_for_scene());
        assert!(!handle.is_active());
        rig.frame();
        assert!(handle.is_active());
        assert!(handle.progress() > 0.0);

        for _ in 0..90 {
            rig.frame();
        }
        handle.notify_scene_ready();
        for _ in 0..30 {
            rig.frame();
        }
        assert!(!handle.is_active());
    }

    #[test]
    fn completion_is_broadcast_with_direction() {
        let mut rig = Rig::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let token = rig
            .orchestrator
            .subscribe_complete(move |e| s.borrow_mut().push(e.direction));

        assert!(rig.orchestrator.start(TransitionRequest::reverse()));
        for _ in 0..120 {
            rig.frame();
        }
        assert_eq!(*seen.borrow(), [TransitionDirection::Reverse]);

        assert!(rig.orchestrator.unsubscribe_complete(token));
        assert!(rig.orchestrator.start(TransitionRequest::forward()));
        for _ in 0..120 {
            rig.frame();
        }
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn handle_subscribers_hear_completion() {
        let mut rig = Rig::new();
        let handle = rig.orchestrator.handle();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _ = handle.subscribe_complete(move |e| s.borrow_mut().push(e.direction));

        handle.start(TransitionRequest::forward());
        for _ in 0..120 {
            rig.frame();
        }
        assert!(!handle.is_active());
        assert_eq!(*seen.borrow(), [TransitionDirection::Forward]);
    }

    #[test]
    fn callback_can_chain_a_new_transition() {
        let mut rig = Rig::new();
        let handle = rig.orchestrator.handle();
        assert!(rig.orchestrator.start(
            TransitionRequest::forward().on_complete(move || handle.start(TransitionRequest::reverse()))
        ));
        while rig.orchestrator.is_active() {
            rig.frame();
        }
        rig.frame();
        assert!(rig.orchestrator.is_active());
        assert_eq!(rig.orchestrator.session().direction(), TransitionDirection::Reverse);
    }
}
