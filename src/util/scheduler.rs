//! Tick-driven deferred callbacks.
//!
//! Nothing in the navigation core blocks. Delays (the transition fallback,
//! overlay reveal sequencing) are callbacks scheduled against a virtual
//! clock that the application root advances once per frame.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Identifies one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    /// Remove and return the earliest timer due at or before `now`.
    /// Equal due times fire in scheduling order.
    fn pop_due(&mut self) -> Option<PendingTimer> {
        let now = self.now;
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id))?;
        Some(self.pending.swap_remove(pos))
    }
}

/// Shared handle to a single-threaded timer queue.
///
/// Cloning yields another handle to the same queue.
#[derive(Clone, Default)]
pub struct Scheduler {
    queue: Rc<RefCell<TimerQueue>>,
}

impl Scheduler {
    /// Empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Run `callback` once `delay` has elapsed on the virtual clock.
    pub fn schedule(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> TimerId {
        let mut queue = self.queue.borrow_mut();
        let id = TimerId(queue.next_id);
        queue.next_id += 1;
        let due = queue.now.saturating_add(delay);
        queue.pending.push(PendingTimer {
            id,
            due,
            callback: Box::new(callback),
        });
        id
    }

    /// Drop a pending callback. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&self, id: TimerId) -> bool {
        let mut queue = self.queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|t| t.id != id);
        queue.pending.len() != before
    }

    /// Whether `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.borrow().pending.iter().any(|t| t.id == id)
    }

    /// Number of callbacks waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Advance the clock by `dt` and fire every callback that came due, in
    /// due order. Returns how many fired.
    ///
    /// Callbacks may schedule or cancel other timers; the queue is not
    /// borrowed while a callback runs.
    pub fn advance(&self, dt: Duration) -> usize {
        self.queue.borrow_mut().now += dt;
        let mut fired = 0;
        loop {
            let next = self.queue.borrow_mut().pop_due();
            let Some(timer) = next else { break };
            (timer.callback)();
            fired += 1;
        }
        fired
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("Scheduler")
            .field("now", &queue.now)
            .field("pending", &queue.pending.len())
            .finish()
    }
}

/// Timers owned by one session. Dropping the group cancels whatever is
/// still pending, so no callback fires into a torn-down owner.
#[derive(Debug)]
pub struct TimerGroup {
    scheduler: Scheduler,
    timers: Vec<TimerId>,
}

impl TimerGroup {
    /// Empty group scheduling on `scheduler`.
    #[must_use]
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler,
            timers: Vec::new(),
        }
    }

    /// Schedule a callback owned by this group.
    pub fn schedule(
        &mut self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> TimerId {
        self.timers
            .retain(|&id| self.scheduler.is_pending(id));
        let id = self.scheduler.schedule(delay, callback);
        self.timers.push(id);
        id
    }

    /// Cancel one timer of this group.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.retain(|&t| t != id);
        self.scheduler.cancel(id)
    }

    /// Cancel every pending timer of this group.
    pub fn cancel_all(&mut self) {
        for id in self.timers.drain(..) {
            let _ = self.scheduler.cancel(id);
        }
    }

    /// Number of this group's timers that have not fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers
            .iter()
            .filter(|&&id| self.scheduler.is_pending(id))
            .count()
    }
}

impl Drop for TimerGroup {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
