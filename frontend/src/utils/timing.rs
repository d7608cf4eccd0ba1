//! Timer plumbing shared by every feature that listens to scroll, resize or
//! mouse movement.
//!
//! Timers go through the [`Scheduler`] trait so that [`debounce`] and
//! [`throttle`] are plain composition and can be driven by a virtual clock
//! in tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

pub trait Scheduler {
    /// Milliseconds on a monotonic-enough clock.
    fn now_ms(&self) -> f64;
    /// Runs `task` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
    /// Drops a pending task. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TaskHandle);
}

/// `setTimeout`-backed scheduler. Clones share the same pending set.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    timers: Rc<TimerSlots<Timeout>>,
}

/// Bookkeeping for live timers.
///
/// A timer cannot be dropped from inside its own callback, so the one that
/// just fired is parked in `spent` and freed when the next timer fires.
struct TimerSlots<T> {
    next_id: Cell<u64>,
    pending: RefCell<HashMap<u64, T>>,
    spent: RefCell<Option<T>>,
}

impl<T> Default for TimerSlots<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            pending: RefCell::new(HashMap::new()),
            spent: RefCell::new(None),
        }
    }
}

impl<T> TimerSlots<T> {
    fn reserve(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn insert(&self, id: u64, timer: T) {
        self.pending.borrow_mut().insert(id, timer);
    }

    /// Called from inside the callback of timer `id`.
    fn fired(&self, id: u64) {
        let previous = self.spent.borrow_mut().take();
        drop(previous);
        let current = self.pending.borrow_mut().remove(&id);
        *self.spent.borrow_mut() = current;
    }

    fn cancel(&self, id: u64) -> Option<T> {
        self.pending.borrow_mut().remove(&id)
    }

    #[cfg(test)]
    fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let id = self.timers.reserve();
        let timers: Weak<TimerSlots<Timeout>> = Rc::downgrade(&self.timers);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(timers) = timers.upgrade() {
                timers.fired(id);
            }
            task();
        });
        self.timers.insert(id, timeout);
        TaskHandle(id)
    }

    fn cancel(&self, handle: TaskHandle) {
        // Dropping a gloo Timeout clears it.
        drop(self.timers.cancel(handle.0));
    }
}

/// Wraps `func` so only the last call inside any `wait_ms` window runs.
pub fn debounce<A, S, F>(scheduler: S, wait_ms: u32, func: F) -> Debounced<A, S>
where
    A: 'static,
    S: Scheduler + 'static,
    F: Fn(A) + 'static,
{
    Debounced {
        state: Rc::new(DebounceState {
            scheduler,
            wait_ms,
            func: Box::new(func),
            pending: Cell::new(None),
        }),
    }
}

pub struct Debounced<A, S: Scheduler> {
    state: Rc<DebounceState<A, S>>,
}

struct DebounceState<A, S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    func: Box<dyn Fn(A)>,
    pending: Cell<Option<TaskHandle>>,
}

impl<A, S: Scheduler> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A: 'static, S: Scheduler + 'static> Debounced<A, S> {
    pub fn call(&self, args: A) {
        let state = &self.state;
        if let Some(previous) = state.pending.take() {
            state.scheduler.cancel(previous);
        }
        let weak = Rc::downgrade(state);
        let handle = state.scheduler.schedule(
            state.wait_ms,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.pending.set(None);
                    (state.func)(args);
                }
            }),
        );
        state.pending.set(Some(handle));
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        let pending = self.state.pending.get();
        pending.is_some()
    }
}

impl<A, S: Scheduler> Drop for DebounceState<A, S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.scheduler.cancel(pending);
        }
    }
}

/// Wraps `func` so it runs at most once per `limit_ms`: the first call goes
/// through immediately, calls inside the window collapse into one trailing
/// call carrying the latest arguments.
pub fn throttle<A, S, F>(scheduler: S, limit_ms: u32, func: F) -> Throttled<A, S>
where
    A: 'static,
    S: Scheduler + 'static,
    F: Fn(A) + 'static,
{
    Throttled {
        state: Rc::new(ThrottleState {
            scheduler,
            limit_ms,
            func: Box::new(func),
            last_ran: Cell::new(None),
            trailing: Cell::new(None),
        }),
    }
}

pub struct Throttled<A, S: Scheduler> {
    state: Rc<ThrottleState<A, S>>,
}

struct ThrottleState<A, S: Scheduler> {
    scheduler: S,
    limit_ms: u32,
    func: Box<dyn Fn(A)>,
    last_ran: Cell<Option<f64>>,
    trailing: Cell<Option<TaskHandle>>,
}

impl<A, S: Scheduler> Clone for Throttled<A, S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A, S: Scheduler> ThrottleState<A, S> {
    fn elapsed_since_run(&self) -> Option<f64> {
        self.last_ran
            .get()
            .map(|last| self.scheduler.now_ms() - last)
    }

    fn run(&self, args: A) {
        self.last_ran.set(Some(self.scheduler.now_ms()));
        (self.func)(args);
    }

    fn cancel_trailing(&self) {
        if let Some(trailing) = self.trailing.take() {
            self.scheduler.cancel(trailing);
        }
    }
}

impl<A: 'static, S: Scheduler + 'static> Throttled<A, S> {
    pub fn call(&self, args: A) {
        let state = &self.state;
        let limit = f64::from(state.limit_ms);
        state.cancel_trailing();
        match state.elapsed_since_run() {
            Some(elapsed) if elapsed < limit => {
                schedule_trailing(state, remaining_ms(limit, elapsed), args);
            }
            _ => state.run(args),
        }
    }
}

fn remaining_ms(limit: f64, elapsed: f64) -> u32 {
    (limit - elapsed).max(0.0).ceil() as u32
}

fn schedule_trailing<A: 'static, S: Scheduler + 'static>(
    state: &Rc<ThrottleState<A, S>>,
    delay_ms: u32,
    args: A,
) {
    let weak = Rc::downgrade(state);
    let handle = state.scheduler.schedule(
        delay_ms,
        Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.trailing.set(None);
            let limit = f64::from(state.limit_ms);
            match state.elapsed_since_run() {
                // Browser timers can fire a touch early.
                Some(elapsed) if elapsed < limit => {
                    schedule_trailing(&state, remaining_ms(limit, elapsed), args);
                }
                _ => state.run(args),
            }
        }),
    );
    state.trailing.set(Some(handle));
}

impl<A, S: Scheduler> Drop for ThrottleState<A, S> {
    fn drop(&mut self) {
        self.cancel_trailing();
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::*;

    struct ScheduledTask {
        id: u64,
        due_at: f64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ManualClock {
        now: Cell<f64>,
        next_id: Cell<u64>,
        queue: RefCell<Vec<ScheduledTask>>,
    }

    /// Virtual clock: tasks only run when the test advances time.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<ManualClock>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Moves the clock forward, running due tasks in (due time, creation) order.
        pub fn advance(&self, delta_ms: f64) {
            let target = self.clock.now.get() + delta_ms;
            loop {
                let next = {
                    let mut queue = self.clock.queue.borrow_mut();
                    let next_idx = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due_at <= target)
                        .min_by(|(_, a), (_, b)| {
                            a.due_at.total_cmp(&b.due_at).then(a.id.cmp(&b.id))
                        })
                        .map(|(idx, _)| idx);
                    next_idx.map(|idx| queue.remove(idx))
                };
                let Some(next) = next else {
                    break;
                };
                if next.due_at > self.clock.now.get() {
                    self.clock.now.set(next.due_at);
                }
                (next.task)();
            }
            self.clock.now.set(target);
        }

        pub fn pending(&self) -> usize {
            self.clock.queue.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn now_ms(&self) -> f64 {
            self.clock.now.get()
        }

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
            let id = self.clock.next_id.get();
            self.clock.next_id.set(id + 1);
            self.clock.queue.borrow_mut().push(ScheduledTask {
                id,
                due_at: self.clock.now.get() + f64::from(delay_ms),
                task,
            });
            TaskHandle(id)
        }

        fn cancel(&self, handle: TaskHandle) {
            self.clock
                .queue
                .borrow_mut()
                .retain(|task| task.id != handle.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(T) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn debounce_fires_once_with_last_arguments() {
        let clock = ManualScheduler::new();
        let (calls, record) = recorder::<i32>();
        let debounced = debounce(clock.clone(), 100, record);

        for value in 1..=5 {
            debounced.call(value);
            clock.advance(10.0);
        }
        assert!(calls.borrow().is_empty());
        assert!(debounced.is_pending());

        clock.advance(200.0);
        assert_eq!(*calls.borrow(), vec![5]);
        assert!(!debounced.is_pending());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn debounce_waits_from_the_latest_call() {
        let clock = ManualScheduler::new();
        let (calls, record) = recorder::<()>();
        let debounced = debounce(clock.clone(), 100, record);

        debounced.call(());
        clock.advance(90.0);
        debounced.call(());
        clock.advance(90.0);
        assert!(calls.borrow().is_empty());
        clock.advance(10.0);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn debounce_forwards_tuples_unchanged() {
        let clock = ManualScheduler::new();
        let (calls, record) = recorder::<(f64, &'static str)>();
        let debounced = debounce(clock.clone(), 16, record);

        debounced.call((1.5, "first"));
        debounced.call((2.5, "second"));
        clock.advance(16.0);
        assert_eq!(*calls.borrow(), vec![(2.5, "second")]);
    }

    #[test]
    fn debounce_instances_do_not_share_timers() {
        let clock = ManualScheduler::new();
        let (left_calls, left) = recorder::<u8>();
        let (right_calls, right) = recorder::<u8>();
        let left = debounce(clock.clone(), 50, left);
        let right = debounce(clock.clone(), 50, right);

        left.call(1);
        right.call(2);
        left.call(3);
        clock.advance(50.0);
        assert_eq!(*left_calls.borrow(), vec![3]);
        assert_eq!(*right_calls.borrow(), vec![2]);
    }

    #[test]
    fn dropping_a_debounced_wrapper_cancels_its_timer() {
        let clock = ManualScheduler::new();
        let (calls, record) = recorder::<u8>();
        let debounced = debounce(clock.clone(), 50, record);
        debounced.call(1);
        drop(debounced);
        assert_eq!(clock.pending(), 0);
        clock.advance(100.0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn throttle_runs_leading_then_once_per_window() {
        let clock = ManualScheduler::new();
        let (calls, record) = recorder::<(f64, u32)>();
        let time = clock.clone();
        let throttled = throttle(clock.clone(), 100, move |arg: u32| {
            record((time.now_ms(), arg))
        });

        for tick in 0..50u32 {
            throttled.call(tick * 10);
            clock.advance(10.0);
        }
        clock.advance(200.0);

        let calls = calls.borrow();
        assert!((5..=6).contains(&calls.len()), "got {} calls", calls.len());
        assert_eq!(calls[0], (0.0, 0));
        for pair in calls.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= 100.0);
        }
        // The trailing call carries the most recent arguments.
        assert_eq!(calls.last().map(|c| c.1), Some(490));
    }

    #[test]
    fn throttle_is_immediate_again_after_a_quiet_window() {
        let clock = ManualScheduler::new();
        let (calls, record) = recorder::<u8>();
        let throttled = throttle(clock.clone(), 100, record);

        throttled.call(1);
        clock.advance(250.0);
        throttled.call(2);
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn throttle_collapses_a_burst_into_one_trailing_call() {
        let clock = ManualScheduler::new();
        let (calls, record) = recorder::<u8>();
        let throttled = throttle(clock.clone(), 100, record);

        throttled.call(1);
        throttled.call(2);
        throttled.call(3);
        assert_eq!(*calls.borrow(), vec![1]);
        clock.advance(99.0);
        assert_eq!(*calls.borrow(), vec![1]);
        clock.advance(1.0);
        assert_eq!(*calls.borrow(), vec![1, 3]);
    }

    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn timer_slots_release_fired_and_cancelled_timers() {
        let dropped = Rc::new(Cell::new(0));
        let slots = TimerSlots::default();
        let first = slots.reserve();
        let second = slots.reserve();
        let third = slots.reserve();
        for id in [first, second, third] {
            slots.insert(id, Tracked(Rc::clone(&dropped)));
        }

        slots.fired(first);
        assert_eq!(slots.pending_len(), 2);
        // Still parked, its callback may be running.
        assert_eq!(dropped.get(), 0);

        slots.fired(second);
        assert_eq!(slots.pending_len(), 1);
        assert_eq!(dropped.get(), 1);

        drop(slots.cancel(third));
        assert_eq!(slots.pending_len(), 0);
        assert_eq!(dropped.get(), 2);

        assert!(slots.cancel(third).is_none());
        drop(slots);
        assert_eq!(dropped.get(), 3);
    }
}
