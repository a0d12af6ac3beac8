//! Cancellable timers.
//!
//! Components never talk to `setInterval`/`setTimeout` directly. They ask a
//! [`Scheduler`] for a task and keep the returned [`TaskHandle`] so the task
//! can be cancelled when the component is torn down. The browser scheduler
//! lives in `app::timers`; [`ManualClock`] is a virtual clock that runs the
//! same tasks deterministically off-browser.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
    time::Duration,
};

use leptos::prelude::{on_cleanup, LocalStorage, StoredValue, UpdateValue, WithValue};

/// Returned by repeating tasks to say whether they want to run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub trait TaskHandle {
    /// Stops the task. Cancelling a finished or already cancelled task is a no-op.
    fn cancel(&self);
}

pub trait Scheduler {
    type Handle: TaskHandle;

    /// Runs `task` every `period` until it returns [`Flow::Stop`] or is cancelled.
    fn every(&self, period: Duration, task: Box<dyn FnMut() -> Flow>) -> Self::Handle;

    /// Runs `task` once after `delay` unless cancelled first.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

enum Job {
    Repeat(Box<dyn FnMut() -> Flow>),
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    due: Duration,
    period: Option<Duration>,
    // taken out while the job runs
    job: Option<Job>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

impl ClockState {
    fn insert(&mut self, due: Duration, period: Option<Duration>, job: Job) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                due,
                period,
                job: Some(job),
            },
        );
        id
    }

    fn next_due(&self, limit: Duration) -> Option<(u64, Duration)> {
        self.entries
            .iter()
            .filter(|(_, e)| e.job.is_some() && e.due <= limit)
            .min_by_key(|(id, e)| (e.due, **id))
            .map(|(id, e)| (*id, e.due))
    }
}

/// A virtual clock. Time only moves when [`ManualClock::advance`] is called,
/// and tasks fire in due order (ties broken by scheduling order).
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualTask {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl TaskHandle for ManualTask {
    fn cancel(&self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().entries.remove(&self.id);
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks still scheduled.
    pub fn pending(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Moves time forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let limit = self.now() + by;
        loop {
            let (id, job) = {
                let mut state = self.state.borrow_mut();
                let Some((id, due)) = state.next_due(limit) else {
                    break;
                };
                state.now = due;
                let Some(entry) = state.entries.get_mut(&id) else {
                    break;
                };
                match entry.job.take() {
                    Some(job) => (id, job),
                    None => break,
                }
            };

            // the borrow is released so the task may schedule or cancel
            match job {
                Job::Once(task) => {
                    self.state.borrow_mut().entries.remove(&id);
                    task();
                }
                Job::Repeat(mut task) => {
                    let flow = task();
                    let mut state = self.state.borrow_mut();
                    if flow == Flow::Stop {
                        state.entries.remove(&id);
                    } else if let Some(entry) = state.entries.get_mut(&id) {
                        // a missing entry was cancelled from inside the task
                        entry.due += entry.period.unwrap_or(Duration::from_millis(1));
                        entry.job = Some(Job::Repeat(task));
                    }
                }
            }
        }
        self.state.borrow_mut().now = limit;
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualTask;

    fn every(&self, period: Duration, task: Box<dyn FnMut() -> Flow>) -> ManualTask {
        let period = period.max(Duration::from_millis(1));
        let mut state = self.state.borrow_mut();
        let due = state.now + period;
        let id = state.insert(due, Some(period), Job::Repeat(task));
        ManualTask {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualTask {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let id = state.insert(due, None, Job::Once(task));
        ManualTask {
            id,
            state: Rc::downgrade(&self.state),
        }
    }
}

/// Holds the task a component currently owns. The task is cancelled when a
/// new one replaces it and when the owning reactive scope is cleaned up.
pub struct TaskSlot<H: 'static>(StoredValue<Option<H>, LocalStorage>);

impl<H: 'static> Clone for TaskSlot<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for TaskSlot<H> {}

impl<H: TaskHandle + 'static> TaskSlot<H> {
    /// Must be called inside a reactive owner, usually a component body.
    pub fn new() -> Self {
        let slot = StoredValue::new_local(None::<H>);
        on_cleanup(move || {
            slot.try_update_value(|held| {
                if let Some(task) = held.take() {
                    task.cancel();
                }
            });
        });
        Self(slot)
    }

    pub fn replace(&self, task: H) {
        self.0.try_update_value(|held| {
            if let Some(previous) = held.replace(task) {
                previous.cancel();
            }
        });
    }

    /// Starts a task only if the slot has never held one (or was released).
    /// Returns whether `start` ran.
    pub fn start_if_empty(&self, start: impl FnOnce() -> H) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.replace(start());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.0.try_with_value(Option::is_none).unwrap_or(true)
    }

    /// Forgets the held task without cancelling it, once it has finished on its own.
    pub fn release(&self) {
        self.0.try_update_value(Option::take);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use leptos::prelude::Owner;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn interval_fires_once_per_period() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let _task = clock.every(
            ms(150),
            Box::new(move || {
                c.set(c.get() + 1);
                Flow::Continue
            }),
        );

        clock.advance(ms(149));
        assert_eq!(count.get(), 0);
        clock.advance(ms(1));
        assert_eq!(count.get(), 1);
        clock.advance(ms(450));
        assert_eq!(count.get(), 4);
        assert_eq!(clock.now(), ms(600));
    }

    #[test]
    fn stop_removes_the_interval() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let _task = clock.every(
            ms(10),
            Box::new(move || {
                c.set(c.get() + 1);
                if c.get() == 3 {
                    Flow::Stop
                } else {
                    Flow::Continue
                }
            }),
        );

        clock.advance(ms(1000));
        assert_eq!(count.get(), 3);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cancelled_timeout_never_runs() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        let task = clock.after(ms(2000), Box::new(move || f.set(true)));

        clock.advance(ms(1000));
        task.cancel();
        clock.advance(ms(5000));
        assert!(!fired.get());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn tasks_fire_in_due_order() {
        let clock = ManualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, name) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            clock.after(ms(delay), Box::new(move || log.borrow_mut().push(name)));
        }

        clock.advance(ms(30));
        assert_eq!(*log.borrow(), ["a", "b", "c"]);
    }

    #[test]
    fn task_can_schedule_from_inside() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(false));
        let inner_clock = clock.clone();
        let f = Rc::clone(&fired);
        clock.after(
            ms(5),
            Box::new(move || {
                let f = Rc::clone(&f);
                inner_clock.after(ms(5), Box::new(move || f.set(true)));
            }),
        );

        clock.advance(ms(10));
        assert!(fired.get());
    }

    fn counting_interval(clock: &ManualClock, count: &Rc<Cell<u32>>) -> ManualTask {
        let c = Rc::clone(count);
        clock.every(
            ms(10),
            Box::new(move || {
                c.set(c.get() + 1);
                Flow::Continue
            }),
        )
    }

    #[test]
    fn slot_cancels_its_task_on_cleanup() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let owner = Owner::new();

        owner.with(|| {
            let slot = TaskSlot::new();
            slot.replace(counting_interval(&clock, &count));
        });
        clock.advance(ms(30));
        assert_eq!(count.get(), 3);

        owner.cleanup();
        assert_eq!(clock.pending(), 0);
        clock.advance(ms(100));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn replacing_cancels_the_previous_task() {
        let clock = ManualClock::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let owner = Owner::new();

        let slot = owner.with(TaskSlot::new);
        slot.replace(counting_interval(&clock, &first));
        clock.advance(ms(20));
        slot.replace(counting_interval(&clock, &second));
        clock.advance(ms(20));

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
        assert_eq!(clock.pending(), 1);
        owner.cleanup();
    }

    #[test]
    fn start_if_empty_runs_once_per_slot() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let owner = Owner::new();

        let slot = owner.with(TaskSlot::new);
        assert!(slot.start_if_empty(|| counting_interval(&clock, &count)));
        assert!(!slot.start_if_empty(|| counting_interval(&clock, &count)));
        assert_eq!(clock.pending(), 1);

        owner.cleanup();
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn released_task_survives_cleanup() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(false));
        let owner = Owner::new();

        let slot = owner.with(TaskSlot::new);
        let f = Rc::clone(&fired);
        slot.replace(clock.after(ms(10), Box::new(move || f.set(true))));
        slot.release();
        assert!(slot.is_empty());

        owner.cleanup();
        clock.advance(ms(10));
        assert!(fired.get());
    }
}
