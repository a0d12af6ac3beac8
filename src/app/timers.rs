use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use leptos::prelude::*;

use crate::schedule::{Flow, Scheduler, TaskHandle};

/// `setInterval`/`setTimeout` on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[derive(Debug, Clone, Copy)]
pub enum BrowserTask {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
    /// The browser refused the timer; there is nothing to cancel.
    Unscheduled,
}

impl TaskHandle for BrowserTask {
    fn cancel(&self) {
        match self {
            Self::Interval(handle) => handle.clear(),
            Self::Timeout(handle) => handle.clear(),
            Self::Unscheduled => {}
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTask;

    fn every(&self, period: Duration, task: Box<dyn FnMut() -> Flow>) -> BrowserTask {
        let task = RefCell::new(task);
        let own_handle = Rc::new(Cell::new(None::<IntervalHandle>));
        let res = set_interval_with_handle(
            {
                let own_handle = Rc::clone(&own_handle);
                move || {
                    let flow = (*task.borrow_mut())();
                    if flow == Flow::Stop {
                        if let Some(handle) = own_handle.get() {
                            handle.clear();
                        }
                    }
                }
            },
            period,
        );
        match res {
            Ok(handle) => {
                own_handle.set(Some(handle));
                BrowserTask::Interval(handle)
            }
            Err(err) => {
                log::warn!("couldn't start interval: {err:?}");
                BrowserTask::Unscheduled
            }
        }
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> BrowserTask {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => BrowserTask::Timeout(handle),
            Err(err) => {
                log::warn!("couldn't start timeout: {err:?}");
                BrowserTask::Unscheduled
            }
        }
    }
}
