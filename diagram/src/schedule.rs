//! Deferred one-shot tasks.
//!
//! The renderer never sleeps. When the pulse needs to resume after a pause
//! it hands a task to a [`Scheduler`], which runs it later on the same
//! thread that drives `render()`. Browser builds use
//! [`crate::web::WindowScheduler`]; tests and the headless host use
//! [`ManualScheduler`], whose clock only moves when told to.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::{Cell, RefCell};
use std::time::Duration;

/// A single-threaded deferred task.
pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay, on the thread that drives rendering.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

/// A scheduler over a virtual clock.
///
/// Tasks fire only inside [`ManualScheduler::advance`], in due-time order,
/// ties broken by scheduling order. A task may schedule further tasks; those
/// fire in the same `advance` call if they fall due before its end.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `by`, firing every task that falls due.
    ///
    /// Returns how many tasks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let until = self.now.get() + by;
        let mut fired = 0;
        while let Some(next) = self.pop_due(until) {
            self.now.set(next.due);
            (next.task)();
            fired += 1;
        }
        self.now.set(until);
        fired
    }

    fn pop_due(&self, until: Duration) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(queue.swap_remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending { due: self.now.get() + delay, seq, task });
    }
}
