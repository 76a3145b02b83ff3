//! Deferred work: timer ticks and delayed puzzle resolutions.
//!
//! Tasks are plain data. Whoever drives the hub advances the clock and
//! feeds each due task back in, so the same queue runs against wall-clock
//! deltas in the terminal front end and against a fake clock in tests.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use tracing::{debug, instrument, trace};

use crate::GameKind;

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A one-shot puzzle resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    /// Settle the two face-up memory cards (match or hide).
    SettlePair,
    /// Hide the cards shown by a memory hint.
    EndPeek,
}

/// Work the scheduler hands back when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// One timer tick for `game`. `run` identifies the start that armed it.
    Tick {
        /// Timer owner.
        game: GameKind,
        /// Run counter at arm time.
        run: u64,
    },
    /// A delayed resolution, valid only for the puzzle generation it names.
    Resolve {
        /// Controller that scheduled it.
        game: GameKind,
        /// Puzzle generation at schedule time.
        generation: u64,
        /// What to resolve.
        action: Deferred,
    },
}

/// Capability to run tasks later, once or repeatedly.
pub trait Scheduler: fmt::Debug {
    /// Current virtual time.
    fn now(&self) -> Duration;

    /// Runs `task` once after `delay`.
    fn schedule_once(&mut self, delay: Duration, task: Task) -> TaskId;

    /// Runs `task` every `period` until cancelled.
    fn schedule_every(&mut self, period: Duration, task: Task) -> TaskId;

    /// Cancels a pending task. Returns whether anything was removed.
    fn cancel(&mut self, id: TaskId) -> bool;

    /// Pops the earliest task due at or before `until`, moving the clock to
    /// its due time. When nothing is due the clock moves to `until`.
    fn pop_due(&mut self, until: Duration) -> Option<Task>;

    /// Number of pending tasks.
    fn pending(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    task: Task,
    every: Option<Duration>,
}

/// Virtual-time task queue.
///
/// Tasks due at the same instant run in scheduling order.
#[derive(Debug, Default)]
pub struct TaskQueue {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TaskId), Entry>,
    due_at: HashMap<TaskId, Duration>,
}

impl TaskQueue {
    /// Creates an empty queue at time zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, due: Duration, entry: Entry) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.insert((due, id), entry);
        self.due_at.insert(id, due);
        id
    }
}

impl Scheduler for TaskQueue {
    fn now(&self) -> Duration {
        self.now
    }

    #[instrument(skip(self))]
    fn schedule_once(&mut self, delay: Duration, task: Task) -> TaskId {
        let id = self.insert(self.now + delay, Entry { task, every: None });
        debug!(?id, "Scheduled one-shot task");
        id
    }

    #[instrument(skip(self))]
    fn schedule_every(&mut self, period: Duration, task: Task) -> TaskId {
        // A zero period would spin forever inside a single pop_due sweep.
        let period = period.max(Duration::from_millis(1));
        let id = self.insert(
            self.now + period,
            Entry {
                task,
                every: Some(period),
            },
        );
        debug!(?id, "Scheduled repeating task");
        id
    }

    #[instrument(skip(self))]
    fn cancel(&mut self, id: TaskId) -> bool {
        match self.due_at.remove(&id) {
            Some(due) => {
                self.queue.remove(&(due, id));
                debug!(?id, "Cancelled task");
                true
            }
            None => false,
        }
    }

    fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let due = match self.queue.first_key_value() {
            Some((&(due, _), _)) if due <= until => due,
            _ => {
                self.now = self.now.max(until);
                return None;
            }
        };

        let ((_, id), entry) = self.queue.pop_first()?;
        self.now = self.now.max(due);

        match entry.every {
            Some(period) => {
                let next = due + period;
                self.queue.insert((next, id), entry);
                self.due_at.insert(id, next);
            }
            None => {
                self.due_at.remove(&id);
            }
        }

        trace!(?id, task = ?entry.task, "Task due");
        Some(entry.task)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
