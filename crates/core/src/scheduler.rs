//! Deferred task queue.
//!
//! Follow-up actions that must wait for a cosmetic delay (the celebration after
//! a correct guess, the wrong marker after a miss) are queued here with a due
//! time and executed by the first tick at or after it. Only one round is in
//! flight at a time, so the queue is tiny and lives on the stack.

use arrayvec::ArrayVec;

/// Maximum number of pending tasks.
pub const MAX_PENDING_TASKS: usize = 4;

/// Work the game state can defer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Generate and show the round for the given level.
    StartLevel(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    task: ScheduledTask,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: ArrayVec<Pending, MAX_PENDING_TASKS>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run once `now_ms >= due_ms`.
    ///
    /// Returns false (and drops the task) when the queue is full.
    pub fn schedule(&mut self, due_ms: u64, task: ScheduledTask) -> bool {
        if self.pending.try_push(Pending { due_ms, task }).is_err() {
            log::warn!("scheduler full, dropping {:?} due at {}ms", task, due_ms);
            return false;
        }
        true
    }

    /// Remove and return the earliest task due at `now_ms`, if any.
    ///
    /// Tasks with equal due times come out in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledTask> {
        let mut best: Option<usize> = None;
        for (i, p) in self.pending.iter().enumerate() {
            if p.due_ms > now_ms {
                continue;
            }
            match best {
                Some(b) if self.pending[b].due_ms <= p.due_ms => {}
                _ => best = Some(i),
            }
        }
        best.map(|i| self.pending.remove(i).task)
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
