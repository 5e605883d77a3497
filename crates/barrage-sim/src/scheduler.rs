//! Tick-count task scheduler — the scheduling primitive behind the volley
//! trigger.
//!
//! Every period is a tick count against the engine's tick counter; there is
//! no second clock anywhere in the simulation. Registration returns a
//! cancellable handle immediately; the first firing happens when the engine
//! next runs its systems, never inside the registering call.

use std::collections::HashMap;

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct RepeatingTask {
    cannon_number: u32,
    period: u64,
    anchor_tick: u64,
}

/// Registry of repeating tasks keyed by handle.
#[derive(Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    tasks: HashMap<u64, RepeatingTask>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task firing every `period` ticks, first at `now`.
    pub fn schedule_repeating(&mut self, cannon_number: u32, period: u64, now: u64) -> TaskHandle {
        debug_assert!(period > 0, "repeating task needs a non-zero period");
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.insert(
            id,
            RepeatingTask {
                cannon_number,
                period,
                anchor_tick: now,
            },
        );
        TaskHandle(id)
    }

    /// Cancel a task. Returns false if the handle was already cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle.0).is_some()
    }

    /// Whether a handle still refers to a registered task.
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle.0)
    }

    /// Number of registered tasks.
    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }

    /// Tasks due at `now`, in registration order.
    pub fn due(&self, now: u64) -> Vec<(TaskHandle, u32)> {
        let mut due: Vec<(TaskHandle, u32)> = self
            .tasks
            .iter()
            .filter(|(_, task)| {
                now >= task.anchor_tick && (now - task.anchor_tick) % task.period == 0
            })
            .map(|(&id, task)| (TaskHandle(id), task.cannon_number))
            .collect();
        due.sort_unstable_by_key(|(handle, _)| handle.0);
        due
    }
}
