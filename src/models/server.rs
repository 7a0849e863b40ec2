//! Server model.
//!
//! A server owns a FIFO queue of tasks and a fixed per-tick speed budget.
//! Within one tick it clears finished tasks from the queue head for free
//! and spends its budget advancing the current head one unit at a time.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::Task;

/// A queue-holding worker with a fixed processing speed.
///
/// The queue is owned exclusively by the server; tasks enter via
/// [`enqueue`](Server::enqueue) and leave only by completing. The speed
/// budget is per-tick and never accumulates across ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Advance sub-steps available per tick.
    pub speed: u32,
    queue: VecDeque<Task>,
    tasks_completed: usize,
}

impl Server {
    /// Creates a server with the given speed, an empty queue, and a zero
    /// completion counter.
    pub fn new(speed: u32) -> Self {
        Self {
            speed,
            queue: VecDeque::new(),
            tasks_completed: 0,
        }
    }

    /// Appends a task to the tail of the queue.
    ///
    /// The server enforces no capacity limit; the assignment policy
    /// governs how many tasks it receives.
    pub fn enqueue(&mut self, task: Task) {
        self.queue.push_back(task);
    }

    /// Whether the queue is currently empty.
    pub fn is_free(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of tasks currently queued.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Tasks completed and removed from the queue so far.
    pub fn tasks_completed(&self) -> usize {
        self.tasks_completed
    }

    /// Processes the queue for one tick: up to `speed` advance sub-steps.
    ///
    /// Each sub-step first clears finished tasks from the queue head —
    /// removals do not spend budget and any number may happen per tick —
    /// then advances the head task by one unit, spending one unit of
    /// budget. An empty queue ends the tick early; unspent budget is
    /// forfeited, not carried over.
    ///
    /// A task whose final advance happens on the last sub-step stays
    /// queued (done) until the next tick clears it. A zero-length task is
    /// cleared without ever being advanced.
    pub fn tick(&mut self) {
        for _ in 0..self.speed {
            while self.queue.front().is_some_and(|task| task.is_done()) {
                self.queue.pop_front();
                self.tasks_completed += 1;
            }
            match self.queue.front_mut() {
                Some(task) => task.advance(),
                None => break,
            }
        }
    }
}
