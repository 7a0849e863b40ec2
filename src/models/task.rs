//! Task model.
//!
//! A task is a unit of work with a fixed required processing length and a
//! completion counter advanced one unit at a time by the server holding it.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A unit of work.
///
/// `length` is fixed at creation; the completion counter only moves
/// forward, one unit per [`advance`](Task::advance). A task is done once
/// its counter has reached its length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Required processing units.
    pub length: u32,
    completion: u32,
}

impl Task {
    /// Creates a task with a fixed length.
    pub fn new(length: u32) -> Self {
        Self {
            length,
            completion: 0,
        }
    }

    /// Creates a task with a length drawn uniformly from `[0, max_length)`.
    ///
    /// `max_length` must be positive; the range would otherwise be empty.
    pub fn random<R: Rng + ?Sized>(max_length: u32, rng: &mut R) -> Self {
        Self::new(rng.random_range(0..max_length))
    }

    /// Processing units received so far.
    pub fn completion(&self) -> u32 {
        self.completion
    }

    /// Advances completion by one unit.
    ///
    /// Advancing a task that is already done is silent: the counter still
    /// increments and the done status stays done.
    pub fn advance(&mut self) {
        self.completion += 1;
    }

    /// Whether the task has received at least `length` units of work.
    pub fn is_done(&self) -> bool {
        self.length <= self.completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_done_exactly_at_length() {
        let mut task = Task::new(5);
        for step in 0..5 {
            assert!(!task.is_done(), "not done after {step} advances");
            task.advance();
        }
        assert!(task.is_done());
        assert_eq!(task.completion(), 5);
    }

    #[test]
    fn test_zero_length_done_immediately() {
        let task = Task::new(0);
        assert!(task.is_done());
        assert_eq!(task.completion(), 0);
    }

    #[test]
    fn test_advance_past_done_is_silent() {
        let mut task = Task::new(1);
        task.advance();
        assert!(task.is_done());

        task.advance();
        task.advance();
        assert!(task.is_done());
        assert_eq!(task.completion(), 3);
    }

    #[test]
    fn test_random_length_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let task = Task::random(1000, &mut rng);
            assert!(task.length < 1000);
            assert_eq!(task.completion(), 0);
        }
    }
}
