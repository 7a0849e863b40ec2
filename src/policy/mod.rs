//! Task assignment policies.
//!
//! A policy decides, each tick, in which order the servers are visited and
//! how many pending tasks each server is offered on its visit. The shared
//! tick body — popping tasks from the pool, enqueueing them, advancing the
//! server — lives in [`Simulation::step`](crate::sim::Simulation::step).
//!
//! # Usage
//!
//! ```
//! use greedy_sim::policy::Greedy;
//! use greedy_sim::sim::{SimConfig, Simulation};
//!
//! let config = SimConfig::new(2, 2, 50).with_seed(7);
//! let report = Simulation::new(config).run(&Greedy);
//! assert_eq!(report.total_completed(), 50);
//! ```

mod greedy;

pub use greedy::{Greedy, ImprovedGreedy};

use rand::RngCore;
use std::fmt::Debug;

use crate::models::Server;

/// A per-tick task assignment policy.
///
/// Randomness is injected through the `rng` parameter so that runs are
/// reproducible under a fixed seed; policies must not reach for an
/// ambient random source.
pub trait AssignmentPolicy: Debug {
    /// Policy name (e.g., "greedy").
    fn name(&self) -> &'static str;

    /// Order in which servers are visited this tick.
    ///
    /// Must return a permutation of `0..server_count`.
    fn visit_order(&self, server_count: usize, rng: &mut dyn RngCore) -> Vec<usize>;

    /// How many pending tasks to offer the server on its visit.
    ///
    /// Offers are bounded by pool availability: offering more than the
    /// pool holds assigns whatever remains.
    fn offer_count(&self, server: &Server) -> usize;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
