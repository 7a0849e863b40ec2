//! Simulation construction and tick loop.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::RunReport;
use crate::models::{Server, Task};
use crate::policy::AssignmentPolicy;

/// Simulation parameters.
///
/// The default speed model is the fast/slow split of the original
/// experiment: fast servers process 3 units per tick, slow servers 1,
/// task lengths are drawn uniformly from `[0, 1000)`. All of it is
/// overridable through the builder methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of fast servers (m).
    pub fast_servers: usize,
    /// Number of slow servers (k).
    pub slow_servers: usize,
    /// Number of tasks (n).
    pub tasks: usize,
    /// Per-tick speed of fast servers.
    pub fast_speed: u32,
    /// Per-tick speed of slow servers.
    pub slow_speed: u32,
    /// Task lengths are drawn uniformly from `[0, max_task_length)`.
    pub max_task_length: u32,
    /// Seed for task lengths and policy visit orders.
    pub seed: u64,
}

impl SimConfig {
    /// Creates a config with the default speed model.
    pub fn new(fast_servers: usize, slow_servers: usize, tasks: usize) -> Self {
        Self {
            fast_servers,
            slow_servers,
            tasks,
            fast_speed: 3,
            slow_speed: 1,
            max_task_length: 1000,
            seed: 0,
        }
    }

    /// Sets the fast and slow per-tick speeds.
    pub fn with_speeds(mut self, fast_speed: u32, slow_speed: u32) -> Self {
        self.fast_speed = fast_speed;
        self.slow_speed = slow_speed;
        self
    }

    /// Sets the exclusive upper bound on random task lengths.
    pub fn with_max_task_length(mut self, max_task_length: u32) -> Self {
        self.max_task_length = max_task_length;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of servers.
    pub fn server_count(&self) -> usize {
        self.fast_servers + self.slow_servers
    }
}

/// A single simulation run: servers, pending pool, seeded RNG, tick count.
///
/// Servers are created fast block first, then slow, and keep that index
/// order for the run's duration. The pending pool exclusively owns
/// unassigned tasks; assignment pops from its front and hands each task
/// to exactly one server.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    servers: Vec<Server>,
    pool: VecDeque<Task>,
    rng: SmallRng,
    ticks: u64,
}

impl Simulation {
    /// Builds the servers and draws the task pool from the seeded RNG.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pool = (0..config.tasks)
            .map(|_| Task::random(config.max_task_length, &mut rng))
            .collect();
        Self {
            servers: Self::build_servers(&config),
            config,
            pool,
            rng,
            ticks: 0,
        }
    }

    /// Builds a simulation over a fixed task pool instead of random
    /// lengths. Pool order is preserved: the front is assigned first.
    /// `config.tasks` is ignored in favor of the given pool.
    pub fn with_tasks(config: SimConfig, tasks: Vec<Task>) -> Self {
        Self {
            servers: Self::build_servers(&config),
            rng: SmallRng::seed_from_u64(config.seed),
            config,
            pool: tasks.into(),
            ticks: 0,
        }
    }

    fn build_servers(config: &SimConfig) -> Vec<Server> {
        let mut servers = Vec::with_capacity(config.server_count());
        for _ in 0..config.fast_servers {
            servers.push(Server::new(config.fast_speed));
        }
        for _ in 0..config.slow_servers {
            servers.push(Server::new(config.slow_speed));
        }
        servers
    }

    /// The servers, in creation order (fast block first).
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Number of tasks still waiting for assignment.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the run is complete.
    ///
    /// A run with no servers at all is vacuously complete (it can never
    /// make progress, and must not loop checking an empty fleet).
    /// Otherwise the run is complete once the pool is drained and every
    /// server is simultaneously free, which together imply all tasks were
    /// assigned and finished.
    pub fn is_complete(&self) -> bool {
        self.servers.is_empty()
            || (self.pool.is_empty() && self.servers.iter().all(Server::is_free))
    }

    /// Executes one tick.
    ///
    /// Visits every server once in the order the policy chooses; each
    /// visit pops up to `offer_count` tasks from the pool onto the
    /// server's queue, then runs the server's processing step. The pool is
    /// touched only here, never by the servers themselves.
    pub fn step(&mut self, policy: &dyn AssignmentPolicy) {
        let order = policy.visit_order(self.servers.len(), &mut self.rng);
        for index in order {
            let offers = policy.offer_count(&self.servers[index]);
            for _ in 0..offers {
                match self.pool.pop_front() {
                    Some(task) => self.servers[index].enqueue(task),
                    None => break,
                }
            }
            self.servers[index].tick();
        }
        self.ticks += 1;
        log::trace!(
            "tick {}: {} pending, {}/{} servers busy",
            self.ticks,
            self.pool.len(),
            self.servers.iter().filter(|s| !s.is_free()).count(),
            self.servers.len()
        );
    }

    /// Runs to completion and aggregates the result.
    ///
    /// Degenerate inputs terminate immediately with zero ticks: an empty
    /// pool with all servers free, or no servers at all.
    pub fn run(mut self, policy: &dyn AssignmentPolicy) -> RunReport {
        while !self.is_complete() {
            self.step(policy);
        }
        RunReport {
            policy: policy.name().to_string(),
            ticks: self.ticks,
            completed_per_server: self.servers.iter().map(Server::tasks_completed).collect(),
            fast_servers: self.config.fast_servers,
            slow_servers: self.config.slow_servers,
        }
    }
}
