//! Simulation loop and result aggregation.
//!
//! `Simulation` owns the servers, the pending pool, and the seeded RNG for
//! one run; a run advances in discrete ticks until the pool is drained and
//! every server is simultaneously free. `RunReport` aggregates the
//! per-server completion counts, and [`compare`] runs both built-in
//! policies on independently constructed simulations.
//!
//! # Tick anatomy
//!
//! Within one tick every server is visited once, in the order the policy
//! chooses. Each visit offers the server tasks from the pool (policy
//! decides how many), then processes the server's queue. Servers never
//! interleave within a tick: a task assigned to a server progresses only
//! during that server's own processing step.

mod report;
mod run;

pub use report::{compare, Comparison, RunReport};
pub use run::{SimConfig, Simulation};
