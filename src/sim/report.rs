//! Run results and policy comparison.
//!
//! A [`RunReport`] carries the observable output of one run: the tick
//! count and the per-server completion counts, split into the fast and
//! slow groups. [`compare`] produces the six scalar values of the original
//! experiment — two tick counts and four group averages.

use serde::{Deserialize, Serialize};

use super::{SimConfig, Simulation};
use crate::policy::{Greedy, ImprovedGreedy};

/// Aggregated outcome of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Name of the policy that drove the run.
    pub policy: String,
    /// Number of ticks until completion.
    pub ticks: u64,
    /// Completed-task count per server, in creation order.
    pub completed_per_server: Vec<usize>,
    /// Size of the fast group (prefix of `completed_per_server`).
    pub fast_servers: usize,
    /// Size of the slow group (suffix of `completed_per_server`).
    pub slow_servers: usize,
}

impl RunReport {
    /// Total tasks completed across all servers.
    pub fn total_completed(&self) -> usize {
        self.completed_per_server.iter().sum()
    }

    /// Mean completed-task count over the fast group.
    ///
    /// Averaging an empty group is undefined and yields `NaN`; guard on
    /// `fast_servers > 0` before calling.
    pub fn avg_fast(&self) -> f64 {
        let sum: usize = self.completed_per_server[..self.fast_servers]
            .iter()
            .sum();
        sum as f64 / self.fast_servers as f64
    }

    /// Mean completed-task count over the slow group.
    ///
    /// Averaging an empty group is undefined and yields `NaN`; guard on
    /// `slow_servers > 0` before calling.
    pub fn avg_slow(&self) -> f64 {
        let sum: usize = self.completed_per_server[self.fast_servers..]
            .iter()
            .sum();
        sum as f64 / self.slow_servers as f64
    }
}

/// Reports from running both built-in policies on the same configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Randomized idle-fill run.
    pub greedy: RunReport,
    /// Speed-proportional batch-fill run.
    pub improved: RunReport,
}

/// Runs both built-in policies and returns their reports side by side.
///
/// Each run gets an independently constructed simulation — fresh servers,
/// fresh task pool, same configuration and seed — so nothing carries over
/// between the two.
pub fn compare(config: &SimConfig) -> Comparison {
    Comparison {
        greedy: Simulation::new(config.clone()).run(&Greedy),
        improved: Simulation::new(config.clone()).run(&ImprovedGreedy),
    }
}
