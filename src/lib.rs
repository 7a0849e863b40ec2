//! Discrete-time simulation of greedy task dispatch on heterogeneous servers.
//!
//! A pool of tasks with random processing lengths is fed to a mixed fleet of
//! fast and slow servers by two greedy assignment policies, to compare how
//! the two policies distribute throughput across the fleet.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Server`
//! - **`policy`**: The `AssignmentPolicy` trait and the built-in `Greedy`
//!   and `ImprovedGreedy` variants
//! - **`sim`**: `SimConfig`, the `Simulation` tick loop, `RunReport`,
//!   and side-by-side policy comparison
//! - **`validation`**: Structural configuration checks
//!
//! # Example
//!
//! ```
//! use greedy_sim::sim::{compare, SimConfig};
//!
//! let config = SimConfig::new(4, 4, 200).with_seed(42);
//! let result = compare(&config);
//! assert_eq!(result.greedy.total_completed(), 200);
//! assert_eq!(result.improved.total_completed(), 200);
//! ```
//!
//! # References
//!
//! - Graham (1966), "Bounds for Certain Multiprocessing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

pub mod models;
pub mod policy;
pub mod sim;
pub mod validation;
