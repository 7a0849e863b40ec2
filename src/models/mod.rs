//! Simulation domain models.
//!
//! The two entities the tick loop operates on:
//!
//! | model | role |
//! |-------|------|
//! | `Task` | Unit of work with a fixed length and a progress counter |
//! | `Server` | Worker with a FIFO queue and a per-tick speed budget |

mod server;
mod task;

pub use server::Server;
pub use task::Task;
