//! Built-in greedy policies.
//!
//! Two greedy variants of task dispatch over a heterogeneous server pool:
//!
//! - [`Greedy`]: randomized visit order, one task per idle server per tick.
//! - [`ImprovedGreedy`]: fixed visit order, up to `speed` tasks per server
//!   per tick.
//!
//! # Reference
//! Graham (1966), "Bounds for Certain Multiprocessing Anomalies" — both
//! variants are on-line relaxations of list scheduling.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::AssignmentPolicy;
use crate::models::Server;

/// Randomized idle-fill greedy dispatch.
///
/// Visits servers in a fresh uniform random order each tick and offers one
/// task to each idle server. The random order avoids a systematic bias
/// toward low-index servers when the pending pool is the bottleneck.
///
/// A server that frees up mid-tick is not offered new work until the next
/// tick, which caps its queue depth near 1 and serializes its assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl AssignmentPolicy for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn visit_order(&self, server_count: usize, rng: &mut dyn RngCore) -> Vec<usize> {
        let mut order: Vec<usize> = (0..server_count).collect();
        order.shuffle(rng);
        order
    }

    fn offer_count(&self, server: &Server) -> usize {
        if server.is_free() {
            1
        } else {
            0
        }
    }

    fn description(&self) -> &'static str {
        "Randomized idle-fill, one task per idle server per tick"
    }
}

/// Speed-proportional batch-fill greedy dispatch.
///
/// Visits servers in creation order and offers each up to `speed` tasks
/// per tick regardless of queue depth, letting faster servers pre-load
/// proportionally more work while the pool lasts. Queue depth may grow
/// ahead of a server's consumption rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedGreedy;

impl AssignmentPolicy for ImprovedGreedy {
    fn name(&self) -> &'static str {
        "improved-greedy"
    }

    fn visit_order(&self, server_count: usize, _rng: &mut dyn RngCore) -> Vec<usize> {
        (0..server_count).collect()
    }

    fn offer_count(&self, server: &Server) -> usize {
        server.speed as usize
    }

    fn description(&self) -> &'static str {
        "Fixed order, speed-proportional batch-fill per tick"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_greedy_order_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut order = Greedy.visit_order(10, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_greedy_order_deterministic_per_seed() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        assert_eq!(Greedy.visit_order(20, &mut a), Greedy.visit_order(20, &mut b));
    }

    #[test]
    fn test_greedy_offers_one_to_idle_only() {
        let mut busy = Server::new(1);
        busy.enqueue(crate::models::Task::new(5));

        assert_eq!(Greedy.offer_count(&Server::new(3)), 1);
        assert_eq!(Greedy.offer_count(&busy), 0);
    }

    #[test]
    fn test_improved_order_is_creation_order() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(
            ImprovedGreedy.visit_order(5, &mut rng),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_improved_offers_speed_regardless_of_queue() {
        let mut busy = Server::new(3);
        busy.enqueue(crate::models::Task::new(5));

        assert_eq!(ImprovedGreedy.offer_count(&Server::new(3)), 3);
        assert_eq!(ImprovedGreedy.offer_count(&busy), 3);
        assert_eq!(ImprovedGreedy.offer_count(&Server::new(1)), 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(Greedy.name(), "greedy");
        assert_eq!(ImprovedGreedy.name(), "improved-greedy");
        assert_ne!(Greedy.description(), ImprovedGreedy.description());
    }
}
