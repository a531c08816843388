//! Goal heuristic: backward Dijkstra from the goal cell over free cells.
//!
//! Every free cell connected to the goal receives its exact 4-connected hop
//! count to the goal. Obstacles are never relaxed; a popped cell with an
//! obstacle neighbour is recorded in the boundary-free set, which later seeds
//! the obstacle distance transform.

use log::{info, warn};

use crate::fields::queue::{CostQueue, VisitedSet};
use crate::grid::GridMap;
use crate::types::{GridMapError, STEP_COST, neighbors4};

/// Summary of a heuristic pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicReport {
    /// Cells settled by the search.
    pub visited: usize,
    /// Cells in the cache after the search.
    pub cached: usize,
    pub max_cost: f64,
}

impl GridMap {
    /// Populate destination costs from the goal outward.
    ///
    /// Requires bounds and a goal. Costs only ever decrease, so running the
    /// pass again on the same episode leaves the field unchanged.
    pub fn generate_heuristic_map(&mut self) -> Result<HeuristicReport, GridMapError> {
        self.cache_ref()?;
        let goal = self.goal_key().ok_or(GridMapError::GoalUnset)?;
        let cache = self.cache.as_mut().ok_or(GridMapError::BoundsUnset)?;

        let goal_cell = cache.get(goal).ok_or(GridMapError::GoalUnset)?;
        if !goal_cell.is_available() {
            warn!(
                "goal cell ({}, {}) lies on an obstacle",
                goal_cell.grid_x(),
                goal_cell.grid_y()
            );
        }

        let mut queue = CostQueue::new();
        let mut visited = VisitedSet::new(cache.extents().cell_count());
        let mut max_cost = self.max_cost;
        queue.push(goal, goal_cell.destination_cost());

        while let Some((key, _)) = queue.pop() {
            // Stale entries from earlier relaxations.
            if !visited.insert(key) {
                continue;
            }
            let Some(current) = cache.get(key) else {
                continue;
            };
            let coord = current.coord();
            let next_cost = current.destination_cost() + STEP_COST;

            for neighbor in neighbors4(coord) {
                let Some(next) = cache.get_or_create_mut(neighbor) else {
                    continue;
                };
                if !next.is_available() {
                    self.boundary_free.insert(key);
                    continue;
                }
                if next_cost < next.destination_cost() {
                    next.set_destination_cost(next_cost);
                    max_cost = max_cost.max(next_cost);
                    queue.push(next.key(), next_cost);
                }
            }
        }

        self.max_cost = max_cost;
        let report = HeuristicReport {
            visited: visited.count(),
            cached: cache.len(),
            max_cost,
        };
        info!(
            "heuristic map generated: visited {} of {} cached cells, max cost {}",
            report.visited, report.cached, report.max_cost
        );
        Ok(report)
    }
}
