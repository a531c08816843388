//! Obstacle clearance: multi-source distance transform plus unreachable cascade.
//!
//! Phase A grows distances outward from the boundary-free cells, which sit one
//! step from an obstacle, through free space. Phase B floods from every
//! rasterized obstacle cell through anything Phase A did not reach, closing
//! off pockets that cannot reach the goal.
//! Both phases share one visited set so each cell is settled exactly once.

use std::collections::VecDeque;

use log::info;

use crate::fields::queue::{DistanceQueue, VisitedSet};
use crate::grid::GridMap;
use crate::types::{GridMapError, STEP_COST, UNREACHABLE_COST, neighbors4};

/// Summary of an obstacle distance pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearanceReport {
    /// Free cells assigned a clearance by the distance transform.
    pub reachable: usize,
    /// Cells closed off by the cascade, obstacle cells included.
    pub unreachable: usize,
}

impl GridMap {
    /// Populate obstacle distances and finalize availability.
    ///
    /// Clearance is the 4-connected hop count from a free cell to the nearest
    /// obstacle cell: boundary-free cells are seeded at one step, not zero,
    /// and obstacle cells keep zero.
    ///
    /// Expects the heuristic pass to have filled the boundary-free set; with
    /// an empty boundary-free set every cell connected to an obstacle is
    /// treated as unreachable.
    pub fn generate_obstacle_distance_map(&mut self) -> Result<ClearanceReport, GridMapError> {
        let cache = self.cache.as_mut().ok_or(GridMapError::BoundsUnset)?;
        let mut visited = VisitedSet::new(cache.extents().cell_count());

        let mut queue = DistanceQueue::new();
        for &key in &self.boundary_free {
            if !visited.insert(key) {
                continue;
            }
            // One step from an obstacle, whatever value the cell held before.
            if let Some(cell) = cache.get_mut(key) {
                cell.set_obstacle_distance(STEP_COST);
                queue.push(key, STEP_COST);
            }
        }

        while let Some((key, distance)) = queue.pop() {
            let Some(coord) = cache.get(key).map(|cell| cell.coord()) else {
                continue;
            };
            for neighbor in neighbors4(coord) {
                let Some(next) = cache.get_or_create_mut(neighbor) else {
                    continue;
                };
                if !next.is_available() || !visited.insert(next.key()) {
                    continue;
                }
                let next_distance = distance + STEP_COST;
                next.set_obstacle_distance(next_distance);
                queue.push(next.key(), next_distance);
            }
        }
        let reachable = visited.count();

        let mut flood: VecDeque<_> = self.boundary_obstacle.iter().copied().collect();
        while let Some(key) = flood.pop_front() {
            if !visited.insert(key) {
                continue;
            }
            let Some(cell) = cache.get_mut(key) else {
                continue;
            };
            cell.mark_obstacle();
            cell.set_destination_cost(UNREACHABLE_COST);
            let coord = cell.coord();

            for neighbor in neighbors4(coord) {
                if let Some(next) = cache.get_or_create(neighbor) {
                    flood.push_back(next);
                }
            }
        }

        let report = ClearanceReport {
            reachable,
            unreachable: visited.count() - reachable,
        };
        info!(
            "obstacle distance map generated: {} reachable, {} unreachable cells",
            report.reachable, report.unreachable
        );
        Ok(report)
    }
}
