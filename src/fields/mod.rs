//! Field builders that populate a [`GridMap`] for one planning episode.
//!
//! Stages run in a fixed order: rasterize obstacles, then the goal
//! heuristic (which discovers the boundary-free cells), then obstacle
//! clearance (which consumes both boundary sets).

pub mod clearance;
pub mod heuristic;
pub mod queue;

use glam::DVec2;

pub use clearance::ClearanceReport;
pub use heuristic::HeuristicReport;
pub use queue::{CostQueue, DistanceQueue, VisitedSet};

use crate::grid::GridMap;
use crate::types::GridMapError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldsReport {
    pub obstacle_cells: usize,
    pub heuristic: HeuristicReport,
    pub clearance: ClearanceReport,
}

/// Rasterize `obstacles` into `map` and compute both fields.
///
/// The map must already have bounds and a goal.
pub fn compute_fields<'a, I>(map: &mut GridMap, obstacles: I) -> Result<FieldsReport, GridMapError>
where
    I: IntoIterator<Item = &'a [DVec2]>,
{
    let obstacle_cells = map.add_polygon_obstacles(obstacles)?;
    let heuristic = map.generate_heuristic_map()?;
    let clearance = map.generate_obstacle_distance_map()?;
    Ok(FieldsReport {
        obstacle_cells,
        heuristic,
        clearance,
    })
}
