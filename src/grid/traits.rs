use crate::grid::{CellKey, GridMap};
use crate::types::UNREACHABLE_COST;

/// Read-only view of the precomputed fields, as consumed by a planner when
/// scoring or pruning search states.
pub trait PlannerFields {
    /// Grid hops to the goal; [`UNREACHABLE_COST`] when unknown.
    fn heuristic(&self, key: CellKey) -> f64;
    /// Grid hops to the nearest obstacle, `None` for unknown cells.
    fn clearance(&self, key: CellKey) -> Option<f64>;
    /// Unknown cells are reported as unavailable.
    fn is_available(&self, key: CellKey) -> bool;

    fn is_traversable(&self, key: CellKey) -> bool {
        self.is_available(key) && self.heuristic(key) < UNREACHABLE_COST
    }
}

impl PlannerFields for GridMap {
    fn heuristic(&self, key: CellKey) -> f64 {
        self.get_heuristic(key)
    }

    fn clearance(&self, key: CellKey) -> Option<f64> {
        self.cell(key).map(|cell| cell.obstacle_distance())
    }

    fn is_available(&self, key: CellKey) -> bool {
        self.cell(key).is_some_and(|cell| cell.is_available())
    }
}
