use glam::IVec2;

use crate::types::UNREACHABLE_COST;

/// Packed cell identifier, `gy * cols + gx`.
///
/// Only meaningful for the grid extents it was packed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey(pub u32);

impl CellKey {
    #[inline]
    pub fn pack(coord: IVec2, cols: u32) -> Self {
        Self(coord.y as u32 * cols + coord.x as u32)
    }

    #[inline]
    pub fn unpack(self, cols: u32) -> IVec2 {
        IVec2::new((self.0 % cols) as i32, (self.0 / cols) as i32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One grid cell with its heuristic and clearance values.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    coord: IVec2,
    key: CellKey,
    destination_cost: f64,
    obstacle_distance: f64,
    available: bool,
}

impl Cell {
    pub fn new(coord: IVec2, key: CellKey) -> Self {
        Self {
            coord,
            key,
            destination_cost: UNREACHABLE_COST,
            obstacle_distance: 0.0,
            available: true,
        }
    }

    #[inline]
    pub fn coord(&self) -> IVec2 {
        self.coord
    }

    #[inline]
    pub fn grid_x(&self) -> i32 {
        self.coord.x
    }

    #[inline]
    pub fn grid_y(&self) -> i32 {
        self.coord.y
    }

    #[inline]
    pub fn key(&self) -> CellKey {
        self.key
    }

    /// Grid hops to the goal, or [`UNREACHABLE_COST`].
    #[inline]
    pub fn destination_cost(&self) -> f64 {
        self.destination_cost
    }

    /// Grid hops to the nearest obstacle.
    #[inline]
    pub fn obstacle_distance(&self) -> f64 {
        self.obstacle_distance
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.destination_cost < UNREACHABLE_COST
    }

    pub fn set_destination_cost(&mut self, cost: f64) {
        self.destination_cost = cost;
    }

    pub fn set_obstacle_distance(&mut self, distance: f64) {
        self.obstacle_distance = distance;
    }

    pub fn set_unavailable(&mut self) {
        self.available = false;
    }

    /// Obstacle cell: unavailable with zero clearance.
    pub fn mark_obstacle(&mut self) {
        self.available = false;
        self.obstacle_distance = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_through_packing() {
        let cols = 12;
        for (x, y) in [(0, 0), (11, 0), (0, 11), (5, 7)] {
            let coord = IVec2::new(x, y);
            let key = CellKey::pack(coord, cols);
            assert_eq!(key.unpack(cols), coord);
        }
        assert_eq!(CellKey::pack(IVec2::new(3, 2), cols), CellKey(27));
    }

    #[test]
    fn new_cell_defaults() {
        let cell = Cell::new(IVec2::new(1, 2), CellKey(7));
        assert_eq!(cell.destination_cost(), UNREACHABLE_COST);
        assert_eq!(cell.obstacle_distance(), 0.0);
        assert!(cell.is_available());
        assert!(!cell.is_reachable());
    }

    #[test]
    fn mark_obstacle_zeroes_distance() {
        let mut cell = Cell::new(IVec2::ZERO, CellKey(0));
        cell.set_obstacle_distance(4.0);
        cell.mark_obstacle();
        assert!(!cell.is_available());
        assert_eq!(cell.obstacle_distance(), 0.0);
    }
}
