use glam::DVec2;
use log::{debug, info};

use super::GridMap;
use crate::iterators::outline_cells;
use crate::types::GridMapError;

impl GridMap {
    /// Rasterize the outline of a closed polygon into obstacle cells.
    ///
    /// Every cell the outline passes through is marked unavailable with zero
    /// obstacle distance and recorded in the boundary-obstacle set. Only the
    /// outline is marked; the interior is left to the obstacle distance
    /// cascade. Edges are clipped to the grid before sampling and samples
    /// outside the grid extents are skipped.
    ///
    /// Returns the number of cells newly added to the boundary-obstacle set.
    /// An empty vertex list is a no-op; a non-finite vertex is rejected before
    /// any cell is touched.
    pub fn add_polygon_obstacle(&mut self, points: &[DVec2]) -> Result<usize, GridMapError> {
        if points.is_empty() {
            info!("polygon obstacle is empty, nothing to rasterize");
            return Ok(0);
        }

        let origin = self.bounds().ok_or(GridMapError::BoundsUnset)?.min;
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(GridMapError::InvalidConfig(format!(
                "polygon vertex ({}, {}) is not finite",
                p.x, p.y
            )));
        }
        let resolution = self.xy_resolution();
        let cache = self.cache.as_mut().ok_or(GridMapError::BoundsUnset)?;
        let extents = *cache.extents();

        let mut added = 0;
        let mut skipped = 0;
        for coord in outline_cells(points, origin, resolution, extents) {
            let Some(cell) = cache.get_or_create_mut(coord) else {
                skipped += 1;
                continue;
            };
            cell.mark_obstacle();
            if self.boundary_obstacle.insert(cell.key()) {
                added += 1;
            }
        }

        if skipped > 0 {
            debug!(
                "polygon with {} vertices: {} outline samples fell outside the grid",
                points.len(),
                skipped
            );
        }
        Ok(added)
    }

    /// Rasterize several polygons; returns the total number of new obstacle cells.
    pub fn add_polygon_obstacles<'a, I>(&mut self, polygons: I) -> Result<usize, GridMapError>
    where
        I: IntoIterator<Item = &'a [DVec2]>,
    {
        let mut added = 0;
        for polygon in polygons {
            added += self.add_polygon_obstacle(polygon)?;
        }
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;

    fn map() -> GridMap {
        let mut map = GridMap::new();
        map.set_xy_resolution(1.0).unwrap();
        map.set_bounds(0.0, 10.0, 0.0, 10.0).unwrap();
        map
    }

    #[test]
    fn outline_cells_become_obstacles() {
        let mut map = map();
        let triangle = [
            DVec2::new(1.2, 1.2),
            DVec2::new(8.6, 2.1),
            DVec2::new(4.4, 7.9),
        ];
        let added = map.add_polygon_obstacle(&triangle).unwrap();

        assert_eq!(added, map.boundary_obstacle().len());
        assert!(added > 0);
        for key in map.boundary_obstacle() {
            let cell = map.cell(*key).unwrap();
            assert!(!cell.is_available());
            assert_eq!(cell.obstacle_distance(), 0.0);
        }
        for vertex in triangle {
            let coord = map.world_to_grid(vertex).unwrap();
            assert!(!map.cell_at(coord).unwrap().is_available());
        }
    }

    #[test]
    fn empty_polygon_is_noop() {
        let mut map = map();
        assert_eq!(map.add_polygon_obstacle(&[]).unwrap(), 0);
        assert_eq!(map.cell_count(), 0);
    }

    #[test]
    fn requires_bounds() {
        let mut map = GridMap::new();
        let result = map.add_polygon_obstacle(&[DVec2::new(1.0, 1.0)]);
        assert!(matches!(result, Err(GridMapError::BoundsUnset)));
    }

    #[test]
    fn samples_outside_extents_are_skipped() {
        let mut map = map();
        let added = map
            .add_polygon_obstacle(&[DVec2::new(-3.0, 5.0), DVec2::new(2.0, 5.0)])
            .unwrap();
        assert_eq!(added, 3);
        assert!(!map.cell_at(IVec2::new(0, 5)).unwrap().is_available());
        assert!(!map.cell_at(IVec2::new(2, 5)).unwrap().is_available());
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        let mut map = map();
        let result = map.add_polygon_obstacle(&[
            DVec2::new(0.5, 0.5),
            DVec2::new(f64::INFINITY, 0.5),
        ]);
        assert!(matches!(result, Err(GridMapError::InvalidConfig(_))));
        let result = map.add_polygon_obstacle(&[DVec2::new(f64::NAN, 2.0)]);
        assert!(matches!(result, Err(GridMapError::InvalidConfig(_))));
        assert_eq!(map.cell_count(), 0);
        assert!(map.boundary_obstacle().is_empty());
    }

    #[test]
    fn long_edge_is_clipped_to_the_grid() {
        let mut map = map();
        let added = map
            .add_polygon_obstacle(&[DVec2::new(-1e12, 5.5), DVec2::new(1e12, 5.5)])
            .unwrap();
        assert_eq!(added, 12);
        for x in 0..=11 {
            assert!(!map.cell_at(IVec2::new(x, 5)).unwrap().is_available());
        }
        assert_eq!(map.cell_count(), 12);
    }

    #[test]
    fn polygon_outside_the_grid_adds_nothing() {
        let mut map = map();
        let added = map
            .add_polygon_obstacle(&[
                DVec2::new(-1e9, -1e9),
                DVec2::new(-1e9 + 5.0, -1e9),
                DVec2::new(-1e9, -1e9 + 5.0),
            ])
            .unwrap();
        assert_eq!(added, 0);
        assert_eq!(map.cell_count(), 0);
    }

    #[test]
    fn overlapping_polygons_count_cells_once() {
        let mut map = map();
        let a: Vec<DVec2> = vec![DVec2::new(2.0, 2.0), DVec2::new(6.0, 2.0)];
        let b: Vec<DVec2> = vec![DVec2::new(4.0, 2.0), DVec2::new(8.0, 2.0)];
        let added = map
            .add_polygon_obstacles([a.as_slice(), b.as_slice()])
            .unwrap();
        assert_eq!(added, 7);
    }
}
