use glam::{DVec2, IVec2};

use crate::iterators::segment::{SegmentCells, clip_segment};
use crate::types::GridExtents;

/// Iterator over the edges of a closed polygon, including the closing edge
/// from the last vertex back to the first.
///
/// Points are expected in world coordinates (meters). A single vertex yields
/// one degenerate edge; an empty slice yields nothing.
#[derive(Debug, Clone)]
pub struct PolygonEdges<'a> {
    points: &'a [DVec2],
    index: usize,
}

impl<'a> PolygonEdges<'a> {
    pub fn new(points: &'a [DVec2]) -> Self {
        Self { points, index: 0 }
    }
}

impl Iterator for PolygonEdges<'_> {
    type Item = (DVec2, DVec2);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.points.len();
        if self.index >= n {
            return None;
        }
        let edge = (self.points[self.index], self.points[(self.index + 1) % n]);
        self.index += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len() - self.index;
        (remaining, Some(remaining))
    }
}

/// Cells along the outline of a polygon, edge by edge.
///
/// Each edge is first clipped to the world rectangle covered by `extents`;
/// edges that miss it yield nothing. Cells shared by adjacent edges are
/// yielded once per edge.
pub fn outline_cells(
    points: &[DVec2],
    origin: DVec2,
    resolution: f64,
    extents: GridExtents,
) -> impl Iterator<Item = IVec2> + '_ {
    let upper = origin + (extents.max + 1).as_dvec2() * resolution;
    PolygonEdges::new(points)
        .filter_map(move |(start, end)| clip_segment(start, end, origin, upper))
        .flat_map(move |(start, end)| SegmentCells::new(start, end, origin, resolution))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(3.0, 3.0),
            DVec2::new(7.0, 3.0),
            DVec2::new(7.0, 7.0),
            DVec2::new(3.0, 7.0),
        ]
    }

    fn extents() -> GridExtents {
        GridExtents {
            max: IVec2::new(11, 11),
        }
    }

    #[test]
    fn edges_outside_the_grid_yield_nothing() {
        let far = [DVec2::new(-50.0, -50.0), DVec2::new(-20.0, -40.0)];
        assert_eq!(outline_cells(&far, DVec2::ZERO, 1.0, extents()).count(), 0);
    }

    #[test]
    fn edges_close_the_loop() {
        let points = square();
        let edges: Vec<(DVec2, DVec2)> = PolygonEdges::new(&points).collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (DVec2::new(3.0, 7.0), DVec2::new(3.0, 3.0)));
    }

    #[test]
    fn empty_and_single_vertex() {
        assert_eq!(PolygonEdges::new(&[]).count(), 0);
        let single = [DVec2::new(1.0, 1.0)];
        let edges: Vec<_> = PolygonEdges::new(&single).collect();
        assert_eq!(edges, vec![(single[0], single[0])]);
    }

    #[test]
    fn outline_of_square_is_its_ring() {
        let points = square();
        let cells: HashSet<IVec2> = outline_cells(&points, DVec2::ZERO, 1.0, extents()).collect();
        assert_eq!(cells.len(), 16);
        for cell in &cells {
            let on_ring = cell.x == 3 || cell.x == 7 || cell.y == 3 || cell.y == 7;
            assert!(on_ring, "{cell:?} is not on the square outline");
        }
        assert!(!cells.contains(&IVec2::new(5, 5)));
    }
}
