//! Geometric and spatial types shared by the grid map and its field builders.

use glam::{DVec2, IVec2};

use crate::types::GridMapError;

/// World-axis-aligned rectangle in meters.
/// Convention: closed on both ends, [min.x, max.x] x [min.y, max.y].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl WorldBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, GridMapError> {
        let values = [xmin, xmax, ymin, ymax];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GridMapError::InvalidBounds(format!(
                "non-finite bounds ({xmin}, {xmax}, {ymin}, {ymax})"
            )));
        }
        if xmin >= xmax || ymin >= ymax {
            return Err(GridMapError::InvalidBounds(format!(
                "min must be below max, got x [{xmin}, {xmax}] y [{ymin}, {ymax}]"
            )));
        }

        Ok(Self {
            min: DVec2::new(xmin, ymin),
            max: DVec2::new(xmax, ymax),
        })
    }

    /// Size of the rectangle in world units.
    #[inline]
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// The four axis-aligned grid moves. No diagonals.
pub const NEIGHBOR_OFFSETS: [IVec2; 4] = [
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
];

/// Grid coordinates of the four axis-aligned neighbours of `coord`.
#[inline]
pub fn neighbors4(coord: IVec2) -> impl Iterator<Item = IVec2> {
    NEIGHBOR_OFFSETS.into_iter().map(move |offset| coord + offset)
}
