//! Map metadata.

use glam::IVec2;
use serde::Deserialize;

use crate::types::{
    DEFAULT_HEADING_RESOLUTION, DEFAULT_XY_RESOLUTION, GridMapError, MAX_GRID_CELLS, WorldBounds,
};

/// Largest valid grid index per axis, derived from bounds and resolution.
///
/// Indices run from 0 to `max` inclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtents {
    pub max: IVec2,
}

impl GridExtents {
    /// `floor(span / resolution) + 1` per axis.
    ///
    /// Fails with [`GridMapError::InvalidBounds`] when the grid would hold
    /// more than [`MAX_GRID_CELLS`] cells.
    pub fn from_bounds(bounds: &WorldBounds, resolution: f64) -> Result<Self, GridMapError> {
        let span = (bounds.size() / resolution).floor();
        // Addressable cells per axis are `max + 1`, i.e. `floor(span) + 2`.
        let cells = (span.x + 2.0) * (span.y + 2.0);
        if !(cells <= MAX_GRID_CELLS as f64) {
            return Err(GridMapError::InvalidBounds(format!(
                "grid of {} x {} cells exceeds the {MAX_GRID_CELLS} cell limit",
                span.x + 2.0,
                span.y + 2.0
            )));
        }
        Ok(Self {
            max: IVec2::new(span.x as i32 + 1, span.y as i32 + 1),
        })
    }

    /// Number of addressable columns (`max.x + 1`).
    #[inline]
    pub fn cols(&self) -> u32 {
        (self.max.x + 1) as u32
    }

    /// Number of addressable rows (`max.y + 1`).
    #[inline]
    pub fn rows(&self) -> u32 {
        (self.max.y + 1) as u32
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cols() as usize * self.rows() as usize
    }

    #[inline]
    pub fn contains(&self, coord: IVec2) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x <= self.max.x && coord.y <= self.max.y
    }
}

/// World rectangle as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundsConfig {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// Static configuration of a grid map: resolutions and world bounds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridMapConfig {
    #[serde(
        default = "default_xy_resolution",
        deserialize_with = "deserialize_resolution"
    )]
    pub xy_resolution: f64,
    /// Accepted for planners that discretize heading; unused by the fields.
    #[serde(default = "default_heading_resolution")]
    pub heading_resolution: f64,
    pub bounds: BoundsConfig,
}

impl GridMapConfig {
    pub fn new(xy_resolution: f64, bounds: BoundsConfig) -> Self {
        Self {
            xy_resolution,
            heading_resolution: DEFAULT_HEADING_RESOLUTION,
            bounds,
        }
    }
}

fn default_xy_resolution() -> f64 {
    DEFAULT_XY_RESOLUTION
}

fn default_heading_resolution() -> f64 {
    DEFAULT_HEADING_RESOLUTION
}

fn deserialize_resolution<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(
            "xy_resolution must be a positive finite number",
        ))
    }
}
