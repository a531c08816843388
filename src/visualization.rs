use image::{Rgb, RgbImage};

use crate::grid::{Cell, GridMap};
use crate::types::{HEURISTIC_COLOR_SCALE, OBSTACLE_COLOR_SCALE};

/// Renders the computed fields into preview images, one pixel per grid cell.
///
/// The output image is oriented like typical map images: the grid's \(y=0\)
/// row is written to the **bottom** of the image. Cells that were never
/// materialized stay black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRenderer {
    /// Destination cost at which the red channel reaches zero.
    pub heuristic_scale: f64,
    /// Obstacle distance at which the green channel reaches zero.
    pub obstacle_scale: f64,
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self {
            heuristic_scale: HEURISTIC_COLOR_SCALE,
            obstacle_scale: OBSTACLE_COLOR_SCALE,
        }
    }
}

impl FieldRenderer {
    /// `1 - cost / scale`, clamped to [0, 1]. Unreachable cells are 0.
    pub fn heuristic_intensity(&self, cost: f64) -> f32 {
        intensity(cost, self.heuristic_scale)
    }

    /// `1 - distance / scale`, clamped to [0, 1].
    pub fn obstacle_intensity(&self, distance: f64) -> f32 {
        intensity(distance, self.obstacle_scale)
    }

    /// Red channel encodes closeness to the goal.
    pub fn heuristic_image(&self, map: &GridMap) -> RgbImage {
        render(map, |cell| {
            let r = channel(self.heuristic_intensity(cell.destination_cost()));
            Rgb([r, 0, 0])
        })
    }

    /// Green channel encodes closeness to an obstacle.
    pub fn obstacle_image(&self, map: &GridMap) -> RgbImage {
        render(map, |cell| {
            let g = channel(self.obstacle_intensity(cell.obstacle_distance()));
            Rgb([0, g, 0])
        })
    }

    /// Boundary-free cells in blue, obstacle cells in white.
    pub fn boundary_image(&self, map: &GridMap) -> RgbImage {
        let boundary = map.boundary_free();
        render(map, |cell| {
            if boundary.contains(&cell.key()) {
                Rgb([0, 0, 255])
            } else if !cell.is_available() {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }
}

fn intensity(value: f64, scale: f64) -> f32 {
    if !value.is_finite() || scale <= 0.0 {
        return 0.0;
    }
    (1.0 - value / scale).clamp(0.0, 1.0) as f32
}

fn channel(intensity: f32) -> u8 {
    (intensity * 255.0).round() as u8
}

fn render(map: &GridMap, color: impl Fn(&Cell) -> Rgb<u8>) -> RgbImage {
    let Some(extents) = map.extents() else {
        return RgbImage::new(0, 0);
    };
    let width = extents.cols();
    let height = extents.rows();
    let mut img = RgbImage::new(width, height);

    for cell in map.cells() {
        let x = cell.grid_x() as u32;
        // Flip vertically so grid row 0 is at the bottom.
        let y_img = height - 1 - cell.grid_y() as u32;
        img.put_pixel(x, y_img, color(cell));
    }

    img
}
