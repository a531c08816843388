/// Destination cost of a cell that cannot reach the goal (or was never expanded).
pub const UNREACHABLE_COST: f64 = f64::INFINITY;

/// Cost of a single 4-connected grid step.
pub const STEP_COST: f64 = 1.0;

/// Heuristic cost at which the preview red channel reaches zero.
pub const HEURISTIC_COLOR_SCALE: f64 = 50.0;
/// Obstacle distance at which the preview green channel reaches zero.
pub const OBSTACLE_COLOR_SCALE: f64 = 10.0;

pub const DEFAULT_XY_RESOLUTION: f64 = 1.0;
pub const DEFAULT_HEADING_RESOLUTION: f64 = 0.1;

/// Largest grid the cell arena will allocate, in cells (4096 x 4096).
pub const MAX_GRID_CELLS: u64 = 1 << 24;
