use std::collections::BTreeSet;

use glam::{DVec2, IVec2};
use log::warn;

use crate::grid::{Cell, CellKey, NodeCache};
use crate::types::{
    DEFAULT_HEADING_RESOLUTION, DEFAULT_XY_RESOLUTION, GridExtents, GridMapConfig, GridMapError,
    UNREACHABLE_COST, WorldBounds,
};

/// Owned copy of a cell, tagged with the cache generation it was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub coord: IVec2,
    pub key: CellKey,
    /// Lower-left corner of the cell in world coordinates.
    pub world: DVec2,
    pub destination_cost: f64,
    pub obstacle_distance: f64,
    pub available: bool,
    pub generation: u64,
}

/// Sparse planning grid holding the goal heuristic and obstacle clearance.
///
/// Configure resolution first, then bounds; then per episode set the start
/// and goal, add obstacles and run the field builders in
/// [`crate::fields`]. [`reset`](GridMap::reset) starts a new episode on the
/// same bounds.
#[derive(Debug, Clone)]
pub struct GridMap {
    xy_resolution: f64,
    heading_resolution: f64,
    bounds: Option<WorldBounds>,
    pub(crate) cache: Option<NodeCache>,
    /// Free cells with at least one obstacle neighbour.
    pub(crate) boundary_free: BTreeSet<CellKey>,
    /// Rasterized obstacle cells.
    pub(crate) boundary_obstacle: BTreeSet<CellKey>,
    start: Option<CellKey>,
    goal: Option<CellKey>,
    pub(crate) max_cost: f64,
    generation: u64,
}

impl Default for GridMap {
    fn default() -> Self {
        Self {
            xy_resolution: DEFAULT_XY_RESOLUTION,
            heading_resolution: DEFAULT_HEADING_RESOLUTION,
            bounds: None,
            cache: None,
            boundary_free: BTreeSet::new(),
            boundary_obstacle: BTreeSet::new(),
            start: None,
            goal: None,
            max_cost: 0.0,
            generation: 0,
        }
    }
}

impl GridMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply resolution, heading resolution and bounds in the required order.
    pub fn from_config(config: &GridMapConfig) -> Result<Self, GridMapError> {
        let mut map = Self::new();
        map.set_xy_resolution(config.xy_resolution)?;
        map.set_heading_resolution(config.heading_resolution);
        let b = config.bounds;
        map.set_bounds(b.xmin, b.xmax, b.ymin, b.ymax)?;
        Ok(map)
    }

    /// Set the cell size in meters.
    ///
    /// Extents are derived from the resolution at [`set_bounds`] time, so
    /// changing it afterwards drops the bounds and the cache; bounds must be
    /// set again before the map can be used.
    ///
    /// [`set_bounds`]: GridMap::set_bounds
    pub fn set_xy_resolution(&mut self, resolution: f64) -> Result<(), GridMapError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GridMapError::InvalidResolution(resolution));
        }
        if self.bounds.is_some() && resolution != self.xy_resolution {
            warn!(
                "xy resolution changed from {} to {} after bounds were set; bounds cleared",
                self.xy_resolution, resolution
            );
            self.bounds = None;
            self.cache = None;
            self.clear_episode();
        }
        self.xy_resolution = resolution;
        Ok(())
    }

    pub fn set_heading_resolution(&mut self, resolution: f64) {
        self.heading_resolution = resolution;
    }

    /// Replace the world rectangle and rebuild an empty cache for it.
    pub fn set_bounds(
        &mut self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> Result<(), GridMapError> {
        let bounds = WorldBounds::new(xmin, xmax, ymin, ymax)?;
        let extents = GridExtents::from_bounds(&bounds, self.xy_resolution)?;
        self.bounds = Some(bounds);
        self.cache = Some(NodeCache::new(extents));
        self.clear_episode();
        Ok(())
    }

    #[inline]
    pub fn xy_resolution(&self) -> f64 {
        self.xy_resolution
    }

    #[inline]
    pub fn heading_resolution(&self) -> f64 {
        self.heading_resolution
    }

    #[inline]
    pub fn bounds(&self) -> Option<&WorldBounds> {
        self.bounds.as_ref()
    }

    #[inline]
    pub fn extents(&self) -> Option<&GridExtents> {
        self.cache.as_ref().map(NodeCache::extents)
    }

    pub(crate) fn cache_ref(&self) -> Result<&NodeCache, GridMapError> {
        self.cache.as_ref().ok_or(GridMapError::BoundsUnset)
    }

    pub(crate) fn cache_mut(&mut self) -> Result<&mut NodeCache, GridMapError> {
        self.cache.as_mut().ok_or(GridMapError::BoundsUnset)
    }

    fn require_bounds(&self) -> Result<&WorldBounds, GridMapError> {
        self.bounds.as_ref().ok_or(GridMapError::BoundsUnset)
    }

    /// Floor of `(p - min) / resolution` per axis. Non-finite points are rejected.
    pub fn world_to_grid(&self, p: DVec2) -> Result<IVec2, GridMapError> {
        let bounds = self.require_bounds()?;
        if !p.is_finite() {
            return Err(GridMapError::InvalidConfig(format!(
                "non-finite point ({}, {})",
                p.x, p.y
            )));
        }
        let g = ((p - bounds.min) / self.xy_resolution).floor();
        Ok(IVec2::new(g.x as i32, g.y as i32))
    }

    /// Lower-left corner of the cell at `coord`.
    pub fn grid_to_world(&self, coord: IVec2) -> Result<DVec2, GridMapError> {
        let bounds = self.require_bounds()?;
        Ok(bounds.min + coord.as_dvec2() * self.xy_resolution)
    }

    /// Build a default cell for `coord` without caching it.
    pub fn create_cell(&self, coord: IVec2) -> Result<Cell, GridMapError> {
        let key = self.cache_ref()?.key_of(coord).ok_or(GridMapError::OutsideGrid {
            gx: coord.x,
            gy: coord.y,
        })?;
        Ok(Cell::new(coord, key))
    }

    pub fn create_cell_from_world(&self, p: DVec2) -> Result<Cell, GridMapError> {
        self.create_cell(self.world_to_grid(p)?)
    }

    /// The cached cell at `coord`, created with default values on first use.
    pub fn get_or_create(&mut self, coord: IVec2) -> Result<&mut Cell, GridMapError> {
        self.cache_mut()?
            .get_or_create_mut(coord)
            .ok_or(GridMapError::OutsideGrid {
                gx: coord.x,
                gy: coord.y,
            })
    }

    pub fn get_or_create_from_world(&mut self, p: DVec2) -> Result<&mut Cell, GridMapError> {
        let coord = self.world_to_grid(p)?;
        self.get_or_create(coord)
    }

    /// Materialize the start cell. On failure the start is left unset.
    pub fn set_start_point(&mut self, x: f64, y: f64) -> Result<CellKey, GridMapError> {
        self.start = None;
        let key = self
            .get_or_create_from_world(DVec2::new(x, y))
            .inspect_err(|err| warn!("start point ({x}, {y}) rejected: {err}"))?
            .key();
        self.start = Some(key);
        Ok(key)
    }

    /// Materialize the goal cell and seed its destination cost to zero.
    /// On failure the goal is left unset.
    pub fn set_end_point(&mut self, x: f64, y: f64) -> Result<CellKey, GridMapError> {
        self.goal = None;
        let cell = self
            .get_or_create_from_world(DVec2::new(x, y))
            .inspect_err(|err| warn!("goal point ({x}, {y}) rejected: {err}"))?;
        cell.set_destination_cost(0.0);
        let key = cell.key();
        self.goal = Some(key);
        Ok(key)
    }

    #[inline]
    pub fn start_key(&self) -> Option<CellKey> {
        self.start
    }

    #[inline]
    pub fn goal_key(&self) -> Option<CellKey> {
        self.goal
    }

    pub fn start_cell(&self) -> Option<&Cell> {
        self.start.and_then(|key| self.cell(key))
    }

    pub fn goal_cell(&self) -> Option<&Cell> {
        self.goal.and_then(|key| self.cell(key))
    }

    /// Cached cell for `key`. Never materializes.
    pub fn cell(&self, key: CellKey) -> Option<&Cell> {
        self.cache.as_ref().and_then(|cache| cache.get(key))
    }

    /// Cached cell at `coord`. Never materializes.
    pub fn cell_at(&self, coord: IVec2) -> Option<&Cell> {
        self.cache.as_ref().and_then(|cache| cache.get_at(coord))
    }

    /// Key for `coord` under the current extents.
    pub fn key_of(&self, coord: IVec2) -> Option<CellKey> {
        self.cache.as_ref().and_then(|cache| cache.key_of(coord))
    }

    /// Destination cost for `key`, or [`UNREACHABLE_COST`] if it was never
    /// materialized.
    pub fn get_heuristic(&self, key: CellKey) -> f64 {
        self.cell(key)
            .map_or(UNREACHABLE_COST, Cell::destination_cost)
    }

    pub fn heuristic_at(&self, coord: IVec2) -> f64 {
        self.cell_at(coord)
            .map_or(UNREACHABLE_COST, Cell::destination_cost)
    }

    /// Inclusive at the maximum index on both axes. False before bounds are set.
    pub fn inside_grid_extents(&self, gx: i32, gy: i32) -> bool {
        self.extents()
            .is_some_and(|extents| extents.contains(IVec2::new(gx, gy)))
    }

    pub fn inside_world_bounds(&self, x: f64, y: f64) -> bool {
        self.bounds
            .is_some_and(|bounds| bounds.contains(DVec2::new(x, y)))
    }

    /// Drop every cell and both boundary sets; bounds and resolution persist.
    pub fn reset(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        self.clear_episode();
    }

    fn clear_episode(&mut self) {
        self.boundary_free.clear();
        self.boundary_obstacle.clear();
        self.start = None;
        self.goal = None;
        self.max_cost = 0.0;
        self.generation += 1;
    }

    /// Materialized cells in key order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cache.iter().flat_map(NodeCache::iter)
    }

    pub fn cell_count(&self) -> usize {
        self.cache.as_ref().map_or(0, NodeCache::len)
    }

    pub fn boundary_free(&self) -> &BTreeSet<CellKey> {
        &self.boundary_free
    }

    pub fn boundary_obstacle(&self) -> &BTreeSet<CellKey> {
        &self.boundary_obstacle
    }

    /// Largest destination cost assigned by the last heuristic pass.
    #[inline]
    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    /// Changes whenever the cached cells stop describing the current episode.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> Vec<CellView> {
        let (Some(bounds), Some(_)) = (self.bounds, self.cache.as_ref()) else {
            return Vec::new();
        };
        self.cells()
            .map(|cell| CellView {
                coord: cell.coord(),
                key: cell.key(),
                world: bounds.min + cell.coord().as_dvec2() * self.xy_resolution,
                destination_cost: cell.destination_cost(),
                obstacle_distance: cell.obstacle_distance(),
                available: cell.is_available(),
                generation: self.generation,
            })
            .collect()
    }
}
