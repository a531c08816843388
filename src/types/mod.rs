pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::GridMapError;
pub use geometry::{NEIGHBOR_OFFSETS, WorldBounds, neighbors4};
pub use info::{BoundsConfig, GridExtents, GridMapConfig};
