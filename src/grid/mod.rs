pub mod cache;
pub mod cell;
pub mod map;
pub mod obstacles;
pub mod traits;

pub use cache::NodeCache;
pub use cell::{Cell, CellKey};
pub use map::{CellView, GridMap};
pub use traits::PlannerFields;
