pub mod fields;
pub mod grid;
pub mod iterators;
pub mod loaders;
pub mod types;
pub mod visualization;

pub use fields::{FieldsReport, compute_fields};
pub use grid::{Cell, CellKey, CellView, GridMap, PlannerFields};
pub use loaders::{EpisodeConfig, load_episode};
pub use types::{GridMapConfig, GridMapError, UNREACHABLE_COST};
