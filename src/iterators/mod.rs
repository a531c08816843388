pub mod polygon;
pub mod segment;

pub use polygon::{PolygonEdges, outline_cells};
pub use segment::{SegmentCells, clip_segment};
