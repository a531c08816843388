use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridMapError {
    #[error("world bounds have not been set")]
    BoundsUnset,
    #[error("goal point has not been set")]
    GoalUnset,
    #[error("invalid xy resolution: {0}")]
    InvalidResolution(f64),
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
    #[error("cell ({gx}, {gy}) is outside the grid extents")]
    OutsideGrid { gx: i32, gy: i32 },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
