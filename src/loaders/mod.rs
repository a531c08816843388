pub mod episode;

pub use episode::{EpisodeConfig, load_episode};
