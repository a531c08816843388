use std::path::Path;

use glam::DVec2;
use serde::Deserialize;

use crate::fields::{FieldsReport, compute_fields};
use crate::grid::GridMap;
use crate::types::{GridMapConfig, GridMapError};

/// One planning episode as described in a YAML file.
///
/// ```yaml
/// grid:
///   xy_resolution: 0.5
///   bounds: { xmin: 0.0, xmax: 10.0, ymin: 0.0, ymax: 10.0 }
/// start: [1.0, 1.0]
/// goal: [9.0, 9.0]
/// obstacles:
///   - [[3.0, 3.0], [7.0, 3.0], [7.0, 7.0], [3.0, 7.0]]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EpisodeConfig {
    pub grid: GridMapConfig,
    #[serde(default)]
    pub start: Option<[f64; 2]>,
    pub goal: [f64; 2],
    /// Closed polygons, vertices in world coordinates.
    #[serde(default)]
    pub obstacles: Vec<Vec<[f64; 2]>>,
}

impl EpisodeConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GridMapError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Obstacle polygons as world points. Rejects non-finite vertices.
    pub fn polygons(&self) -> Result<Vec<Vec<DVec2>>, GridMapError> {
        self.obstacles
            .iter()
            .enumerate()
            .map(|(index, polygon)| {
                polygon
                    .iter()
                    .map(|&[x, y]| {
                        let p = DVec2::new(x, y);
                        if p.is_finite() {
                            Ok(p)
                        } else {
                            Err(GridMapError::InvalidConfig(format!(
                                "obstacle {index} has a non-finite vertex ({x}, {y})"
                            )))
                        }
                    })
                    .collect::<Result<Vec<DVec2>, GridMapError>>()
            })
            .collect()
    }

    /// Build the grid map, place start and goal, and compute both fields.
    pub fn run(&self) -> Result<(GridMap, FieldsReport), GridMapError> {
        let polygons = self.polygons()?;
        let mut map = GridMap::from_config(&self.grid)?;
        if let Some([x, y]) = self.start {
            map.set_start_point(x, y)?;
        }
        let [x, y] = self.goal;
        map.set_end_point(x, y)?;

        let report = compute_fields(&mut map, polygons.iter().map(Vec::as_slice))?;
        Ok((map, report))
    }
}

pub fn load_episode(yaml_path: impl AsRef<Path>) -> Result<EpisodeConfig, GridMapError> {
    let yaml_str = std::fs::read_to_string(yaml_path.as_ref())?;
    EpisodeConfig::from_yaml_str(&yaml_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPISODE: &str = "
grid:
  xy_resolution: 1.0
  bounds: { xmin: 0, xmax: 10, ymin: 0, ymax: 10 }
goal: [9.5, 9.5]
obstacles:
  - [[5.5, 5.5]]
";

    #[test]
    fn parses_minimal_episode() {
        let config = EpisodeConfig::from_yaml_str(EPISODE).unwrap();
        assert!(config.start.is_none());
        assert_eq!(config.goal, [9.5, 9.5]);
        assert_eq!(config.polygons().unwrap(), vec![vec![DVec2::new(5.5, 5.5)]]);
    }

    #[test]
    fn run_computes_fields() {
        let config = EpisodeConfig::from_yaml_str(EPISODE).unwrap();
        let (map, report) = config.run().unwrap();
        assert_eq!(report.obstacle_cells, 1);
        assert_eq!(map.heuristic_at(glam::IVec2::new(0, 0)), 18.0);
    }

    #[test]
    fn missing_goal_is_a_yaml_error() {
        let result = EpisodeConfig::from_yaml_str(
            "grid:\n  bounds: { xmin: 0, xmax: 1, ymin: 0, ymax: 1 }\n",
        );
        assert!(matches!(result, Err(GridMapError::Yaml(_))));
    }

    #[test]
    fn goal_outside_grid_is_rejected() {
        let mut config = EpisodeConfig::from_yaml_str(EPISODE).unwrap();
        config.goal = [40.0, 1.0];
        assert!(matches!(
            config.run(),
            Err(GridMapError::OutsideGrid { gx: 40, gy: 1 })
        ));
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        let mut config = EpisodeConfig::from_yaml_str(EPISODE).unwrap();
        config.obstacles.push(vec![[f64::NAN, 0.0]]);
        assert!(matches!(
            config.polygons(),
            Err(GridMapError::InvalidConfig(_))
        ));
    }
}
