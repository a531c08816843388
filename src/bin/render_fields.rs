use std::path::PathBuf;

use log::info;

use heuristic_grid::{GridMapError, load_episode};
use heuristic_grid::visualization::FieldRenderer;

fn main() -> Result<(), GridMapError> {
    env_logger::init();

    let mut args = std::env::args();
    let _binary = args.next();
    let yaml_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: render_fields <episode.yaml> [out_dir]");
            return Ok(());
        }
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);

    let episode = load_episode(&yaml_path)?;
    let (map, report) = episode.run()?;
    info!(
        "{}: {} obstacle cells, {} reachable, {} unreachable, max cost {}",
        yaml_path,
        report.obstacle_cells,
        report.clearance.reachable,
        report.clearance.unreachable,
        report.heuristic.max_cost
    );

    std::fs::create_dir_all(&out_dir)?;
    let renderer = FieldRenderer::default();
    renderer
        .heuristic_image(&map)
        .save(out_dir.join("heuristic.png"))?;
    renderer
        .obstacle_image(&map)
        .save(out_dir.join("clearance.png"))?;
    renderer
        .boundary_image(&map)
        .save(out_dir.join("boundary.png"))?;

    Ok(())
}
