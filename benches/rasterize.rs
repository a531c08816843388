use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use glam::DVec2;

use heuristic_grid::GridMap;
use heuristic_grid::types::GridExtents;
use heuristic_grid::iterators::outline_cells;

fn bench_outline_cells(c: &mut Criterion) {
    let points = vec![
        DVec2::new(10.0, 10.0),
        DVec2::new(110.0, 25.0),
        DVec2::new(90.0, 110.0),
        DVec2::new(15.0, 80.0),
    ];

    let extents = GridExtents {
        max: glam::IVec2::new(2400, 2400),
    };

    c.bench_function("outline_cells_quad_100m", |b| {
        b.iter(|| {
            let count = outline_cells(black_box(&points), DVec2::ZERO, 0.05, extents).count();
            black_box(count);
        });
    });
}

fn bench_add_polygon_obstacle(c: &mut Criterion) {
    let mut map = GridMap::new();
    map.set_xy_resolution(0.1).unwrap();
    map.set_bounds(0.0, 128.0, 0.0, 128.0).unwrap();

    let points = vec![
        DVec2::new(10.0, 10.0),
        DVec2::new(110.0, 10.0),
        DVec2::new(110.0, 110.0),
        DVec2::new(10.0, 110.0),
    ];

    c.bench_function("add_polygon_obstacle_square_100m", |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                let added = map.add_polygon_obstacle(&points).unwrap();
                black_box(added);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_outline_cells, bench_add_polygon_obstacle);
criterion_main!(benches);
