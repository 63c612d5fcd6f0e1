mod common;

use std::hint::black_box;

use common::{FOVS, STAGE_SIDE};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tile_plan::ordering::OrderMode;
use tile_plan::plan::{GridFromEdges, GridFromPolygon, GridLayout};

const MODES: [OrderMode; 3] = [
    OrderMode::RowWise,
    OrderMode::RowWiseSnake,
    OrderMode::Spiral,
];

fn grid_edges_benches(c: &mut Criterion) {
    for mode in MODES {
        let mut group = c.benchmark_group(format!("grid/edges/{mode:?}"));
        for &fov in &FOVS {
            let plan = GridFromEdges::try_new(
                STAGE_SIDE,
                0.0,
                0.0,
                STAGE_SIDE,
                common::square_fov(fov, mode),
            )
            .expect("valid plan");
            let expected = plan.iter_grid_positions(None).len();
            group.throughput(common::positions_throughput(expected));

            group.bench_with_input(BenchmarkId::from_parameter(fov), &fov, |b, _| {
                b.iter(|| {
                    let n = plan.iter_grid_positions(None).count();
                    black_box(n);
                });
            });
        }
        group.finish();
    }
}

fn grid_polygon_benches(c: &mut Criterion) {
    let spec = common::star(12, 450.0, 200.0).with_offset(10.0);
    let mut group = c.benchmark_group("grid/polygon/star");

    for &fov in &FOVS {
        let plan =
            GridFromPolygon::try_new(&spec, common::square_fov(fov, OrderMode::RowWiseSnake))
                .expect("valid polygon");
        let expected = plan.num_positions().expect("fov set");
        group.throughput(common::positions_throughput(expected));

        group.bench_with_input(BenchmarkId::from_parameter(fov), &fov, |b, _| {
            b.iter(|| {
                let n = plan.num_positions().expect("fov set");
                black_box(n);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::plan_criterion();
    targets = grid_edges_benches, grid_polygon_benches
}
criterion_main!(benches);
