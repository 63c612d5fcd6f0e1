mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tile_plan::plan::{RandomPoints, RandomPointsSpec};
use tile_plan::sampling::Shape;

const COUNTS: [usize; 4] = [10, 100, 500, 2000];

fn random_points_benches(c: &mut Criterion) {
    for (label, allow_overlap) in [("overlap", true), ("no_overlap", false)] {
        for shape in [Shape::Ellipse, Shape::Rectangle] {
            let mut group = c.benchmark_group(format!("sampling/random/{shape:?}/{label}"));
            for &count in &COUNTS {
                let plan = RandomPoints::try_new(
                    RandomPointsSpec::new(count)
                        .with_extent(10_000.0, 10_000.0)
                        .with_shape(shape)
                        .with_seed(0xC0FFEE ^ count as u64)
                        .with_allow_overlap(allow_overlap)
                        .with_fov(50.0, 50.0),
                )
                .expect("valid plan");
                group.throughput(common::positions_throughput(count));

                group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                    b.iter(|| {
                        let pts = plan.sample_points(&mut ());
                        black_box(pts.len());
                    });
                });
            }
            group.finish();
        }
    }
}

criterion_group! {
    name = benches;
    config = common::plan_criterion();
    targets = random_points_benches
}
criterion_main!(benches);
